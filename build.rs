use std::env;
use std::fs;
use std::path::Path;

/// Claves que lee config.rs con option_env!
const CONFIG_KEYS: [&str; 4] = [
    "OBJECTS_API_URL",
    "OBJECT_MIN_YEAR",
    "COMPUTER_MIN_YEAR",
    "ENABLE_LOGGING",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=No .env file found. Using default values (see .env.example).");
        return;
    };

    for (line_number, line) in contents.lines().enumerate() {
        let Some((key, value)) = parse_line(line) else {
            continue;
        };

        if !CONFIG_KEYS.contains(&key) {
            println!(
                "cargo:warning=.env:{}: unknown key {} ignored",
                line_number + 1,
                key
            );
            continue;
        }

        // El entorno del proceso tiene prioridad sobre .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}

/// `KEY=VALUE`, `KEY="VALUE"`; comentarios y líneas vacías dan None
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    let value = value.trim();
    let value = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value);
    Some((key.trim(), value))
}
