use serde::{Deserialize, Serialize};

use crate::utils::constants::{
    DEFAULT_COMPUTER_MIN_YEAR, DEFAULT_OBJECTS_API_URL, DEFAULT_OBJECT_MIN_YEAR, OBJECTS_PATH,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    pub objects_api_url: String,
    pub object_min_year: i32,
    pub computer_min_year: i32,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            objects_api_url: DEFAULT_OBJECTS_API_URL.to_string(),
            object_min_year: DEFAULT_OBJECT_MIN_YEAR,
            computer_min_year: DEFAULT_COMPUTER_MIN_YEAR,
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("OBJECTS_API_URL"),
            option_env!("OBJECT_MIN_YEAR"),
            option_env!("COMPUTER_MIN_YEAR"),
            option_env!("ENABLE_LOGGING"),
        )
    }

    /// Valores ausentes o no parseables caen en los defaults
    fn from_values(
        objects_api_url: Option<&str>,
        object_min_year: Option<&str>,
        computer_min_year: Option<&str>,
        enable_logging: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            objects_api_url: objects_api_url
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.objects_api_url),
            object_min_year: object_min_year
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.object_min_year),
            computer_min_year: computer_min_year
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.computer_min_year),
            enable_logging: enable_logging
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.enable_logging),
        }
    }

    /// URL completa del endpoint de creación de objetos
    pub fn objects_url(&self) -> String {
        format!("{}{}", self.objects_api_url.trim_end_matches('/'), OBJECTS_PATH)
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_values_fall_back_to_defaults() {
        let config = AppConfig::from_values(None, None, None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.objects_url(), "https://api.restful-api.dev/objects");
        assert_eq!(config.object_min_year, 1900);
        assert_eq!(config.computer_min_year, 1970);
    }

    #[test]
    fn test_values_override_defaults() {
        let config = AppConfig::from_values(
            Some("http://localhost:8080/"),
            Some("1950"),
            Some(" 1980 "),
            Some("false"),
        );
        assert_eq!(config.objects_url(), "http://localhost:8080/objects");
        assert_eq!(config.object_min_year, 1950);
        assert_eq!(config.computer_min_year, 1980);
        assert_eq!(config.log_level(), log::Level::Warn);
    }

    #[test]
    fn test_unparseable_values_are_ignored() {
        let config = AppConfig::from_values(Some("   "), Some("19xx"), Some(""), Some("yes"));
        assert_eq!(config, AppConfig::default());
    }
}
