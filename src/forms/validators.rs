// ============================================================================
// VALIDATORS - Predicados por campo
// ============================================================================
// Todos salvo Required/RequiredTrue ignoran valores vacíos: un campo vacío
// solo reporta "required".
// ============================================================================

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use super::FormValue;

const EMAIL_MAX_LENGTH: usize = 254;
const EMAIL_LOCAL_PART_MAX_LENGTH: usize = 64;

lazy_static! {
    /// Año de exactamente 4 dígitos ASCII (`\d` en regex acepta cualquier dígito Unicode)
    pub static ref YEAR_PATTERN: Regex = Regex::new(r"^[0-9]{4}$").unwrap();

    /// Decimal con hasta 2 decimales
    pub static ref PRICE_PATTERN: Regex = Regex::new(r"^[0-9]+(\.[0-9]{1,2})?$").unwrap();

    static ref EMAIL_PATTERN: Regex = Regex::new(
        r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    )
    .unwrap();
}

#[derive(Debug, Clone)]
pub enum Validator {
    Required,
    /// Checkbox que debe estar marcado
    RequiredTrue,
    MinLength(usize),
    /// El valor completo debe cumplir el patrón (anclado con ^...$)
    Pattern(&'static Regex),
    Min(f64),
    Max(f64),
    Email,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("value is required")]
    Required,

    #[error("value must be checked")]
    RequiredTrue,

    #[error("expected at least {required} characters, got {actual}")]
    MinLength { required: usize, actual: usize },

    #[error("value does not match pattern {pattern}")]
    Pattern { pattern: String },

    #[error("value {actual} is lower than {min}")]
    Min { min: f64, actual: f64 },

    #[error("value {actual} is greater than {max}")]
    Max { max: f64, actual: f64 },

    #[error("value is not a valid email address")]
    Email,
}

impl ValidationError {
    /// Clave de la regla que falló
    pub fn key(&self) -> &'static str {
        match self {
            ValidationError::Required | ValidationError::RequiredTrue => "required",
            ValidationError::MinLength { .. } => "minlength",
            ValidationError::Pattern { .. } => "pattern",
            ValidationError::Min { .. } => "min",
            ValidationError::Max { .. } => "max",
            ValidationError::Email => "email",
        }
    }
}

impl Validator {
    pub fn validate(&self, value: &FormValue) -> Result<(), ValidationError> {
        match self {
            Validator::Required => {
                if value.is_empty() {
                    return Err(ValidationError::Required);
                }
            }
            Validator::RequiredTrue => {
                if !value.as_bool() {
                    return Err(ValidationError::RequiredTrue);
                }
            }
            Validator::MinLength(required) => {
                if let Some(text) = non_empty_text(value) {
                    let actual = text.chars().count();
                    if actual < *required {
                        return Err(ValidationError::MinLength {
                            required: *required,
                            actual,
                        });
                    }
                }
            }
            Validator::Pattern(pattern) => {
                if let Some(text) = non_empty_text(value) {
                    if !pattern.is_match(text) {
                        return Err(ValidationError::Pattern {
                            pattern: pattern.as_str().to_string(),
                        });
                    }
                }
            }
            Validator::Min(min) => {
                if let Some(actual) = numeric(value) {
                    if actual < *min {
                        return Err(ValidationError::Min { min: *min, actual });
                    }
                }
            }
            Validator::Max(max) => {
                if let Some(actual) = numeric(value) {
                    if actual > *max {
                        return Err(ValidationError::Max { max: *max, actual });
                    }
                }
            }
            Validator::Email => {
                if let Some(text) = non_empty_text(value) {
                    if !is_email(text) {
                        return Err(ValidationError::Email);
                    }
                }
            }
        }
        Ok(())
    }
}

fn non_empty_text(value: &FormValue) -> Option<&str> {
    match value {
        FormValue::Text(text) if !text.is_empty() => Some(text),
        _ => None,
    }
}

/// Valores no numéricos no se comparan (los atrapa el patrón)
fn numeric(value: &FormValue) -> Option<f64> {
    non_empty_text(value)
        .and_then(|text| text.trim().parse::<f64>().ok())
        .filter(|number| number.is_finite())
}

fn is_email(text: &str) -> bool {
    if text.len() > EMAIL_MAX_LENGTH {
        return false;
    }
    match text.split_once('@') {
        Some((local, _)) if local.len() <= EMAIL_LOCAL_PART_MAX_LENGTH => {
            EMAIL_PATTERN.is_match(text)
        }
        _ => false,
    }
}
