// ============================================================================
// FORMS - Esquemas declarativos de formulario
// ============================================================================
// Cada vista construye un FormGroup con sus controles y validadores.
// Sin DOM: los hooks/vistas solo empujan valores y leen errores.
// ============================================================================

pub mod control;
pub mod group;
pub mod validators;

pub use control::FormControl;
pub use group::{FieldFailure, FormGroup};
pub use validators::{ValidationError, Validator, PRICE_PATTERN, YEAR_PATTERN};

use serde::Serialize;

/// Valor de un control: texto libre o checkbox
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FormValue {
    Text(String),
    Bool(bool),
}

impl FormValue {
    /// Vacío = texto sin caracteres. Un checkbox nunca está vacío.
    pub fn is_empty(&self) -> bool {
        match self {
            FormValue::Text(text) => text.is_empty(),
            FormValue::Bool(_) => false,
        }
    }

    pub fn as_text(&self) -> &str {
        match self {
            FormValue::Text(text) => text,
            FormValue::Bool(_) => "",
        }
    }

    pub fn as_bool(&self) -> bool {
        matches!(self, FormValue::Bool(true))
    }
}

impl Default for FormValue {
    fn default() -> Self {
        FormValue::Text(String::new())
    }
}

impl From<&str> for FormValue {
    fn from(value: &str) -> Self {
        FormValue::Text(value.to_string())
    }
}

impl From<String> for FormValue {
    fn from(value: String) -> Self {
        FormValue::Text(value)
    }
}

impl From<bool> for FormValue {
    fn from(value: bool) -> Self {
        FormValue::Bool(value)
    }
}
