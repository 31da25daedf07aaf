use std::fmt;

use super::{FormControl, FormValue, ValidationError};

/// Campo + regla que falló, en el orden del esquema
#[derive(Debug, Clone, PartialEq)]
pub struct FieldFailure {
    pub field: &'static str,
    pub error: ValidationError,
}

impl fmt::Display for FieldFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.field, self.error.key(), self.error)
    }
}

/// Conjunto ordenado de controles con nombre
#[derive(Debug, Clone, Default)]
pub struct FormGroup {
    controls: Vec<(&'static str, FormControl)>,
}

impl FormGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_control(mut self, name: &'static str, control: FormControl) -> Self {
        self.controls.push((name, control));
        self
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.controls.iter().map(|(name, _)| *name)
    }

    pub fn get(&self, name: &str) -> Option<&FormControl> {
        self.controls
            .iter()
            .find(|(control_name, _)| *control_name == name)
            .map(|(_, control)| control)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut FormControl> {
        self.controls
            .iter_mut()
            .find(|(control_name, _)| *control_name == name)
            .map(|(_, control)| control)
    }

    /// Texto del control, "" si no existe o es un checkbox
    pub fn text(&self, name: &str) -> &str {
        self.get(name).map(|c| c.value().as_text()).unwrap_or("")
    }

    pub fn checked(&self, name: &str) -> bool {
        self.get(name).map(|c| c.value().as_bool()).unwrap_or(false)
    }

    /// Devuelve false si el control no existe
    pub fn set_value(&mut self, name: &str, value: impl Into<FormValue>) -> bool {
        match self.get_mut(name) {
            Some(control) => {
                control.set_value(value);
                true
            }
            None => {
                log::warn!("⚠️ Control desconocido: {}", name);
                false
            }
        }
    }

    /// Aplica varios valores a la vez; los nombres desconocidos se ignoran
    pub fn patch_value<'a, I, V>(&mut self, values: I)
    where
        I: IntoIterator<Item = (&'a str, V)>,
        V: Into<FormValue>,
    {
        for (name, value) in values {
            if let Some(control) = self.get_mut(name) {
                control.set_value(value);
            }
        }
    }

    pub fn is_valid(&self) -> bool {
        self.controls.iter().all(|(_, control)| control.is_valid())
    }

    pub fn is_pristine(&self) -> bool {
        self.controls.iter().all(|(_, control)| control.is_pristine())
    }

    pub fn mark_all_as_touched(&mut self) {
        for (_, control) in self.controls.iter_mut() {
            control.mark_as_touched();
        }
    }

    pub fn reset(&mut self) {
        for (_, control) in self.controls.iter_mut() {
            control.reset();
        }
    }

    /// Snapshot de los valores actuales
    pub fn value(&self) -> Vec<(&'static str, FormValue)> {
        self.controls
            .iter()
            .map(|(name, control)| (*name, control.value().clone()))
            .collect()
    }

    pub fn failures(&self) -> Vec<FieldFailure> {
        self.controls
            .iter()
            .flat_map(|(name, control)| {
                control.errors().into_iter().map(move |error| FieldFailure {
                    field: *name,
                    error,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::Validator;

    fn sample_group() -> FormGroup {
        FormGroup::new()
            .with_control(
                "name",
                FormControl::new("", vec![Validator::Required, Validator::MinLength(2)]),
            )
            .with_control("note", FormControl::new("", vec![]))
            .with_control("terms", FormControl::new(false, vec![Validator::RequiredTrue]))
    }

    #[test]
    fn test_group_is_invalid_until_every_rule_passes() {
        let mut group = sample_group();
        assert!(!group.is_valid());

        group.patch_value([("name", FormValue::from("Jo")), ("terms", true.into())]);
        assert!(group.is_valid());

        assert!(group.set_value("name", ""));
        assert!(!group.is_valid());
    }

    #[test]
    fn test_failures_follow_schema_order() {
        let mut group = sample_group();
        group.set_value("name", "J");
        let failures = group.failures();
        assert_eq!(
            failures,
            vec![
                FieldFailure {
                    field: "name",
                    error: ValidationError::MinLength {
                        required: 2,
                        actual: 1
                    },
                },
                FieldFailure {
                    field: "terms",
                    error: ValidationError::RequiredTrue,
                },
            ]
        );
        assert!(failures[0].to_string().starts_with("name (minlength)"));
    }

    #[test]
    fn test_unknown_controls_are_ignored() {
        let mut group = sample_group();
        assert!(!group.set_value("missing", "x"));
        group.patch_value([("missing", "x")]);
        assert!(group.get("missing").is_none());
        assert_eq!(group.text("missing"), "");
        assert!(group.is_pristine());
    }

    #[test]
    fn test_reset_and_touch_all() {
        let mut group = sample_group();
        group.set_value("name", "Jane");
        group.mark_all_as_touched();
        assert!(group.names().all(|name| group.get(name).unwrap().is_touched()));

        group.reset();
        assert!(group.is_pristine());
        assert_eq!(group.text("name"), "");
        assert!(!group.checked("terms"));
        assert!(group.names().all(|name| !group.get(name).unwrap().is_touched()));
    }
}
