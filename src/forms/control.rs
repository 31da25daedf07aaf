use super::{FormValue, ValidationError, Validator};

/// Un campo del formulario con sus validadores y estado de interacción
#[derive(Debug, Clone)]
pub struct FormControl {
    initial: FormValue,
    value: FormValue,
    validators: Vec<Validator>,
    touched: bool,
    dirty: bool,
}

impl FormControl {
    pub fn new(initial: impl Into<FormValue>, validators: Vec<Validator>) -> Self {
        let initial = initial.into();
        Self {
            value: initial.clone(),
            initial,
            validators,
            touched: false,
            dirty: false,
        }
    }

    pub fn value(&self) -> &FormValue {
        &self.value
    }

    /// Valor introducido por el usuario: el control deja de estar pristine
    pub fn set_value(&mut self, value: impl Into<FormValue>) {
        self.value = value.into();
        self.dirty = true;
    }

    pub fn mark_as_touched(&mut self) {
        self.touched = true;
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_pristine(&self) -> bool {
        !self.dirty
    }

    /// Errores en el orden en que se declararon los validadores
    pub fn errors(&self) -> Vec<ValidationError> {
        self.validators
            .iter()
            .filter_map(|validator| validator.validate(&self.value).err())
            .collect()
    }

    pub fn has_error(&self, key: &str) -> bool {
        self.errors().iter().any(|error| error.key() == key)
    }

    pub fn is_valid(&self) -> bool {
        self.validators
            .iter()
            .all(|validator| validator.validate(&self.value).is_ok())
    }

    pub fn reset(&mut self) {
        self.value = self.initial.clone();
        self.touched = false;
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_control_is_pristine_and_untouched() {
        let control = FormControl::new("", vec![Validator::Required]);
        assert!(control.is_pristine());
        assert!(!control.is_touched());
        assert!(!control.is_valid());
        assert_eq!(control.errors(), vec![ValidationError::Required]);
    }

    #[test]
    fn test_empty_value_reports_only_required() {
        let control = FormControl::new(
            "",
            vec![
                Validator::Required,
                Validator::MinLength(2),
                Validator::Min(1.0),
            ],
        );
        assert_eq!(control.errors(), vec![ValidationError::Required]);
        assert!(control.has_error("required"));
        assert!(!control.has_error("minlength"));
    }

    #[test]
    fn test_set_value_marks_dirty_and_reset_restores_initial() {
        let mut control = FormControl::new("", vec![Validator::Required]);
        control.set_value("MacBook Pro");
        control.mark_as_touched();
        assert!(control.is_dirty());
        assert!(control.is_valid());

        control.reset();
        assert_eq!(control.value(), &FormValue::from(""));
        assert!(control.is_pristine());
        assert!(!control.is_touched());
    }
}
