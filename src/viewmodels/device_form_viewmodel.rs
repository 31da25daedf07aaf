// ============================================================================
// DEVICE FORM VIEWMODEL - Alta de objeto / computadora
// ============================================================================
// Un único POST por envío. `is_submitting` bloquea envíos concurrentes y se
// activa de forma síncrona antes de lanzar la petición.
// ============================================================================

use chrono::{Datelike, Local};

use crate::config::CONFIG;
use crate::forms::{FormControl, FormGroup, Validator, PRICE_PATTERN, YEAR_PATTERN};
use crate::models::{CreatedObject, NewObjectRequest, ObjectData};
use crate::services::{ApiError, ObjectsBackend};

pub const FIELD_NAME: &str = "name";
pub const FIELD_YEAR: &str = "year";
pub const FIELD_PRICE: &str = "price";
pub const FIELD_CPU_MODEL: &str = "cpuModel";
pub const FIELD_HARD_DISK_SIZE: &str = "hardDiskSize";

const MIN_TEXT_LENGTH: usize = 2;
const MIN_PRICE: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceFormKind {
    /// Errores visibles tras tocar el campo
    Object,
    /// Errores visibles con el campo sucio o tocado, con banners de resultado
    Computer,
}

impl DeviceFormKind {
    pub fn title(&self) -> &'static str {
        match self {
            DeviceFormKind::Object => "Add Object",
            DeviceFormKind::Computer => "Add Computer",
        }
    }

    fn success_message(&self) -> &'static str {
        match self {
            DeviceFormKind::Object => "Object created successfully!",
            DeviceFormKind::Computer => "Computer added successfully!",
        }
    }

    fn error_message(&self) -> &'static str {
        match self {
            DeviceFormKind::Object => "There was a problem creating the object. Please try again.",
            DeviceFormKind::Computer => "There was a problem adding the computer. Please try again.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceFormConfig {
    pub kind: DeviceFormKind,
    pub min_year: i32,
    pub current_year: i32,
}

impl DeviceFormConfig {
    pub fn for_kind(kind: DeviceFormKind) -> Self {
        let min_year = match kind {
            DeviceFormKind::Object => CONFIG.object_min_year,
            DeviceFormKind::Computer => CONFIG.computer_min_year,
        };
        Self::with_years(kind, min_year, current_year())
    }

    pub fn with_years(kind: DeviceFormKind, min_year: i32, current_year: i32) -> Self {
        Self {
            kind,
            min_year,
            current_year,
        }
    }
}

/// Año local del navegador
pub fn current_year() -> i32 {
    Local::now().year()
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Formulario inválido o envío en curso: no hubo llamada
    Rejected,
    /// 2xx; el objeto solo si el body era reconocible
    Created(Option<CreatedObject>),
    Failed(ApiError),
}

pub struct DeviceFormViewModel {
    config: DeviceFormConfig,
    form: FormGroup,
    is_submitting: bool,
    success_message: Option<String>,
    error_message: Option<String>,
}

impl DeviceFormViewModel {
    pub fn new(config: DeviceFormConfig) -> Self {
        Self {
            form: Self::build_form(&config),
            config,
            is_submitting: false,
            success_message: None,
            error_message: None,
        }
    }

    fn build_form(config: &DeviceFormConfig) -> FormGroup {
        let text_rules = || vec![Validator::Required, Validator::MinLength(MIN_TEXT_LENGTH)];
        FormGroup::new()
            .with_control(FIELD_NAME, FormControl::new("", text_rules()))
            .with_control(
                FIELD_YEAR,
                FormControl::new(
                    "",
                    vec![
                        Validator::Required,
                        Validator::Pattern(&YEAR_PATTERN),
                        Validator::Min(f64::from(config.min_year)),
                        Validator::Max(f64::from(config.current_year)),
                    ],
                ),
            )
            .with_control(
                FIELD_PRICE,
                FormControl::new(
                    "",
                    vec![
                        Validator::Required,
                        Validator::Pattern(&PRICE_PATTERN),
                        Validator::Min(MIN_PRICE),
                    ],
                ),
            )
            .with_control(FIELD_CPU_MODEL, FormControl::new("", text_rules()))
            .with_control(FIELD_HARD_DISK_SIZE, FormControl::new("", text_rules()))
    }

    pub fn config(&self) -> &DeviceFormConfig {
        &self.config
    }

    pub fn form(&self) -> &FormGroup {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormGroup {
        &mut self.form
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success_message.as_deref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn update_field(&mut self, field: &str, value: String) {
        self.form.set_value(field, value);
    }

    pub fn touch(&mut self, field: &str) {
        if let Some(control) = self.form.get_mut(field) {
            control.mark_as_touched();
        }
    }

    /// Primera fase del envío. Devuelve el body solo si hay que hacer el POST.
    pub fn begin_submit(&mut self) -> Option<NewObjectRequest> {
        self.success_message = None;
        self.error_message = None;

        if self.is_submitting {
            log::warn!("⏳ Envío en curso, se ignora el nuevo intento");
            self.form.mark_all_as_touched();
            return None;
        }
        if !self.form.is_valid() {
            self.form.mark_all_as_touched();
            return None;
        }

        let Some(request) = self.request_body() else {
            log::error!(
                "❌ Año o precio no numéricos: year={:?} price={:?}",
                self.form.text(FIELD_YEAR),
                self.form.text(FIELD_PRICE)
            );
            self.form.mark_all_as_touched();
            return None;
        };
        self.is_submitting = true;
        Some(request)
    }

    /// Segunda fase: aplica el resultado del POST
    pub fn complete_submit(
        &mut self,
        result: Result<Option<CreatedObject>, ApiError>,
    ) -> SubmitOutcome {
        self.is_submitting = false;
        match result {
            Ok(created) => {
                log::info!("✅ Object created successfully: {:?}", created);
                self.form.reset();
                self.success_message = Some(self.config.kind.success_message().to_string());
                SubmitOutcome::Created(created)
            }
            Err(e) => {
                log::error!("❌ Error creating object: {}", e);
                self.error_message = Some(self.config.kind.error_message().to_string());
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// Envío completo contra un backend (las dos fases seguidas)
    pub async fn submit<B: ObjectsBackend + ?Sized>(&mut self, backend: &B) -> SubmitOutcome {
        let Some(request) = self.begin_submit() else {
            return SubmitOutcome::Rejected;
        };
        let result = backend.create_object(&request).await;
        self.complete_submit(result)
    }

    fn request_body(&self) -> Option<NewObjectRequest> {
        let year = self.form.text(FIELD_YEAR).parse::<i32>().ok()?;
        let price = self.form.text(FIELD_PRICE).parse::<f64>().ok()?;
        Some(NewObjectRequest {
            name: self.form.text(FIELD_NAME).to_string(),
            data: ObjectData {
                year,
                price,
                cpu_model: self.form.text(FIELD_CPU_MODEL).to_string(),
                hard_disk_size: self.form.text(FIELD_HARD_DISK_SIZE).to_string(),
            },
        })
    }

    pub fn is_field_invalid(&self, field: &str) -> bool {
        let Some(control) = self.form.get(field) else {
            return false;
        };
        let interacted = match self.config.kind {
            DeviceFormKind::Object => control.is_touched(),
            DeviceFormKind::Computer => control.is_touched() || control.is_dirty(),
        };
        interacted && !control.is_valid()
    }

    /// Mensaje por regla, con precedencia required > minlength > pattern > min > max
    pub fn field_error(&self, field: &str) -> Option<String> {
        if !self.is_field_invalid(field) {
            return None;
        }
        let control = self.form.get(field)?;
        let object = self.config.kind == DeviceFormKind::Object;

        if control.has_error("required") {
            return Some(format!("{} is required", field_label(field)));
        }
        if control.has_error("minlength") {
            return Some(format!(
                "{} must be at least {} characters",
                field_label(field),
                MIN_TEXT_LENGTH
            ));
        }
        if control.has_error("pattern") {
            match (field, object) {
                (FIELD_YEAR, true) => return Some("Year must be a 4-digit number".to_string()),
                (FIELD_YEAR, false) => return Some("Year must be a 4 digit number".to_string()),
                (FIELD_PRICE, true) => {
                    return Some("Price must be a valid number (e.g., 1849.99)".to_string())
                }
                (FIELD_PRICE, false) => {
                    return Some("Price must be a valid number (e.g. 1849.99)".to_string())
                }
                _ => {}
            }
        }
        if control.has_error("min") {
            match field {
                FIELD_YEAR => return Some(format!("Year must be {} or later", self.config.min_year)),
                FIELD_PRICE => return Some("Price must be greater than 0".to_string()),
                _ => {}
            }
        }
        if control.has_error("max") {
            let current_year = self.config.current_year;
            return Some(if object {
                format!("Year cannot be later than {}", current_year)
            } else {
                format!("Year cannot exceed {}", current_year)
            });
        }
        None
    }
}

pub fn field_label(field: &str) -> &str {
    match field {
        FIELD_NAME => "Name",
        FIELD_YEAR => "Year",
        FIELD_PRICE => "Price",
        FIELD_CPU_MODEL => "CPU Model",
        FIELD_HARD_DISK_SIZE => "Hard Disk Size",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::FormValue;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    const CURRENT_YEAR: i32 = 2026;

    /// Backend en memoria: cuenta llamadas y guarda el último body
    struct RecordingBackend {
        calls: Cell<usize>,
        last_request: RefCell<Option<NewObjectRequest>>,
        fail: bool,
    }

    impl RecordingBackend {
        fn succeeding() -> Self {
            Self {
                calls: Cell::new(0),
                last_request: RefCell::new(None),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::succeeding()
            }
        }
    }

    #[async_trait(?Send)]
    impl ObjectsBackend for RecordingBackend {
        async fn create_object(
            &self,
            request: &NewObjectRequest,
        ) -> Result<Option<CreatedObject>, ApiError> {
            self.calls.set(self.calls.get() + 1);
            *self.last_request.borrow_mut() = Some(request.clone());
            if self.fail {
                return Err(ApiError::Http {
                    status: 500,
                    body: "Server error".to_string(),
                });
            }
            Ok(Some(CreatedObject {
                id: "123".to_string(),
                name: request.name.clone(),
                created_at: None,
                data: None,
            }))
        }
    }

    fn object_form() -> DeviceFormViewModel {
        DeviceFormViewModel::new(DeviceFormConfig::with_years(
            DeviceFormKind::Object,
            1900,
            CURRENT_YEAR,
        ))
    }

    fn computer_form() -> DeviceFormViewModel {
        DeviceFormViewModel::new(DeviceFormConfig::with_years(
            DeviceFormKind::Computer,
            1970,
            CURRENT_YEAR,
        ))
    }

    fn fill_valid(vm: &mut DeviceFormViewModel) {
        vm.form_mut().patch_value([
            (FIELD_NAME, "MacBook Pro"),
            (FIELD_YEAR, "2023"),
            (FIELD_PRICE, "1849.99"),
            (FIELD_CPU_MODEL, "Intel Core i9"),
            (FIELD_HARD_DISK_SIZE, "1 TB"),
        ]);
    }

    fn year_valid(vm: &mut DeviceFormViewModel, year: &str) -> bool {
        vm.update_field(FIELD_YEAR, year.to_string());
        vm.form().get(FIELD_YEAR).unwrap().is_valid()
    }

    fn price_valid(vm: &mut DeviceFormViewModel, price: &str) -> bool {
        vm.update_field(FIELD_PRICE, price.to_string());
        vm.form().get(FIELD_PRICE).unwrap().is_valid()
    }

    #[test]
    fn test_initial_state() {
        let vm = object_form();
        assert!(!vm.is_submitting());
        assert!(!vm.form().is_valid());
        assert_eq!(vm.form().names().count(), 5);
        assert!(vm.form().names().all(|name| vm.form().text(name).is_empty()));
    }

    #[test]
    fn test_year_bounds_are_inclusive() {
        let mut vm = object_form();
        assert!(year_valid(&mut vm, "1900"));
        assert!(year_valid(&mut vm, "2026"));
        assert!(!year_valid(&mut vm, "1899"));
        assert!(!year_valid(&mut vm, "2027"));
        assert!(!year_valid(&mut vm, "123"));
        assert!(!year_valid(&mut vm, ""));

        let mut vm = computer_form();
        assert!(year_valid(&mut vm, "1970"));
        assert!(!year_valid(&mut vm, "1969"));
    }

    #[test]
    fn test_price_rules() {
        let mut vm = object_form();
        assert!(!price_valid(&mut vm, "0"));
        assert!(price_valid(&mut vm, "0.01"));
        assert!(price_valid(&mut vm, "100"));
        assert!(price_valid(&mut vm, "99.9"));
        assert!(price_valid(&mut vm, "1849.99"));
        assert!(!price_valid(&mut vm, "12.345"));
        assert!(!price_valid(&mut vm, "abc"));
        assert!(!price_valid(&mut vm, ""));
    }

    #[test]
    fn test_non_ascii_digits_are_rejected() {
        let mut vm = object_form();
        assert!(!year_valid(&mut vm, "٢٠٢٣"));
        assert!(!year_valid(&mut vm, "２０２３"));
        assert!(!price_valid(&mut vm, "１２"));

        let backend = RecordingBackend::succeeding();
        let mut vm = computer_form();
        fill_valid(&mut vm);
        vm.update_field(FIELD_YEAR, "٢٠٢٣".to_string());
        vm.update_field(FIELD_PRICE, "１２".to_string());
        assert!(!vm.form().is_valid());

        assert_eq!(block_on(vm.submit(&backend)), SubmitOutcome::Rejected);
        assert_eq!(backend.calls.get(), 0);
        assert!(vm.form().get(FIELD_YEAR).unwrap().is_touched());
        assert_eq!(
            vm.field_error(FIELD_YEAR).as_deref(),
            Some("Year must be a 4 digit number")
        );
        assert_eq!(
            vm.field_error(FIELD_PRICE).as_deref(),
            Some("Price must be a valid number (e.g. 1849.99)")
        );
    }

    #[test]
    fn test_invalid_form_makes_no_call() {
        let backend = RecordingBackend::succeeding();
        let mut vm = object_form();
        fill_valid(&mut vm);
        vm.update_field(FIELD_NAME, String::new());

        let outcome = block_on(vm.submit(&backend));
        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert_eq!(backend.calls.get(), 0);
        assert!(!vm.is_submitting());
        assert!(vm.form().get(FIELD_PRICE).unwrap().is_touched());
    }

    #[test]
    fn test_second_submit_while_in_flight_is_ignored() {
        let backend = RecordingBackend::succeeding();
        let mut vm = object_form();
        fill_valid(&mut vm);

        let first = vm.begin_submit();
        let second = vm.begin_submit();
        assert!(first.is_some());
        assert!(second.is_none());
        assert!(vm.is_submitting());
        assert_eq!(block_on(vm.submit(&backend)), SubmitOutcome::Rejected);
        assert_eq!(backend.calls.get(), 0);

        let result = block_on(backend.create_object(&first.unwrap()));
        vm.complete_submit(result);
        assert_eq!(backend.calls.get(), 1);
        assert!(!vm.is_submitting());
    }

    #[test]
    fn test_request_body_is_parsed() {
        let backend = RecordingBackend::succeeding();
        let mut vm = object_form();
        vm.form_mut().patch_value([
            (FIELD_NAME, "Test Device"),
            (FIELD_YEAR, "2020"),
            (FIELD_PRICE, "999.50"),
            (FIELD_CPU_MODEL, "AMD Ryzen"),
            (FIELD_HARD_DISK_SIZE, "512 GB"),
        ]);

        block_on(vm.submit(&backend));
        let request = backend.last_request.borrow().clone().unwrap();
        assert_eq!(
            request,
            NewObjectRequest {
                name: "Test Device".to_string(),
                data: ObjectData {
                    year: 2020,
                    price: 999.5,
                    cpu_model: "AMD Ryzen".to_string(),
                    hard_disk_size: "512 GB".to_string(),
                },
            }
        );
    }

    #[test]
    fn test_success_resets_form() {
        let backend = RecordingBackend::succeeding();
        let mut vm = computer_form();
        fill_valid(&mut vm);

        let outcome = block_on(vm.submit(&backend));
        assert!(matches!(outcome, SubmitOutcome::Created(Some(ref created)) if created.id == "123"));
        assert_eq!(backend.calls.get(), 1);
        assert!(!vm.is_submitting());
        assert!(vm.form().is_pristine());
        assert_eq!(vm.form().text(FIELD_NAME), "");
        assert_eq!(vm.success_message(), Some("Computer added successfully!"));
        assert_eq!(vm.error_message(), None);
        assert_eq!(vm.field_error(FIELD_NAME), None);
    }

    #[test]
    fn test_success_without_readable_body_still_resets() {
        let mut vm = object_form();
        fill_valid(&mut vm);

        assert!(vm.begin_submit().is_some());
        let outcome = vm.complete_submit(Ok(None));
        assert_eq!(outcome, SubmitOutcome::Created(None));
        assert!(!vm.is_submitting());
        assert!(vm.form().is_pristine());
        assert_eq!(vm.form().text(FIELD_PRICE), "");
        assert_eq!(vm.success_message(), Some("Object created successfully!"));
        assert_eq!(vm.error_message(), None);
    }

    #[test]
    fn test_failure_keeps_values() {
        let backend = RecordingBackend::failing();
        let mut vm = computer_form();
        fill_valid(&mut vm);
        let before = vm.form().value();

        let outcome = block_on(vm.submit(&backend));
        assert!(matches!(outcome, SubmitOutcome::Failed(ApiError::Http { status: 500, .. })));
        assert!(!vm.is_submitting());
        assert_eq!(vm.form().value(), before);
        assert_eq!(vm.form().text(FIELD_NAME), "MacBook Pro");
        assert_eq!(
            vm.error_message(),
            Some("There was a problem adding the computer. Please try again.")
        );
        assert_eq!(vm.success_message(), None);
    }

    #[test]
    fn test_new_submit_clears_previous_banner() {
        let backend = RecordingBackend::failing();
        let mut vm = computer_form();
        fill_valid(&mut vm);
        block_on(vm.submit(&backend));
        assert!(vm.error_message().is_some());

        vm.update_field(FIELD_NAME, String::new());
        assert_eq!(block_on(vm.submit(&backend)), SubmitOutcome::Rejected);
        assert_eq!(vm.error_message(), None);
        assert_eq!(backend.calls.get(), 1);
    }

    #[test]
    fn test_object_errors_need_touch() {
        let mut vm = object_form();
        vm.update_field(FIELD_NAME, "A".to_string());
        assert!(!vm.is_field_invalid(FIELD_NAME));
        assert_eq!(vm.field_error(FIELD_NAME), None);

        vm.touch(FIELD_NAME);
        assert!(vm.is_field_invalid(FIELD_NAME));
        assert_eq!(
            vm.field_error(FIELD_NAME).as_deref(),
            Some("Name must be at least 2 characters")
        );
    }

    #[test]
    fn test_computer_errors_show_when_dirty() {
        let mut vm = computer_form();
        vm.update_field(FIELD_YEAR, "19".to_string());
        assert_eq!(
            vm.field_error(FIELD_YEAR).as_deref(),
            Some("Year must be a 4 digit number")
        );
    }

    #[test]
    fn test_object_error_messages() {
        let mut vm = object_form();
        vm.form_mut().mark_all_as_touched();

        let mut error_for = |field: &str, value: &str| {
            vm.form_mut().set_value(field, FormValue::from(value));
            vm.field_error(field)
        };

        assert_eq!(error_for(FIELD_NAME, "").as_deref(), Some("Name is required"));
        assert_eq!(error_for(FIELD_YEAR, "").as_deref(), Some("Year is required"));
        assert_eq!(error_for(FIELD_PRICE, "").as_deref(), Some("Price is required"));
        assert_eq!(error_for(FIELD_CPU_MODEL, "").as_deref(), Some("CPU Model is required"));
        assert_eq!(
            error_for(FIELD_HARD_DISK_SIZE, "1").as_deref(),
            Some("Hard Disk Size must be at least 2 characters")
        );
        assert_eq!(
            error_for(FIELD_YEAR, "20").as_deref(),
            Some("Year must be a 4-digit number")
        );
        assert_eq!(
            error_for(FIELD_PRICE, "1.999").as_deref(),
            Some("Price must be a valid number (e.g., 1849.99)")
        );
        assert_eq!(
            error_for(FIELD_YEAR, "1899").as_deref(),
            Some("Year must be 1900 or later")
        );
        assert_eq!(
            error_for(FIELD_PRICE, "0").as_deref(),
            Some("Price must be greater than 0")
        );
        assert_eq!(
            error_for(FIELD_YEAR, "2027").as_deref(),
            Some("Year cannot be later than 2026")
        );
        assert_eq!(error_for(FIELD_YEAR, "2020"), None);
        assert_eq!(error_for("unknown", "x"), None);
    }

    #[test]
    fn test_computer_error_messages() {
        let mut vm = computer_form();
        vm.update_field(FIELD_YEAR, "1969".to_string());
        assert_eq!(vm.field_error(FIELD_YEAR).as_deref(), Some("Year must be 1970 or later"));
        vm.update_field(FIELD_YEAR, "2030".to_string());
        assert_eq!(vm.field_error(FIELD_YEAR).as_deref(), Some("Year cannot exceed 2026"));
        vm.update_field(FIELD_PRICE, "1.5.0".to_string());
        assert_eq!(
            vm.field_error(FIELD_PRICE).as_deref(),
            Some("Price must be a valid number (e.g. 1849.99)")
        );
    }

    #[test]
    fn test_field_labels() {
        assert_eq!(field_label(FIELD_NAME), "Name");
        assert_eq!(field_label(FIELD_CPU_MODEL), "CPU Model");
        assert_eq!(field_label(FIELD_HARD_DISK_SIZE), "Hard Disk Size");
        assert_eq!(field_label("unknown"), "unknown");
        assert_eq!(field_label(""), "");
    }

    #[test]
    fn test_config_for_kind_uses_configured_min_year() {
        let config = DeviceFormConfig::for_kind(DeviceFormKind::Computer);
        assert_eq!(config.min_year, CONFIG.computer_min_year);
        assert_eq!(config.current_year, current_year());
        assert_eq!(DeviceFormKind::Object.title(), "Add Object");
    }
}
