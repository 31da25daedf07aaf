// ============================================================================
// SHIPPING VIEWMODEL - Datos de envío + productos relacionados
// ============================================================================

use serde::Serialize;

use crate::forms::{FieldFailure, FormControl, FormGroup, Validator};
use crate::models::RelatedProduct;

pub const FIELD_AGE_VERIFICATION: &str = "ageVerification";
pub const FIELD_FULL_NAME: &str = "fullName";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PHONE: &str = "phone";
pub const FIELD_ADDRESS: &str = "address";
pub const FIELD_CITY: &str = "city";
pub const FIELD_POSTAL_CODE: &str = "postalCode";
pub const FIELD_LOCATION: &str = "location";
pub const FIELD_DELIVERY_NOTE: &str = "deliveryNote";
pub const FIELD_ACCEPT_TERMS: &str = "acceptTerms";

/// Opciones del select de ubicación
pub const LOCATIONS: [&str; 4] = ["USA", "Canada", "UK", "Other"];

pub const ORDER_COMPLETED_MESSAGE: &str =
    "Order completed successfully! You will receive a confirmation email shortly.";
pub const INVALID_FORM_MESSAGE: &str = "Please fill in all required fields to complete your order.";

/// Datos validados listos para enviar
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShippingInformation {
    pub age_verification: bool,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub location: String,
    pub delivery_note: Option<String>,
    pub accept_terms: bool,
}

pub struct ShippingViewModel {
    form: FormGroup,
    related_products: Vec<RelatedProduct>,
}

impl ShippingViewModel {
    pub fn new() -> Self {
        Self {
            form: Self::build_form(),
            related_products: default_related_products(),
        }
    }

    fn build_form() -> FormGroup {
        let required = || FormControl::new("", vec![Validator::Required]);
        FormGroup::new()
            .with_control(
                FIELD_AGE_VERIFICATION,
                FormControl::new(false, vec![Validator::RequiredTrue]),
            )
            .with_control(FIELD_FULL_NAME, required())
            .with_control(
                FIELD_EMAIL,
                FormControl::new("", vec![Validator::Required, Validator::Email]),
            )
            .with_control(FIELD_PHONE, required())
            .with_control(FIELD_ADDRESS, required())
            .with_control(FIELD_CITY, required())
            .with_control(FIELD_POSTAL_CODE, required())
            .with_control(FIELD_LOCATION, required())
            .with_control(FIELD_DELIVERY_NOTE, FormControl::new("", vec![]))
            .with_control(
                FIELD_ACCEPT_TERMS,
                FormControl::new(false, vec![Validator::RequiredTrue]),
            )
    }

    pub fn form(&self) -> &FormGroup {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormGroup {
        &mut self.form
    }

    pub fn related_products(&self) -> &[RelatedProduct] {
        &self.related_products
    }

    pub fn update_text(&mut self, field: &str, value: String) {
        self.form.set_value(field, value);
    }

    pub fn update_checkbox(&mut self, field: &str, checked: bool) {
        self.form.set_value(field, checked);
    }

    pub fn touch(&mut self, field: &str) {
        if let Some(control) = self.form.get_mut(field) {
            control.mark_as_touched();
        }
    }

    pub fn can_submit(&self) -> bool {
        self.form.is_valid()
    }

    pub fn submit(&mut self) -> Result<ShippingInformation, Vec<FieldFailure>> {
        if !self.form.is_valid() {
            self.form.mark_all_as_touched();
            let failures = self.form.failures();
            log::warn!("⚠️ Form is invalid: {} campo(s)", failures.len());
            for failure in &failures {
                log::warn!("   - {}", failure);
            }
            return Err(failures);
        }

        let note = self.form.text(FIELD_DELIVERY_NOTE).trim().to_string();
        let info = ShippingInformation {
            age_verification: self.form.checked(FIELD_AGE_VERIFICATION),
            full_name: self.form.text(FIELD_FULL_NAME).to_string(),
            email: self.form.text(FIELD_EMAIL).to_string(),
            phone: self.form.text(FIELD_PHONE).to_string(),
            address: self.form.text(FIELD_ADDRESS).to_string(),
            city: self.form.text(FIELD_CITY).to_string(),
            postal_code: self.form.text(FIELD_POSTAL_CODE).to_string(),
            location: self.form.text(FIELD_LOCATION).to_string(),
            delivery_note: (!note.is_empty()).then_some(note),
            accept_terms: self.form.checked(FIELD_ACCEPT_TERMS),
        };
        log::info!("✅ Order completed: {:?}", info);
        Ok(info)
    }

    /// Envía y devuelve el texto a mostrar al usuario en ambos casos
    pub fn submit_feedback(&mut self) -> &'static str {
        match self.submit() {
            Ok(_) => ORDER_COMPLETED_MESSAGE,
            Err(_) => INVALID_FORM_MESSAGE,
        }
    }

    /// Solo informa, no modifica ningún estado
    pub fn add_product(&self, product: &RelatedProduct) -> String {
        log::info!("🛒 Adding product to order: {:?}", product);
        format!("{} added to your order for ${}", product.name, product.price)
    }

    /// Mensaje del primer error, visible solo tras tocar el campo
    pub fn field_error(&self, field: &str) -> Option<String> {
        let control = self.form.get(field)?;
        if !control.is_touched() {
            return None;
        }
        let error = control.errors().into_iter().next()?;
        let message = match (field, error.key()) {
            (FIELD_AGE_VERIFICATION, _) => "You must confirm your age".to_string(),
            (FIELD_ACCEPT_TERMS, _) => "You must accept the terms".to_string(),
            (_, "email") => "Enter a valid email address".to_string(),
            _ => format!("{} is required", field_label(field)),
        };
        Some(message)
    }
}

impl Default for ShippingViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn field_label(field: &str) -> &str {
    match field {
        FIELD_AGE_VERIFICATION => "Age verification",
        FIELD_FULL_NAME => "Full Name",
        FIELD_EMAIL => "Email",
        FIELD_PHONE => "Phone",
        FIELD_ADDRESS => "Address",
        FIELD_CITY => "City",
        FIELD_POSTAL_CODE => "Postal code",
        FIELD_LOCATION => "Location",
        FIELD_DELIVERY_NOTE => "Delivery note",
        FIELD_ACCEPT_TERMS => "Terms",
        other => other,
    }
}

pub fn default_related_products() -> Vec<RelatedProduct> {
    vec![
        RelatedProduct {
            id: 1,
            name: "Express Shipping".to_string(),
            price: 15.99,
            image: "https://images.unsplash.com/photo-1566576912321-d58ddd7a6088?w=100&h=100&fit=crop"
                .to_string(),
        },
        RelatedProduct {
            id: 2,
            name: "Gift Wrapping".to_string(),
            price: 8.99,
            image: "https://images.unsplash.com/photo-1549465220-1a8b9238cd48?w=100&h=100&fit=crop"
                .to_string(),
        },
        RelatedProduct {
            id: 3,
            name: "Insurance Coverage".to_string(),
            price: 12.50,
            image: "https://images.unsplash.com/photo-1450101499163-c8848c66ca85?w=100&h=100&fit=crop"
                .to_string(),
        },
    ]
}
