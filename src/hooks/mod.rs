pub mod use_absence_summary;
pub mod use_device_form;
pub mod use_shipping_form;
pub mod use_view_model;

pub use use_absence_summary::use_absence_summary;
pub use use_device_form::use_device_form;
pub use use_shipping_form::use_shipping_form;
pub use use_view_model::{use_view_model, UseViewModelHandle};
