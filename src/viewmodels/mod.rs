// ViewModels: estado + lógica UI, sin DOM

pub mod absence_viewmodel;
pub mod device_form_viewmodel;
pub mod shipping_viewmodel;

pub use absence_viewmodel::{AbsenceAction, AbsenceSummaryViewModel, ActionRecord};
pub use device_form_viewmodel::{DeviceFormConfig, DeviceFormKind, DeviceFormViewModel, SubmitOutcome};
pub use shipping_viewmodel::{ShippingInformation, ShippingViewModel};
