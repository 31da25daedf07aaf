// Vistas: solo html!, la lógica vive en viewmodels/hooks

pub mod absence_summary;
pub mod app;
pub mod device_form;
pub mod shared;
pub mod shipping_information;

pub use absence_summary::AbsenceSummary;
pub use app::App;
pub use device_form::{AddComputer, AddObject};
pub use shipping_information::ShippingInformation;
