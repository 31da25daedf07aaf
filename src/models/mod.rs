pub mod absence;
pub mod device;
pub mod product;

pub use absence::{AbsenceRequest, AbsenceSection, AbsenceStatus};
pub use device::{CreatedObject, NewObjectRequest, ObjectData};
pub use product::RelatedProduct;
