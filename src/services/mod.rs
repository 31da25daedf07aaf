pub mod api_client;
pub mod error;
pub mod objects_backend;

pub use api_client::ApiClient;
pub use error::ApiError;
pub use objects_backend::ObjectsBackend;
