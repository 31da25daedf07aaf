use async_trait::async_trait;

use crate::models::{CreatedObject, NewObjectRequest};
use super::ApiError;

/// Destino de la creación de objetos. ApiClient en el navegador, dobles en tests.
///
/// Cualquier 2xx es éxito; el objeto devuelto es solo informativo.
#[async_trait(?Send)]
pub trait ObjectsBackend {
    async fn create_object(
        &self,
        request: &NewObjectRequest,
    ) -> Result<Option<CreatedObject>, ApiError>;
}
