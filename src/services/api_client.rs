// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::Request;

use crate::config::CONFIG;
use crate::models::{CreatedObject, NewObjectRequest};
use super::{ApiError, ObjectsBackend};

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    objects_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            objects_url: CONFIG.objects_url(),
        }
    }

    pub fn with_objects_url(objects_url: impl Into<String>) -> Self {
        Self {
            objects_url: objects_url.into(),
        }
    }

    pub fn objects_url(&self) -> &str {
        &self.objects_url
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl ObjectsBackend for ApiClient {
    /// Crear objeto: un único POST, sin reintentos
    async fn create_object(
        &self,
        request: &NewObjectRequest,
    ) -> Result<Option<CreatedObject>, ApiError> {
        log::info!("📤 POST {} ({})", self.objects_url, request.name);

        let response = Request::post(&self.objects_url)
            .json(request)
            .map_err(|e| ApiError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::Http { status, body });
        }

        // El body de un 2xx no decide el resultado
        let body = response.text().await.unwrap_or_default();
        Ok(CreatedObject::from_body(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_client_targets_configured_objects_url() {
        let client = ApiClient::new();
        assert_eq!(client.objects_url(), CONFIG.objects_url());
        assert!(client.objects_url().ends_with("/objects"));
    }

    #[test]
    fn test_error_messages() {
        let err = ApiError::Http {
            status: 500,
            body: "Server error".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP error 500: Server error");
        assert_eq!(
            ApiError::Network("offline".to_string()).to_string(),
            "Network error: offline"
        );
    }
}
