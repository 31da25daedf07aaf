use thiserror::Error;

/// Fallos de la llamada remota; nunca se reintentan
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },
}
