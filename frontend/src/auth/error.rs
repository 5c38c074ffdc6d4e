use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AuthError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response status {0}")]
    Status(u16),
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("browser storage error: {0}")]
    Storage(String),
}

impl From<gloo_net::Error> for AuthError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => AuthError::Decode(e.to_string()),
            other => AuthError::Network(other.to_string()),
        }
    }
}

impl From<gloo_storage::errors::StorageError> for AuthError {
    fn from(err: gloo_storage::errors::StorageError) -> Self {
        AuthError::Storage(err.to_string())
    }
}
