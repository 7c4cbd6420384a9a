/// Error types for the relay pipeline
use crate::constants::{
    MSG_CONFIG_ERROR, MSG_MISSING_FIELDS, MSG_PROVIDER_ERROR_PREFIX, MSG_UNEXPECTED_ERROR,
};
use crate::services::SendError;
use http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("Validation error: one or more required fields are missing")]
    MissingFields,

    #[error("Configuration error: missing environment variables: {}", .0.join(", "))]
    MissingConfig(Vec<&'static str>),

    #[error("Provider error ({name}): {message}")]
    Provider { name: String, message: String },

    #[error("Transport error: {0}")]
    Transport(String),
}

impl RelayError {
    /// HTTP status reported to the caller
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingFields => StatusCode::BAD_REQUEST,
            Self::MissingConfig(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Provider { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to return in the response body
    ///
    /// Only the provider's own message is surfaced; configuration and
    /// transport details stay in the server log.
    pub fn public_message(&self) -> String {
        match self {
            Self::MissingFields => MSG_MISSING_FIELDS.to_string(),
            Self::MissingConfig(_) => MSG_CONFIG_ERROR.to_string(),
            Self::Provider { message, .. } => format!("{}{}", MSG_PROVIDER_ERROR_PREFIX, message),
            Self::Transport(_) => MSG_UNEXPECTED_ERROR.to_string(),
        }
    }
}

impl From<SendError> for RelayError {
    fn from(err: SendError) -> Self {
        match err {
            SendError::Provider { name, message, .. } => Self::Provider { name, message },
            SendError::Transport(msg) => Self::Transport(msg),
        }
    }
}
