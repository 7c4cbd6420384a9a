/// Email provider capability
use crate::models::{OutboundEmail, SentEmail};
use async_trait::async_trait;
use thiserror::Error;

/// Failure of a provider call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SendError {
    /// The provider answered and rejected the email
    #[error("{name}: {message}")]
    Provider {
        name: String,
        message: String,
        status: Option<u16>,
    },

    /// The call itself failed (network, malformed response)
    #[error("{0}")]
    Transport(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Sends one email, authenticating with `api_key`
    async fn send(&self, api_key: &str, email: &OutboundEmail) -> Result<SentEmail, SendError>;
}
