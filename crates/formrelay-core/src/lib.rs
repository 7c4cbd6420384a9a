/// formrelay Core - contact-form relay library
///
/// This crate contains the request pipeline, configuration, provider
/// capability and HTML composition used by the formrelay Lambda function.
pub mod constants;
pub mod email;
pub mod error;
pub mod models;
pub mod relay;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use error::RelayError;
pub use models::{HandlerResult, OutboundEmail, ProviderConfig, SentEmail, SubmissionInput};
pub use relay::{RelayRequest, handle};
pub use services::{ConfigProvider, EmailSender, SendError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
