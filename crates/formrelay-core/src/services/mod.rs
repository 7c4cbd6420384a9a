/// Provider and configuration services
pub mod config;
pub mod resend;
pub mod sender;

// Re-export service traits
pub use config::{ConfigProvider, EnvConfigProvider, StaticConfigProvider};
pub use resend::ResendEmailSender;
pub use sender::{EmailSender, SendError};
