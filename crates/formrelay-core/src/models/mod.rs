/// Data models for the relay
pub mod config;
pub mod email;
pub mod response;
pub mod submission;

// Re-export commonly used types
pub use config::*;
pub use email::*;
pub use response::*;
pub use submission::*;
