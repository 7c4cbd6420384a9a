/// API Context - shared state for all API handlers
use formrelay_core::services::{
    ConfigProvider, EmailSender, EnvConfigProvider, ResendEmailSender,
};
use std::sync::Arc;

/// Route the relay is mounted on when `CONTACT_FORM_PATH` is unset
pub const DEFAULT_CONTACT_PATH: &str = "/api/send-email";

/// Environment variable overriding the relay route
pub const ENV_CONTACT_PATH: &str = "CONTACT_FORM_PATH";

/// API Context contains shared resources for API handlers
#[derive(Clone)]
pub struct ApiContext {
    /// Provider settings source, read per request
    pub config: Arc<dyn ConfigProvider>,

    /// Email provider client
    pub sender: Arc<dyn EmailSender>,

    /// Path the relay endpoint is mounted on
    pub contact_path: String,
}

impl ApiContext {
    pub fn new(config: Arc<dyn ConfigProvider>, sender: Arc<dyn EmailSender>) -> Self {
        Self {
            config,
            sender,
            contact_path: DEFAULT_CONTACT_PATH.to_string(),
        }
    }

    /// Create the production context: environment config and the Resend API
    pub fn from_env() -> Arc<Self> {
        let sender = ResendEmailSender::from_env(reqwest::Client::new());
        let ctx = Self::new(Arc::new(EnvConfigProvider), Arc::new(sender));

        let ctx = match std::env::var(ENV_CONTACT_PATH) {
            Ok(path) => ctx.with_contact_path(&path),
            Err(_) => ctx,
        };

        Arc::new(ctx)
    }

    /// Mount the relay on `path`; blank paths keep the default
    pub fn with_contact_path(mut self, path: &str) -> Self {
        let path = path.trim();
        if !path.is_empty() {
            self.contact_path = if path.starts_with('/') {
                path.to_string()
            } else {
                format!("/{}", path)
            };
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formrelay_core::services::StaticConfigProvider;

    fn ctx() -> ApiContext {
        let sender = ResendEmailSender::new(reqwest::Client::new(), "http://localhost");
        ApiContext::new(Arc::new(StaticConfigProvider::default()), Arc::new(sender))
    }

    #[test]
    fn test_default_contact_path() {
        assert_eq!(ctx().contact_path, "/api/send-email");
    }

    #[test]
    fn test_with_contact_path() {
        assert_eq!(ctx().with_contact_path("contact").contact_path, "/contact");
        assert_eq!(ctx().with_contact_path("/v1/contact").contact_path, "/v1/contact");
        assert_eq!(ctx().with_contact_path("  ").contact_path, "/api/send-email");
    }
}
