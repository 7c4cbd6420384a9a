//! Common test utilities and helpers for integration tests
#![allow(dead_code)]

pub mod mock_sender;

use axum::Router;
use formrelay_api::ApiContext;
use formrelay_core::models::ProviderSettings;
use formrelay_core::services::StaticConfigProvider;
use mock_sender::RecordingSender;
use std::sync::Arc;

pub const CONTACT_PATH: &str = "/api/send-email";

/// Provider settings with every value present
pub fn complete_settings() -> ProviderSettings {
    ProviderSettings {
        api_key: Some("re_test_key".to_string()),
        to_address: Some("inbox@crystron.example".to_string()),
        from_address: Some("Crystron Website <contact@crystron.example>".to_string()),
    }
}

/// Router wired to static settings and a recording sender
pub fn test_app(settings: ProviderSettings, sender: RecordingSender) -> Router {
    let ctx = ApiContext::new(
        Arc::new(StaticConfigProvider::new(settings)),
        Arc::new(sender),
    );
    formrelay_api::router(Arc::new(ctx))
}

/// A valid contact-form JSON body
pub fn valid_submission() -> serde_json::Value {
    serde_json::json!({
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "subject": "Analytical Engine",
        "message": "First line\nSecond line"
    })
}
