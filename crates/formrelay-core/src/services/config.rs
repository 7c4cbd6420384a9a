/// Configuration service - reads provider settings from the environment
use crate::constants::{ENV_API_KEY, ENV_FROM_EMAIL, ENV_TO_EMAIL};
use crate::models::ProviderSettings;

/// Source of provider settings, consulted once per request
pub trait ConfigProvider: Send + Sync {
    fn provider_settings(&self) -> ProviderSettings;
}

/// Environment variable-based configuration provider
///
/// Reads on every call so that a missing variable is reported per request
/// rather than failing cold start.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvConfigProvider;

impl ConfigProvider for EnvConfigProvider {
    fn provider_settings(&self) -> ProviderSettings {
        ProviderSettings {
            api_key: std::env::var(ENV_API_KEY).ok(),
            to_address: std::env::var(ENV_TO_EMAIL).ok(),
            from_address: std::env::var(ENV_FROM_EMAIL).ok(),
        }
    }
}

/// Fixed settings, for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct StaticConfigProvider {
    settings: ProviderSettings,
}

impl StaticConfigProvider {
    pub fn new(settings: ProviderSettings) -> Self {
        Self { settings }
    }
}

impl ConfigProvider for StaticConfigProvider {
    fn provider_settings(&self) -> ProviderSettings {
        self.settings.clone()
    }
}
