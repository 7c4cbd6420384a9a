/// Provider configuration models
use crate::constants::{ENV_API_KEY, ENV_FROM_EMAIL, ENV_TO_EMAIL};
use crate::error::RelayError;

/// Provider settings as found in the environment; any value may be absent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderSettings {
    pub api_key: Option<String>,
    pub to_address: Option<String>,
    pub from_address: Option<String>,
}

/// Complete provider configuration
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub api_key: String,
    pub to_address: String,
    pub from_address: String,
}

impl ProviderSettings {
    /// Names of the environment variables that are absent or empty
    pub fn missing(&self) -> Vec<&'static str> {
        [
            (ENV_API_KEY, &self.api_key),
            (ENV_TO_EMAIL, &self.to_address),
            (ENV_FROM_EMAIL, &self.from_address),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref().is_none_or(str::is_empty))
        .map(|(name, _)| name)
        .collect()
    }

    /// Resolves into a complete configuration or reports what is missing
    pub fn resolve(self) -> Result<ProviderConfig, RelayError> {
        let missing = self.missing();
        match (self.api_key, self.to_address, self.from_address) {
            (Some(api_key), Some(to_address), Some(from_address)) if missing.is_empty() => {
                Ok(ProviderConfig {
                    api_key,
                    to_address,
                    from_address,
                })
            }
            _ => Err(RelayError::MissingConfig(missing)),
        }
    }
}

// Keep the API key out of debug output and logs
impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &"***")
            .field("to_address", &self.to_address)
            .field("from_address", &self.from_address)
            .finish()
    }
}
