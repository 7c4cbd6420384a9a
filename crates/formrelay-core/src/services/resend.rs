/// Resend email sending service
use crate::constants::{DEFAULT_RESEND_API_URL, ENV_API_URL, RESEND_EMAILS_PATH};
use crate::models::{OutboundEmail, SentEmail};
use crate::services::sender::{EmailSender, SendError};
use async_trait::async_trait;
use serde::Deserialize;

/// Error body returned by the Resend API on non-2xx responses
#[derive(Debug, Deserialize)]
struct ResendErrorBody {
    #[serde(rename = "statusCode")]
    status_code: Option<u16>,
    #[serde(default)]
    name: Option<String>,
    message: String,
}

#[derive(Debug, Clone)]
pub struct ResendEmailSender {
    client: reqwest::Client,
    base_url: String,
}

impl ResendEmailSender {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Uses `RESEND_API_URL` when set, the public Resend API otherwise
    pub fn from_env(client: reqwest::Client) -> Self {
        let base_url = std::env::var(ENV_API_URL)
            .ok()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_RESEND_API_URL.to_string());
        Self::new(client, &base_url)
    }

    fn url(&self) -> String {
        format!("{}{}", self.base_url, RESEND_EMAILS_PATH)
    }
}

#[async_trait]
impl EmailSender for ResendEmailSender {
    async fn send(&self, api_key: &str, email: &OutboundEmail) -> Result<SentEmail, SendError> {
        let response = self
            .client
            .post(self.url())
            .bearer_auth(api_key)
            .json(email)
            .send()
            .await
            .map_err(|e| SendError::Transport(format!("Resend request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| SendError::Transport(format!("Failed to read Resend response: {}", e)))?;

        if !status.is_success() {
            let error: ResendErrorBody = serde_json::from_slice(&body).map_err(|e| {
                SendError::Transport(format!(
                    "Unexpected Resend error response (HTTP {}): {} (body: {})",
                    status.as_u16(),
                    e,
                    String::from_utf8_lossy(&body)
                ))
            })?;

            return Err(SendError::Provider {
                name: error.name.unwrap_or_else(|| "application_error".to_string()),
                message: error.message,
                status: error.status_code.or(Some(status.as_u16())),
            });
        }

        let sent: SentEmail = serde_json::from_slice(&body).map_err(|e| {
            SendError::Transport(format!("Failed to parse Resend response: {}", e))
        })?;

        tracing::debug!(email_id = %sent.id, "Resend accepted email");
        Ok(sent)
    }
}
