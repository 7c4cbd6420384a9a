/// Contact-form relay pipeline
///
/// Method check, field validation, configuration check, provider call and
/// outcome mapping, in that order. The first failing step ends the request;
/// nothing is retried and nothing is deduplicated.
use http::Method;
use tracing::{debug, error, info, warn};

use crate::email::compose;
use crate::error::RelayError;
use crate::models::{HandlerResult, SentEmail, SubmissionInput};
use crate::services::{ConfigProvider, EmailSender};
use crate::utils::logging::{redact_body, redact_email, redact_subject};

/// Transport-agnostic view of an inbound HTTP request
#[derive(Debug, Clone, Copy)]
pub struct RelayRequest<'a> {
    pub method: &'a Method,
    pub body: &'a [u8],
}

impl<'a> RelayRequest<'a> {
    pub fn new(method: &'a Method, body: &'a [u8]) -> Self {
        Self { method, body }
    }
}

/// Handles one contact-form request
///
/// Configuration is read through `config` at call time and the provider is
/// invoked at most once. Failure details go to the log only.
pub async fn handle(
    request: RelayRequest<'_>,
    config: &dyn ConfigProvider,
    sender: &dyn EmailSender,
) -> HandlerResult {
    if *request.method != Method::POST {
        warn!(method = %request.method, "Rejected contact form request: method not allowed");
        return HandlerResult::method_not_allowed(request.method.as_str());
    }

    match relay(request.body, config, sender).await {
        Ok(sent) => {
            info!(email_id = %sent.id, "Email sent successfully via Resend");
            HandlerResult::success()
        }
        Err(err) => {
            log_failure(&err);
            HandlerResult::from(err)
        }
    }
}

async fn relay(
    body: &[u8],
    config: &dyn ConfigProvider,
    sender: &dyn EmailSender,
) -> Result<SentEmail, RelayError> {
    let submission = SubmissionInput::from_body(body)?;
    let config = config.provider_settings().resolve()?;

    debug!(
        reply_to = %redact_email(&submission.reply_to_email),
        subject = %redact_subject(&submission.subject),
        message = %redact_body(&submission.message),
        "Relaying contact form submission"
    );

    let email = compose(&submission, &config);
    let sent = sender.send(&config.api_key, &email).await?;
    Ok(sent)
}

fn log_failure(err: &RelayError) {
    match err {
        RelayError::MissingFields => {
            info!("Rejected contact form submission: missing required fields");
        }
        RelayError::MissingConfig(missing) => {
            error!(
                missing = %missing.join(", "),
                "Server configuration error: missing environment variables: {}",
                missing.join(", ")
            );
        }
        RelayError::Provider { name, message } => {
            error!(provider_error = %name, "Resend API error: {}", message);
        }
        RelayError::Transport(detail) => {
            error!("Failed to send email: {}", detail);
        }
    }
}
