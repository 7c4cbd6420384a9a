/// Recording email sender for integration testing
use async_trait::async_trait;
use formrelay_core::models::{OutboundEmail, SentEmail};
use formrelay_core::services::{EmailSender, SendError};
use std::sync::{Arc, Mutex};

/// Outcome every call to the recording sender produces
#[derive(Clone, Debug)]
pub enum SendOutcome {
    Accept,
    Reject { name: String, message: String },
    Fail(String),
}

#[derive(Clone, Debug)]
pub struct RecordingSender {
    outcome: SendOutcome,
    pub calls: Arc<Mutex<Vec<(String, OutboundEmail)>>>,
}

impl RecordingSender {
    pub fn new(outcome: SendOutcome) -> Self {
        Self {
            outcome,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn accepting() -> Self {
        Self::new(SendOutcome::Accept)
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> Option<(String, OutboundEmail)> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl EmailSender for RecordingSender {
    async fn send(&self, api_key: &str, email: &OutboundEmail) -> Result<SentEmail, SendError> {
        let mut calls = self.calls.lock().unwrap();
        calls.push((api_key.to_string(), email.clone()));

        match &self.outcome {
            SendOutcome::Accept => Ok(SentEmail {
                id: format!("email-{}", calls.len()),
            }),
            SendOutcome::Reject { name, message } => Err(SendError::Provider {
                name: name.clone(),
                message: message.clone(),
                status: Some(422),
            }),
            SendOutcome::Fail(detail) => Err(SendError::Transport(detail.clone())),
        }
    }
}
