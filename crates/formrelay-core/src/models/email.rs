/// Outbound email models
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Email handed to the provider; serializes to the Resend send payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TypedBuilder)]
pub struct OutboundEmail {
    #[builder(setter(into))]
    pub from: String,
    pub to: Vec<String>,
    #[builder(setter(into))]
    pub subject: String,
    #[builder(setter(into))]
    pub reply_to: String,
    #[builder(setter(into))]
    pub html: String,
}

/// Provider acknowledgement of an accepted email
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SentEmail {
    pub id: String,
}
