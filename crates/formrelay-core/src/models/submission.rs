/// Contact-form submission models
use serde_json::{Map, Value};

use crate::error::RelayError;

/// Raw form payload as posted by the website
///
/// Fields are kept as untyped JSON so that a missing field, an empty string
/// and a non-string value are all reported the same way.
#[derive(Debug, Default)]
pub struct ContactFormRequest {
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub subject: Option<Value>,
    pub message: Option<Value>,
}

impl From<Map<String, Value>> for ContactFormRequest {
    fn from(mut fields: Map<String, Value>) -> Self {
        Self {
            name: fields.remove("name"),
            email: fields.remove("email"),
            subject: fields.remove("subject"),
            message: fields.remove("message"),
        }
    }
}

/// A validated submission; every field is present and non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionInput {
    pub name: String,
    pub reply_to_email: String,
    pub subject: String,
    pub message: String,
}

impl SubmissionInput {
    /// Parses and validates a raw request body
    ///
    /// Bodies that are not a JSON object are treated as having no fields.
    /// Duplicate keys resolve to the last occurrence.
    pub fn from_body(body: &[u8]) -> Result<Self, RelayError> {
        let request = match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(fields)) => ContactFormRequest::from(fields),
            _ => ContactFormRequest::default(),
        };
        Self::try_from(request)
    }
}

impl TryFrom<ContactFormRequest> for SubmissionInput {
    type Error = RelayError;

    fn try_from(request: ContactFormRequest) -> Result<Self, Self::Error> {
        match (
            required(request.name),
            required(request.email),
            required(request.subject),
            required(request.message),
        ) {
            (Some(name), Some(reply_to_email), Some(subject), Some(message)) => Ok(Self {
                name,
                reply_to_email,
                subject,
                message,
            }),
            _ => Err(RelayError::MissingFields),
        }
    }
}

fn required(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_submission() {
        let body = br#"{"name":"Ada","email":"ada@example.com","subject":"Hi","message":"Hello"}"#;
        let input = SubmissionInput::from_body(body).unwrap();

        assert_eq!(input.name, "Ada");
        assert_eq!(input.reply_to_email, "ada@example.com");
        assert_eq!(input.subject, "Hi");
        assert_eq!(input.message, "Hello");
    }

    #[test]
    fn test_missing_or_empty_fields() {
        let bodies: [&[u8]; 4] = [
            br#"{"email":"ada@example.com","subject":"Hi","message":"Hello"}"#,
            br#"{"name":"Ada","email":"","subject":"Hi","message":"Hello"}"#,
            br#"{"name":"Ada","email":"ada@example.com","subject":null,"message":"Hello"}"#,
            br#"{"name":"Ada","email":"ada@example.com","subject":"Hi","message":42}"#,
        ];

        for body in bodies {
            assert_eq!(
                SubmissionInput::from_body(body),
                Err(RelayError::MissingFields)
            );
        }
    }

    #[test]
    fn test_non_object_body() {
        assert_eq!(SubmissionInput::from_body(b""), Err(RelayError::MissingFields));
        assert_eq!(
            SubmissionInput::from_body(b"name=Ada&email=a"),
            Err(RelayError::MissingFields)
        );
        assert_eq!(SubmissionInput::from_body(b"[]"), Err(RelayError::MissingFields));
        assert_eq!(SubmissionInput::from_body(b"\"Ada\""), Err(RelayError::MissingFields));
    }

    #[test]
    fn test_array_in_field_order_is_rejected() {
        let body = br#"["Ada","ada@example.com","Hi","Hello"]"#;
        assert_eq!(SubmissionInput::from_body(body), Err(RelayError::MissingFields));
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let body = br#"{"name":"","name":"Ada","email":"ada@example.com","subject":"Hi","message":"Hello"}"#;
        assert_eq!(SubmissionInput::from_body(body).unwrap().name, "Ada");

        let body = br#"{"name":"Ada","name":"","email":"ada@example.com","subject":"Hi","message":"Hello"}"#;
        assert_eq!(SubmissionInput::from_body(body), Err(RelayError::MissingFields));
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        let body = br#"{"name":" ","email":"ada@example.com","subject":"Hi","message":"Hello"}"#;
        assert_eq!(SubmissionInput::from_body(body).unwrap().name, " ");
    }
}
