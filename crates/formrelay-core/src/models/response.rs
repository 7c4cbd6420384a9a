/// Handler result returned for every request
use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::constants::{ALLOWED_METHOD, MSG_SUCCESS};
use crate::error::RelayError;

/// JSON body of every relay response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseBody {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerResult {
    pub status: StatusCode,
    /// Value of the `Allow` header; only set for 405 responses
    pub allow: Option<&'static str>,
    pub body: ResponseBody,
}

impl HandlerResult {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            allow: None,
            body: ResponseBody {
                message: message.into(),
            },
        }
    }

    pub fn success() -> Self {
        Self::new(StatusCode::OK, MSG_SUCCESS)
    }

    pub fn method_not_allowed(method: &str) -> Self {
        Self {
            allow: Some(ALLOWED_METHOD),
            ..Self::new(
                StatusCode::METHOD_NOT_ALLOWED,
                format!("Method {} Not Allowed. Please use POST.", method),
            )
        }
    }
}

impl From<RelayError> for HandlerResult {
    fn from(err: RelayError) -> Self {
        Self::new(err.status(), err.public_message())
    }
}
