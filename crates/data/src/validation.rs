use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single failed schema rule, addressed to the form field it belongs to.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Error)]
#[error("invalid credential data")]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}
