use thiserror::Error;

use data::ValidationErrors;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    #[error("Credential not found")]
    NotFound,

    #[error("server error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("storage failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt credential store: {0}")]
    Serde(#[from] serde_json::Error),
}
