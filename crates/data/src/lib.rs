pub mod credential;
pub mod validation;

pub use credential::{Credential, DEFAULT_CATEGORY, NewCredential};
pub use validation::{FieldError, ValidationErrors};
