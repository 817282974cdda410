use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::validation::{FieldError, ValidationErrors};

/// Grouping label for credentials stored without a category.
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct Credential {
    pub id: uuid::Uuid,
    pub url: String,
    pub username: String,
    pub password: String,
    pub category: Option<String>,
    pub created_at: NaiveDateTime,
}

impl Credential {
    /// The category this credential is grouped under for display.
    pub fn category_label(&self) -> &str {
        self.category
            .as_deref()
            .filter(|category| !category.is_empty())
            .unwrap_or(DEFAULT_CATEGORY)
    }
}

/// The mutable fields of a credential. Used both for inserts and for full
/// replacement on update; `id` and `created_at` are never client-supplied.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct NewCredential {
    pub url: String,
    pub username: String,
    pub password: String,
    pub category: Option<String>,
}

impl NewCredential {
    /// Checks the schema rules and reports every failing field at once.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();

        if Url::parse(&self.url).is_err() {
            errors.push(FieldError::new("url", "Please enter a valid URL"));
        }
        if self.username.is_empty() {
            errors.push(FieldError::new("username", "Username is required"));
        }
        if self.password.is_empty() {
            errors.push(FieldError::new("password", "Password is required"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors { errors })
        }
    }
}

impl From<Credential> for NewCredential {
    fn from(credential: Credential) -> Self {
        Self {
            url: credential.url,
            username: credential.username,
            password: credential.password,
            category: credential.category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_credential() -> NewCredential {
        NewCredential {
            url: "https://example.com/login".to_string(),
            username: "alice".to_string(),
            password: "hunter2".to_string(),
            category: None,
        }
    }

    #[test]
    fn test_valid_credential_passes() {
        assert!(valid_credential().validate().is_ok());
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let credential = NewCredential {
            url: "not a url".to_string(),
            ..valid_credential()
        };

        let errors = credential.validate().unwrap_err();
        assert_eq!(errors.errors.len(), 1);
        assert_eq!(errors.errors[0].field, "url");
        assert_eq!(errors.errors[0].message, "Please enter a valid URL");
    }

    #[test]
    fn test_relative_url_is_rejected() {
        let credential = NewCredential {
            url: "example.com".to_string(),
            ..valid_credential()
        };

        assert!(credential.validate().is_err());
    }

    #[test]
    fn test_empty_username_and_password_are_rejected() {
        let credential = NewCredential {
            username: String::new(),
            password: String::new(),
            ..valid_credential()
        };

        let errors = credential.validate().unwrap_err();
        let fields: Vec<&str> = errors.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["username", "password"]);
    }

    #[test]
    fn test_category_is_free_text() {
        let credential = NewCredential {
            category: Some("Anything Goes / 123".to_string()),
            ..valid_credential()
        };

        assert!(credential.validate().is_ok());
    }

    #[test]
    fn test_category_label_defaults() {
        let credential = Credential {
            id: uuid::Uuid::new_v4(),
            url: "https://example.com".to_string(),
            username: "alice".to_string(),
            password: "hunter2".to_string(),
            category: None,
            created_at: chrono::Utc::now().naive_utc(),
        };
        assert_eq!(credential.category_label(), DEFAULT_CATEGORY);

        let credential = Credential {
            category: Some(String::new()),
            ..credential
        };
        assert_eq!(credential.category_label(), DEFAULT_CATEGORY);

        let credential = Credential {
            category: Some("Work".to_string()),
            ..credential
        };
        assert_eq!(credential.category_label(), "Work");
    }

    #[test]
    fn test_missing_fields_deserialize_empty() {
        let credential: NewCredential = serde_json::from_str("{}").unwrap();
        let errors = credential.validate().unwrap_err();
        assert_eq!(errors.errors.len(), 3);
    }
}
