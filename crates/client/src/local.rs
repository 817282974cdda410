use std::fs;
use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use crate::CredentialStore;
use crate::error::StoreError;
use data::{Credential, NewCredential};

/// Credential store backed by a single JSON document holding the whole
/// array. The document is read and rewritten wholesale on every operation.
#[derive(Debug, Clone)]
pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> Result<Vec<Credential>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let bytes = fs::read(&self.path)?;
        if bytes.is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn write_all(&self, credentials: &[Credential]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_vec_pretty(credentials)?)?;
        debug!("Wrote {} credentials to {}", credentials.len(), self.path.display());
        Ok(())
    }
}

#[async_trait]
impl CredentialStore for LocalStore {
    async fn list(&self) -> Result<Vec<Credential>, StoreError> {
        self.read_all()
    }

    async fn save(&self, credential: NewCredential) -> Result<(), StoreError> {
        credential.validate()?;

        let mut credentials = self.read_all()?;
        credentials.push(Credential {
            id: Uuid::new_v4(),
            url: credential.url,
            username: credential.username,
            password: credential.password,
            category: credential.category,
            created_at: chrono::Utc::now().naive_utc(),
        });
        self.write_all(&credentials)
    }

    async fn update(&self, id: Uuid, credential: NewCredential) -> Result<(), StoreError> {
        credential.validate()?;

        let mut credentials = self.read_all()?;
        let existing = credentials
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(StoreError::NotFound)?;

        existing.url = credential.url;
        existing.username = credential.username;
        existing.password = credential.password;
        existing.category = credential.category;

        self.write_all(&credentials)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut credentials = self.read_all()?;
        credentials.retain(|c| c.id != id);
        self.write_all(&credentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(dir: &tempfile::TempDir) -> LocalStore {
        LocalStore::new(dir.path().join("credentials.json"))
    }

    fn new_credential(url: &str, username: &str) -> NewCredential {
        NewCredential {
            url: url.to_string(),
            username: username.to_string(),
            password: "hunter2".to_string(),
            category: None,
        }
    }

    #[tokio::test]
    async fn test_empty_store_lists_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);

        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_and_list() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);

        store
            .save(new_credential("https://example.com", "alice"))
            .await
            .unwrap();

        let credentials = store.list().await.unwrap();
        assert_eq!(credentials.len(), 1);
        assert_eq!(credentials[0].url, "https://example.com");
        assert_eq!(credentials[0].username, "alice");
        assert_eq!(credentials[0].category, None);
    }

    #[tokio::test]
    async fn test_save_rejects_invalid_input() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);

        let result = store.save(new_credential("not a url", "alice")).await;
        assert!(matches!(result, Err(StoreError::Validation(_))));

        // Nothing was persisted.
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_replaces_fields_and_keeps_identity() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);

        store
            .save(new_credential("https://example.com", "alice"))
            .await
            .unwrap();
        let original = store.list().await.unwrap().remove(0);

        let replacement = NewCredential {
            category: Some("Work".to_string()),
            ..new_credential("https://example.org", "alice2")
        };
        store.update(original.id, replacement).await.unwrap();

        let updated = store.list().await.unwrap().remove(0);
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(updated.url, "https://example.org");
        assert_eq!(updated.username, "alice2");
        assert_eq!(updated.category.as_deref(), Some("Work"));
    }

    #[tokio::test]
    async fn test_update_missing_id_fails_without_mutating() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);

        store
            .save(new_credential("https://example.com", "alice"))
            .await
            .unwrap();

        let result = store
            .update(Uuid::new_v4(), new_credential("https://example.org", "bob"))
            .await;
        assert!(matches!(result, Err(StoreError::NotFound)));

        let credentials = store.list().await.unwrap();
        assert_eq!(credentials.len(), 1);
        assert_eq!(credentials[0].username, "alice");
    }

    #[tokio::test]
    async fn test_delete() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);

        store
            .save(new_credential("https://example.com", "alice"))
            .await
            .unwrap();
        store
            .save(new_credential("https://example.org", "bob"))
            .await
            .unwrap();

        let first = store.list().await.unwrap().remove(0);
        store.delete(first.id).await.unwrap();

        let credentials = store.list().await.unwrap();
        assert_eq!(credentials.len(), 1);
        assert_eq!(credentials[0].username, "bob");
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);

        store
            .save(new_credential("https://example.com", "alice"))
            .await
            .unwrap();

        store.delete(Uuid::new_v4()).await.unwrap();

        assert_eq!(store.list().await.unwrap().len(), 1);
    }
}
