use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::Deserialize;
use uuid::Uuid;

use crate::CredentialStore;
use crate::error::StoreError;
use data::{Credential, FieldError, NewCredential, ValidationErrors};

/// Credential store talking to the REST API.
#[derive(Debug, Clone)]
pub struct RemoteStore {
    base_url: String,
    http: reqwest::Client,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    errors: Vec<FieldError>,
}

impl RemoteStore {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/api/credentials", self.base_url)
    }

    fn item_url(&self, id: Uuid) -> String {
        format!("{}/api/credentials/{id}", self.base_url)
    }

    /// Translates error responses into typed store errors, decoding the
    /// field-level messages a 400 carries.
    async fn check(response: Response) -> Result<Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body: ErrorBody = response.json().await.unwrap_or_default();

        if status == StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound);
        }
        if status == StatusCode::BAD_REQUEST && !body.errors.is_empty() {
            return Err(StoreError::Validation(ValidationErrors {
                errors: body.errors,
            }));
        }

        Err(StoreError::Api {
            status: status.as_u16(),
            message: body.message,
        })
    }
}

#[async_trait]
impl CredentialStore for RemoteStore {
    async fn list(&self) -> Result<Vec<Credential>, StoreError> {
        let response = self.http.get(self.collection_url()).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn save(&self, credential: NewCredential) -> Result<(), StoreError> {
        credential.validate()?;

        let response = self
            .http
            .post(self.collection_url())
            .json(&credential)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn update(&self, id: Uuid, credential: NewCredential) -> Result<(), StoreError> {
        credential.validate()?;

        let response = self
            .http
            .put(self.item_url(id))
            .json(&credential)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let response = self.http.delete(self.item_url(id)).send().await?;
        Self::check(response).await?;
        Ok(())
    }
}
