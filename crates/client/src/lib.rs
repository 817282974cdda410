pub mod connect;
pub mod error;
pub mod local;
pub mod remote;
pub mod view;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StoreError;
use data::{Credential, NewCredential};

pub use local::LocalStore;
pub use remote::RemoteStore;

/// Uniform CRUD interface over the two credential backends: the local JSON
/// document and the REST API.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Credential>, StoreError>;

    async fn save(&self, credential: NewCredential) -> Result<(), StoreError>;

    /// Full replace of the mutable fields; fails when the id is absent.
    async fn update(&self, id: Uuid, credential: NewCredential) -> Result<(), StoreError>;

    /// No-op when the id is absent.
    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}
