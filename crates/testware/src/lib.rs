pub mod setup;

use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;

use common::settings::Settings;
use data::{Credential, NewCredential};
use repos::credential::CredentialRepo;

/// Settings suitable for tests; nothing is read from disk.
pub fn create_settings() -> Arc<Settings> {
    Arc::new(Settings::default())
}

/// Create a test credential and return the stored record.
pub async fn create_test_credential(
    pool: &PgPool,
    url: &str,
    username: &str,
    password: &str,
    category: Option<&str>,
) -> Credential {
    let new_credential = NewCredential {
        url: url.to_string(),
        username: username.to_string(),
        password: password.to_string(),
        category: category.map(str::to_string),
    };

    let id = CredentialRepo::create(pool, new_credential)
        .await
        .expect("Failed to insert test credential");

    CredentialRepo::get_by_id(pool, id)
        .await
        .expect("Failed to retrieve created credential")
        .expect("Created credential not found")
}

/// Create a test credential with a unique url and username.
pub async fn create_random_credential(pool: &PgPool) -> Credential {
    let tag = Uuid::new_v4();
    create_test_credential(
        pool,
        &format!("https://{tag}.example.com"),
        &format!("user_{tag}"),
        "secret",
        None,
    )
    .await
}
