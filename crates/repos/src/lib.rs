pub mod credential;
pub mod error;

use sqlx::pool::PoolConnection;
use sqlx::{PgPool, Postgres};
use tracing::error;

use crate::error::RepoError;
pub use common::QueryParams;

#[derive(Debug, Clone)]
pub struct Repo {
    pub pool: PgPool,
}

impl Repo {
    pub fn new(pool: PgPool) -> Repo {
        Repo { pool }
    }

    pub async fn acquire(&self) -> Result<PoolConnection<Postgres>, RepoError> {
        self.pool.acquire().await.map_err(|err| {
            error!("Failed to acquire connection: {err}");
            RepoError::TransactionError()
        })
    }
}
