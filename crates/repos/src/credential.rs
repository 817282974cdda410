use sqlx::{Postgres, QueryBuilder};
use tracing::error;
use uuid::Uuid;

use crate::QueryParams;
use crate::error::RepoError;
use data::{Credential, NewCredential};

const SELECT_COLUMNS: &str = "SELECT id, url, username, password, category, created_at FROM credentials";

/// Columns matched by the search filter.
const FILTER_COLUMNS: [&str; 2] = ["url", "username"];

pub struct CredentialRepo {}

impl CredentialRepo {
    pub async fn get_by_id(
        executor: impl sqlx::Executor<'_, Database = Postgres>,
        id: Uuid,
    ) -> Result<Option<Credential>, RepoError> {
        sqlx::query_as::<_, Credential>(&format!("{SELECT_COLUMNS} WHERE id = $1"))
            .bind(id)
            .fetch_optional(executor)
            .await
            .map_err(|err| {
                error!("Failed to retrieve credential {id}: {err}");
                RepoError::DatabaseError("Failed to retrieve credential".to_string())
            })
    }

    /// All credentials in creation order, optionally narrowed by the
    /// case-insensitive url/username filter.
    pub async fn get_all(
        executor: impl sqlx::Executor<'_, Database = Postgres>,
        params: QueryParams,
    ) -> Result<Vec<Credential>, RepoError> {
        let mut builder = QueryBuilder::new(SELECT_COLUMNS);

        if let Some(filter) = &params.filter {
            builder.push(" WHERE ");
            let mut separated = builder.separated(" OR ");
            for col in FILTER_COLUMNS {
                separated.push(col);
                separated.push_unseparated(" ILIKE ");
                separated.push_bind_unseparated(format!("%{filter}%"));
            }
        }

        builder.push(" ORDER BY created_at");

        let query = builder.build_query_as();

        query.fetch_all(executor).await.map_err(|err| {
            error!("Failed to retrieve all credentials: {err}");
            RepoError::DatabaseError("Failed to retrieve credentials".to_string())
        })
    }

    pub async fn create(
        executor: impl sqlx::Executor<'_, Database = Postgres>,
        credential: NewCredential,
    ) -> Result<Uuid, RepoError> {
        sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO credentials
              (
                id,
                url,
                username,
                password,
                category
              )
            VALUES ($1, $2, $3, $4, $5)
            RETURNING
              id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&credential.url)
        .bind(&credential.username)
        .bind(&credential.password)
        .bind(&credential.category)
        .fetch_one(executor)
        .await
        .map_err(|err| {
            error!("Failed to create credential: {err}");
            RepoError::DatabaseError("Failed to create credential".to_string())
        })
    }

    /// Full replace of the mutable fields. Returns `None` when the id does
    /// not exist; `created_at` is never touched.
    pub async fn update(
        executor: impl sqlx::Executor<'_, Database = Postgres>,
        id: Uuid,
        credential: NewCredential,
    ) -> Result<Option<Uuid>, RepoError> {
        sqlx::query_scalar::<_, Uuid>(
            r#"
            UPDATE credentials
            SET url = $1, username = $2, password = $3, category = $4
            WHERE id = $5
            RETURNING id
            "#,
        )
        .bind(&credential.url)
        .bind(&credential.username)
        .bind(&credential.password)
        .bind(&credential.category)
        .bind(id)
        .fetch_optional(executor)
        .await
        .map_err(|err| {
            error!("Failed to update credential {id}: {err}");
            RepoError::DatabaseError("Failed to update credential".to_string())
        })
    }

    /// No-op when the id does not exist.
    pub async fn remove(
        executor: impl sqlx::Executor<'_, Database = Postgres>,
        id: Uuid,
    ) -> Result<(), RepoError> {
        sqlx::query("DELETE FROM credentials WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await
            .map_err(|err| {
                error!("Failed to remove credential {id}: {err}");
                RepoError::DatabaseError("Failed to remove credential".to_string())
            })?;

        Ok(())
    }

    pub async fn count(
        executor: impl sqlx::Executor<'_, Database = Postgres>,
    ) -> Result<i64, RepoError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM credentials")
            .fetch_one(executor)
            .await
            .map_err(|err| {
                error!("Failed to count credentials: {err}");
                RepoError::DatabaseError("Failed to count credentials".to_string())
            })
    }
}
