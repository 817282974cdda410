use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepoError {
    #[error("database failure: {0}")]
    DatabaseError(String),

    #[error("database transaction error")]
    TransactionError(),
}
