use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use data::ValidationErrors;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid credential data")]
    Validation(#[from] ValidationErrors),

    #[error("credential {0} not found")]
    CredentialNotFound(uuid::Uuid),

    #[error("{0}")]
    StorageFailure(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                let body = Json(serde_json::json!({
                    "message": "Invalid credential data",
                    "errors": errors.errors,
                }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            ApiError::CredentialNotFound(_) => {
                let body = Json(serde_json::json!({
                    "message": "Credential not found",
                }));
                (StatusCode::NOT_FOUND, body).into_response()
            }
            ApiError::StorageFailure(message) => {
                let body = Json(serde_json::json!({
                    "message": message,
                }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_storage_failure_body_is_the_bare_message() {
        let response = ApiError::StorageFailure("Failed to save credential").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Failed to save credential");
    }

    #[tokio::test]
    async fn test_not_found_body() {
        let response = ApiError::CredentialNotFound(uuid::Uuid::new_v4()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Credential not found");
    }
}
