use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;
use data::{Credential, NewCredential};
use repos::QueryParams;
use repos::credential::CredentialRepo;

const RETRIEVE_FAILED: &str = "Failed to retrieve credentials";
const SAVE_FAILED: &str = "Failed to save credential";
const UPDATE_FAILED: &str = "Failed to update credential";
const DELETE_FAILED: &str = "Failed to delete credential";

pub struct CredentialsApi;

impl CredentialsApi {
    pub async fn get_all(
        State(state): State<AppState>,
        Query(params): Query<QueryParams>,
    ) -> Result<Json<Vec<Credential>>, ApiError> {
        let mut conn = state
            .repo
            .acquire()
            .await
            .map_err(|_| ApiError::StorageFailure(RETRIEVE_FAILED))?;
        let credentials = CredentialRepo::get_all(&mut *conn, params)
            .await
            .map_err(|_| ApiError::StorageFailure(RETRIEVE_FAILED))?;
        Ok(Json(credentials))
    }

    pub async fn create(
        State(state): State<AppState>,
        Json(payload): Json<NewCredential>,
    ) -> Result<impl IntoResponse, ApiError> {
        payload.validate()?;

        let mut conn = state
            .repo
            .acquire()
            .await
            .map_err(|_| ApiError::StorageFailure(SAVE_FAILED))?;
        CredentialRepo::create(&mut *conn, payload)
            .await
            .map_err(|_| ApiError::StorageFailure(SAVE_FAILED))?;

        let body = Json(serde_json::json!({
            "message": "Credential saved successfully",
        }));
        Ok((StatusCode::CREATED, body))
    }

    pub async fn update(
        Path(id): Path<Uuid>,
        State(state): State<AppState>,
        Json(payload): Json<NewCredential>,
    ) -> Result<impl IntoResponse, ApiError> {
        payload.validate()?;

        let mut conn = state
            .repo
            .acquire()
            .await
            .map_err(|_| ApiError::StorageFailure(UPDATE_FAILED))?;
        CredentialRepo::update(&mut *conn, id, payload)
            .await
            .map_err(|_| ApiError::StorageFailure(UPDATE_FAILED))?
            .ok_or(ApiError::CredentialNotFound(id))?;

        Ok(Json(serde_json::json!({
            "message": "Credential updated successfully",
        })))
    }

    pub async fn remove(
        Path(id): Path<Uuid>,
        State(state): State<AppState>,
    ) -> Result<impl IntoResponse, ApiError> {
        let mut conn = state
            .repo
            .acquire()
            .await
            .map_err(|_| ApiError::StorageFailure(DELETE_FAILED))?;
        CredentialRepo::remove(&mut *conn, id)
            .await
            .map_err(|_| ApiError::StorageFailure(DELETE_FAILED))?;

        Ok(Json(serde_json::json!({
            "message": "Credential deleted successfully",
        })))
    }
}
