use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::credentials::CredentialsApi;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        // Credentials
        .route("/credentials", get(CredentialsApi::get_all))
        .route("/credentials", post(CredentialsApi::create))
        .route("/credentials/{id}", put(CredentialsApi::update))
        .route("/credentials/{id}", delete(CredentialsApi::remove))
        // Health
        .route("/live", get(super::health::live))
        .route("/ready", get(super::health::ready))
}
