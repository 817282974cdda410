use reqwest::StatusCode;
use tracing::debug;

use crate::error::StoreError;
use data::Credential;

/// Best-effort login: POSTs the stored username/password form-encoded to
/// the stored URL, the way a login form submission would. Most sites will
/// not accept this exact shape; the caller only reports the status.
pub async fn auto_connect(
    http: &reqwest::Client,
    credential: &Credential,
) -> Result<StatusCode, StoreError> {
    debug!("Auto-connecting to {}", credential.url);

    let form = [
        ("username", credential.username.as_str()),
        ("password", credential.password.as_str()),
    ];

    let response = http.post(&credential.url).form(&form).send().await?;
    Ok(response.status())
}
