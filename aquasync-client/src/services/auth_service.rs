use aquasync_api::restful::{LoginRequest, UserResponse};
use reqwest::header::AUTHORIZATION;

use crate::errors::{ApiError, Result};
use crate::services::ensure_success;
use crate::services::session::Session;

/// Client for the remote authentication service. Login and authorization
/// both live on the same endpoint behind `?action=auth`: POST authenticates
/// credentials, GET checks a previously issued token.
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
}

impl AuthClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Authenticates the credentials and returns the established session.
    /// Implausible credentials are refused locally, nothing is sent.
    pub async fn login(&self, request: &LoginRequest) -> Result<Session> {
        if !request.is_valid() {
            tracing::debug!("login refused before dispatch, credentials implausible");
            return Err(ApiError::Validation);
        }

        let response = self
            .http
            .post(&self.base_url)
            .query(&[("action", "auth")])
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let response = ensure_success(response).inspect_err(|err| {
            tracing::error!(%status, email = %request.email, %err, "login rejected");
        })?;

        let user: UserResponse = response.json().await?;
        tracing::info!(email = %user.email, role = %user.role, "signed in");

        Ok(Session::from(user))
    }

    /// Checks a token with the service, `Ok` means still authorized. An
    /// empty token is refused without a round trip.
    pub async fn authorize(&self, token: &str) -> Result<()> {
        if token.is_empty() {
            return Err(ApiError::Unauthorized);
        }

        let response = self
            .http
            .get(&self.base_url)
            .query(&[("action", "auth")])
            .header(AUTHORIZATION, token)
            .send()
            .await?;

        let status = response.status();
        ensure_success(response)
            .map(|_| ())
            .inspect_err(|err| tracing::error!(%status, %err, "authorization failed"))
    }
}
