//! `/auth` routes.

use crate::gateway::{ApiClient, ApiResult};
use crate::models::auth::{AuthResponse, LoginRequest, RegisterRequest};
use crate::models::envelope::Payload;

pub const AUTH_PATH: &str = "/auth";

#[derive(Debug, Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// POST /auth/login
    ///
    /// Returns the backend's answer as-is; storing the token in the
    /// [`Session`](crate::session::Session) is the caller's decision.
    pub async fn login(&self, request: &LoginRequest) -> ApiResult<AuthResponse> {
        let payload: Payload<AuthResponse> = self
            .client
            .post(&format!("{AUTH_PATH}/login"), request)
            .await?;
        Ok(payload.into_inner())
    }

    /// POST /auth/register
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<AuthResponse> {
        let payload: Payload<AuthResponse> = self
            .client
            .post(&format!("{AUTH_PATH}/register"), request)
            .await?;
        Ok(payload.into_inner())
    }
}
