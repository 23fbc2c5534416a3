//! Login and registration payloads (`/auth/*`).

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::user::{User, UserRole};

#[derive(Debug, Clone, Serialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, code = "required"))]
    pub email: String,
    #[validate(length(min = 1, code = "required"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 1, code = "required"))]
    pub first_name: String,
    #[validate(length(min = 1, code = "required"))]
    pub last_name: String,
    #[validate(length(min = 1, code = "required"))]
    pub email: String,
    #[validate(length(min = 1, code = "required"))]
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
}

/// Answer to login/register. Either part may be absent depending on the
/// backend's flow (e.g. registration pending approval).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthResponse {
    pub token: Option<String>,
    pub user: Option<User>,
}
