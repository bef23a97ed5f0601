//! Login, refresh and logout payloads exchanged with the backend.

use chrono::{DateTime, Utc};
use prism_auth::TokenClaims;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::ids::{ProfessorId, UserId};

/// Body of `POST /login` and of the backend's Google verify call.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct GoogleVerifyRequest {
    /// ID token issued by Google Sign-In
    #[validate(length(min = 1, message = "id_token must not be empty"))]
    pub id_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LoginUser {
    pub pk: UserId,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub professor_id: Option<ProfessorId>,
}

/// Token pair issued by the backend after a successful Google verify.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
    pub user: LoginUser,
    #[serde(default)]
    pub access_expiration: Option<DateTime<Utc>>,
    #[serde(default)]
    pub refresh_expiration: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenRefreshRequest {
    pub refresh: String,
}

/// The backend may rotate the refresh token; `refresh` is set when it does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TokenRefreshResponse {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
    #[serde(default)]
    pub access_expiration: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LogoutRequest {
    pub refresh: String,
}

/// The signed-in instructor, read from access token claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CurrentUser {
    pub user_id: UserId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub professor_id: Option<ProfessorId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Access token expiry (Unix seconds)
    pub expires_at: i64,
}

impl CurrentUser {
    /// `None` when the token carries no `user_id`.
    pub fn from_claims(claims: &TokenClaims) -> Option<Self> {
        Some(Self {
            user_id: UserId(claims.user_id?),
            professor_id: claims.professor_id.map(ProfessorId),
            email: claims.email.clone(),
            expires_at: claims.exp,
        })
    }
}
