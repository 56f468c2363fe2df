use crate::application::dto::users::UserDto;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A signed token as produced by the token manager.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedToken {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTokenDto {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub expires_in: i64,
}

impl From<IssuedToken> for AuthTokenDto {
    fn from(issued: IssuedToken) -> Self {
        let expires_in = (issued.expires_at - issued.issued_at).num_seconds();
        Self {
            token: issued.token,
            issued_at: issued.issued_at,
            expires_at: issued.expires_at,
            expires_in,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTokenPairDto {
    pub access: AuthTokenDto,
    pub refresh: AuthTokenDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResult {
    pub tokens: AuthTokenPairDto,
    pub user: UserDto,
}
