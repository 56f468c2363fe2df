// src/application/ports/security.rs
use crate::application::{ApplicationResult, dto::auth::IssuedToken};
use crate::domain::errors::DomainError;
use crate::domain::user::{User, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
    /// Fails with `InvalidCredentials` on a mismatch.
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }
}

impl FromStr for TokenKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "access" => Ok(TokenKind::Access),
            "refresh" => Ok(TokenKind::Refresh),
            other => Err(DomainError::validation(
                "token_type",
                format!("unknown token type '{other}'"),
            )),
        }
    }
}

/// Role and permission flags carried inside token claims.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleClaims {
    pub is_admin: bool,
    pub is_editor: bool,
    pub is_moderator: bool,
    pub can_publish: bool,
}

impl From<&User> for RoleClaims {
    fn from(user: &User) -> Self {
        Self {
            is_admin: user.is_admin,
            is_editor: user.is_editor,
            is_moderator: user.is_moderator,
            can_publish: user.can_publish,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TokenSubject {
    pub user_id: UserId,
    pub roles: RoleClaims,
}

#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub user_id: UserId,
    pub kind: TokenKind,
    pub roles: RoleClaims,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[async_trait]
pub trait TokenManager: Send + Sync {
    async fn issue(&self, subject: TokenSubject, kind: TokenKind)
    -> ApplicationResult<IssuedToken>;
    /// Verifies signature and expiry. Expired tokens fail with
    /// `TokenExpired`, everything else malformed with `TokenInvalid`.
    async fn verify(&self, token: &str) -> ApplicationResult<TokenClaims>;
}
