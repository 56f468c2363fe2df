// src/application/commands/users/refresh.rs
use super::AuthCommandService;
use crate::application::{
    dto::AuthTokenDto,
    error::{ApplicationError, ApplicationResult},
    ports::security::{TokenKind, TokenSubject},
};

impl AuthCommandService {
    /// Exchange a refresh token for a new access token. The refresh token
    /// stays valid until its own expiry; there is no rotation.
    pub async fn refresh_token(&self, token: &str) -> ApplicationResult<AuthTokenDto> {
        let claims = self.token_manager.verify(token).await?;

        if claims.kind != TokenKind::Refresh {
            return Err(ApplicationError::TokenInvalid(
                "expected a refresh token".into(),
            ));
        }

        let subject = TokenSubject {
            user_id: claims.user_id,
            roles: claims.roles,
        };
        let access = self.token_manager.issue(subject, TokenKind::Access).await?;

        Ok(access.into())
    }
}
