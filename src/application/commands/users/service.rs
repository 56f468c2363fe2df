// src/application/commands/users/service.rs
use std::sync::Arc;

use crate::application::{
    dto::{AuthTokenPairDto, IssuedToken},
    error::ApplicationResult,
    ports::{
        otp::OtpStore,
        security::{PasswordHasher, TokenKind, TokenManager, TokenSubject},
        time::Clock,
    },
};
use crate::config::AuthLimits;
use crate::domain::user::{User, UserRepository};

pub struct AuthCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    pub(super) otp_store: Arc<dyn OtpStore>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) limits: AuthLimits,
}

impl AuthCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        otp_store: Arc<dyn OtpStore>,
        clock: Arc<dyn Clock>,
        limits: AuthLimits,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            token_manager,
            otp_store,
            clock,
            limits,
        }
    }

    pub(super) async fn issue_token_pair(&self, user: &User) -> ApplicationResult<AuthTokenPairDto> {
        let subject = TokenSubject {
            user_id: user.id,
            roles: user.into(),
        };
        let access: IssuedToken = self
            .token_manager
            .issue(subject.clone(), TokenKind::Access)
            .await?;
        let refresh = self.token_manager.issue(subject, TokenKind::Refresh).await?;

        Ok(AuthTokenPairDto {
            access: access.into(),
            refresh: refresh.into(),
        })
    }
}
