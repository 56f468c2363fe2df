// src/application/commands/users/login.rs
use super::AuthCommandService;
use crate::{
    application::{
        dto::LoginResult,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{AuthEvent, Email},
};

pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

impl AuthCommandService {
    /// Credential check with attempt-limiting. A locked account is rejected
    /// before any password verification; a user with two-factor enabled gets
    /// `TwoFactorRequired` instead of tokens and must complete the OTP flow.
    pub async fn login(&self, command: LoginCommand) -> ApplicationResult<LoginResult> {
        let email = Email::new(command.email)?;
        let mut user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("user {email}")))?;

        if user.is_locked(self.limits.max_login_attempts) {
            return Err(ApplicationError::AccountLocked);
        }

        // Only a genuine mismatch counts against the lockout budget; hasher
        // infrastructure failures propagate without touching the counter.
        if let Err(err) = self
            .password_hasher
            .verify(&command.password, user.password_hash.as_str())
            .await
        {
            if matches!(err, ApplicationError::InvalidCredentials) {
                user.record_failed_login();
                self.user_repo.save(user).await?;
            }
            return Err(err);
        }

        let now = self.clock.now();
        user.record_successful_login(now);
        let user = self.user_repo.save(user).await?;

        tracing::info!(
            event = ?AuthEvent::LoggedIn { user_id: user.id, at: now },
            "user logged in"
        );

        if user.two_factor_enabled {
            return Err(ApplicationError::TwoFactorRequired {
                user_id: user.id.to_string(),
            });
        }

        let tokens = self.issue_token_pair(&user).await?;
        Ok(LoginResult {
            tokens,
            user: user.into(),
        })
    }
}
