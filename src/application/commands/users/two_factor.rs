// src/application/commands/users/two_factor.rs
use super::AuthCommandService;
use crate::{
    application::{
        dto::LoginResult,
        error::{ApplicationError, ApplicationResult},
        ports::otp::OtpRecord,
    },
    domain::user::UserId,
};
use uuid::Uuid;

impl AuthCommandService {
    /// Issue a fresh six-digit code, overwriting any pending one for the
    /// user. Delivery (SMS/email) is the boundary layer's concern.
    pub async fn generate_otp(&self, user_id: UserId) -> ApplicationResult<String> {
        let code = random_six_digits();
        let expires_at = self.clock.now()
            + chrono::Duration::from_std(self.limits.otp_ttl)
                .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        self.otp_store
            .put(
                user_id,
                OtpRecord {
                    code: code.clone(),
                    attempts: 0,
                    expires_at,
                },
            )
            .await?;

        Ok(code)
    }

    /// Single-use verification with bounded retries. The record is purged on
    /// success and on attempt exhaustion; an expired or missing record reads
    /// as `CodeExpired`.
    pub async fn verify_otp(&self, user_id: UserId, code: &str) -> ApplicationResult<()> {
        let now = self.clock.now();
        let Some(mut record) = self.otp_store.get(user_id).await? else {
            return Err(ApplicationError::CodeExpired("no pending code".into()));
        };

        if record.expires_at <= now {
            self.otp_store.remove(user_id).await?;
            return Err(ApplicationError::CodeExpired("code expired".into()));
        }

        if record.attempts >= self.limits.max_otp_attempts {
            self.otp_store.remove(user_id).await?;
            return Err(ApplicationError::CodeExpired("too many attempts".into()));
        }

        if record.code != code {
            record.attempts += 1;
            self.otp_store.put(user_id, record).await?;
            return Err(ApplicationError::InvalidCode);
        }

        self.otp_store.remove(user_id).await?;
        Ok(())
    }

    /// Complete a login that stopped at `TwoFactorRequired`: verify the code
    /// and hand out the token pair.
    pub async fn complete_two_factor(
        &self,
        user_id: UserId,
        code: &str,
    ) -> ApplicationResult<LoginResult> {
        self.verify_otp(user_id, code).await?;

        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("user {user_id}")))?;

        let tokens = self.issue_token_pair(&user).await?;
        Ok(LoginResult {
            tokens,
            user: user.into(),
        })
    }
}

/// Uniform in 100000..=999999, sourced from the v4 UUID generator's CSPRNG.
fn random_six_digits() -> String {
    let raw = Uuid::new_v4().as_u128();
    format!("{}", 100_000 + (raw % 900_000))
}
