use async_trait::async_trait;
use tahrir_core::application::error::{ApplicationError, ApplicationResult};
use tahrir_core::application::ports::security::PasswordHasher;

/// Deterministic stand-in for the Argon2 hasher; keeps the auth tests off
/// the blocking pool.
#[derive(Default, Clone)]
pub struct DummyPasswordHasher;

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("hashed:{password}") {
            Ok(())
        } else {
            Err(ApplicationError::InvalidCredentials)
        }
    }
}
