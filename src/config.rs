// src/config.rs
use std::{env, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    token_secret: String,
    access_token_ttl: Duration,
    refresh_token_ttl: Duration,
    auth: AuthLimits,
    moderation: ModerationLimits,
}

/// Attempt-limiting and OTP expiry knobs for the auth engine.
#[derive(Clone, Copy, Debug)]
pub struct AuthLimits {
    pub max_login_attempts: u32,
    pub max_otp_attempts: u32,
    pub otp_ttl: Duration,
}

impl Default for AuthLimits {
    fn default() -> Self {
        Self {
            max_login_attempts: 5,
            max_otp_attempts: 3,
            otp_ttl: Duration::from_secs(300),
        }
    }
}

/// Reply-depth and auto-approval knobs for comment moderation.
#[derive(Clone, Copy, Debug)]
pub struct ModerationLimits {
    pub max_reply_depth: u32,
    pub auto_approve_threshold: u64,
}

impl Default for ModerationLimits {
    fn default() -> Self {
        Self {
            max_reply_depth: 3,
            auto_approve_threshold: 3,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn env_secs(key: &str, default: u64) -> Duration {
    let secs = env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default);
    Duration::from_secs(secs)
}

fn env_u32(key: &str, default: u32) -> u32 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(default)
}

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible defaults
    /// for optional values and validates required keys.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let token_secret =
            env::var("TOKEN_SECRET").map_err(|_| ConfigError::Missing("TOKEN_SECRET"))?;
        if token_secret.len() < 32 {
            return Err(ConfigError::Invalid(
                "TOKEN_SECRET must be at least 32 bytes".into(),
            ));
        }

        let access_token_ttl = env_secs("ACCESS_TOKEN_TTL_SECS", 15 * 60);
        let refresh_token_ttl = env_secs("REFRESH_TOKEN_TTL_SECS", 7 * 24 * 60 * 60);

        let auth = AuthLimits {
            max_login_attempts: env_u32("MAX_LOGIN_ATTEMPTS", 5),
            max_otp_attempts: env_u32("MAX_OTP_ATTEMPTS", 3),
            otp_ttl: env_secs("OTP_TTL_SECS", 300),
        };

        let moderation = ModerationLimits {
            max_reply_depth: env_u32("MAX_REPLY_DEPTH", 3),
            auto_approve_threshold: u64::from(env_u32("AUTO_APPROVE_THRESHOLD", 3)),
        };

        Ok(Self {
            token_secret,
            access_token_ttl,
            refresh_token_ttl,
            auth,
            moderation,
        })
    }

    pub fn token_secret(&self) -> &str {
        &self.token_secret
    }

    pub fn access_token_ttl(&self) -> Duration {
        self.access_token_ttl
    }

    pub fn refresh_token_ttl(&self) -> Duration {
        self.refresh_token_ttl
    }

    pub fn auth(&self) -> AuthLimits {
        self.auth
    }

    pub fn moderation(&self) -> ModerationLimits {
        self.moderation
    }
}
