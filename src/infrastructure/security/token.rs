use crate::application::{
    dto::auth::IssuedToken,
    error::{ApplicationError, ApplicationResult},
    ports::{
        security::{RoleClaims, TokenClaims, TokenKind, TokenManager, TokenSubject},
        time::Clock,
    },
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, TimeZone, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::{str::FromStr, sync::Arc, time::Duration};

type HmacSha256 = Hmac<Sha256>;

#[derive(Serialize, Deserialize)]
struct Header {
    alg: String,
    typ: String,
}

impl Header {
    fn hs256() -> Self {
        Self {
            alg: "HS256".into(),
            typ: "JWT".into(),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct Payload {
    sub: String,
    #[serde(rename = "type")]
    kind: TokenKind,
    iat: i64,
    exp: i64,
    roles: RoleClaims,
}

/// Stateless HMAC-SHA256 token manager producing compact JWS tokens.
/// Access and refresh tokens share a key and differ only in the `type`
/// claim and lifetime; revocation is out of scope here.
pub struct HmacTokenManager {
    secret: Vec<u8>,
    access_ttl: Duration,
    refresh_ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl HmacTokenManager {
    pub fn new(
        secret: impl Into<Vec<u8>>,
        access_ttl: Duration,
        refresh_ttl: Duration,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            secret: secret.into(),
            access_ttl,
            refresh_ttl,
            clock,
        }
    }

    fn mac(&self, signing_input: &str) -> ApplicationResult<HmacSha256> {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        mac.update(signing_input.as_bytes());
        Ok(mac)
    }

    fn ttl_for(&self, kind: TokenKind) -> Duration {
        match kind {
            TokenKind::Access => self.access_ttl,
            TokenKind::Refresh => self.refresh_ttl,
        }
    }
}

fn encode_part<T: Serialize>(value: &T) -> ApplicationResult<String> {
    let json = serde_json::to_vec(value)
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

fn decode_part<T: for<'de> Deserialize<'de>>(part: &str) -> ApplicationResult<T> {
    let raw = URL_SAFE_NO_PAD
        .decode(part)
        .map_err(|err| ApplicationError::TokenInvalid(err.to_string()))?;
    serde_json::from_slice(&raw).map_err(|err| ApplicationError::TokenInvalid(err.to_string()))
}

fn timestamp(ts: i64) -> ApplicationResult<DateTime<Utc>> {
    Utc.timestamp_opt(ts, 0)
        .single()
        .ok_or_else(|| ApplicationError::TokenInvalid("timestamp out of range".into()))
}

#[async_trait]
impl TokenManager for HmacTokenManager {
    async fn issue(
        &self,
        subject: TokenSubject,
        kind: TokenKind,
    ) -> ApplicationResult<IssuedToken> {
        let issued_at = self.clock.now();
        let expires_at = issued_at
            + chrono::Duration::from_std(self.ttl_for(kind))
                .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        let payload = Payload {
            sub: subject.user_id.to_string(),
            kind,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            roles: subject.roles,
        };

        let signing_input = format!(
            "{}.{}",
            encode_part(&Header::hs256())?,
            encode_part(&payload)?
        );
        let signature = URL_SAFE_NO_PAD.encode(self.mac(&signing_input)?.finalize().into_bytes());

        Ok(IssuedToken {
            token: format!("{signing_input}.{signature}"),
            issued_at,
            expires_at,
        })
    }

    async fn verify(&self, token: &str) -> ApplicationResult<TokenClaims> {
        let mut parts = token.split('.');
        let (Some(header), Some(payload), Some(signature), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(ApplicationError::TokenInvalid(
                "expected three dot-separated parts".into(),
            ));
        };

        let provided = URL_SAFE_NO_PAD
            .decode(signature)
            .map_err(|err| ApplicationError::TokenInvalid(err.to_string()))?;
        self.mac(&format!("{header}.{payload}"))?
            .verify_slice(&provided)
            .map_err(|_| ApplicationError::TokenInvalid("signature mismatch".into()))?;

        let header: Header = decode_part(header)?;
        if header.alg != "HS256" {
            return Err(ApplicationError::TokenInvalid(format!(
                "unsupported algorithm '{}'",
                header.alg
            )));
        }
        let payload: Payload = decode_part(payload)?;

        let expires_at = timestamp(payload.exp)?;
        if expires_at <= self.clock.now() {
            return Err(ApplicationError::TokenExpired);
        }

        let user_id = UserId::from_str(&payload.sub)
            .map_err(|err| ApplicationError::TokenInvalid(err.to_string()))?;

        Ok(TokenClaims {
            user_id,
            kind: payload.kind,
            roles: payload.roles,
            issued_at: timestamp(payload.iat)?,
            expires_at,
        })
    }
}
