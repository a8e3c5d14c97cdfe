use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::plan::ServiceType;

/// Issues and verifies signed quote tokens. A token binds the quote id,
/// service type, total fare, and an expiry under a keyed SHA-256 digest, so
/// order creation can detect a client-tampered fare instead of trusting it.
pub struct QuoteSigner {
    secret: String,
    ttl: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    SignatureMismatch,
    Expired,
    FareMismatch,
}

/// Verdict of a token check. An invalid token is an answer, not an error;
/// only a structurally malformed token fails the call itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verification {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<RejectReason>,
}

impl Verification {
    fn valid() -> Self {
        Self {
            valid: true,
            reason: None,
        }
    }

    fn rejected(reason: RejectReason) -> Self {
        Self {
            valid: false,
            reason: Some(reason),
        }
    }
}

impl QuoteSigner {
    pub fn new(secret: impl Into<String>, ttl_secs: i64) -> Self {
        Self {
            secret: secret.into(),
            ttl: Duration::seconds(ttl_secs),
        }
    }

    /// Produce a token for an issued quote along with its expiry time.
    /// Token layout: `quote_id:service_type:total_fare:expiry_unix:digest`.
    pub fn issue(
        &self,
        quote_id: Uuid,
        service_type: ServiceType,
        total_fare: f64,
    ) -> (String, DateTime<Utc>) {
        let expires_at = Utc::now() + self.ttl;
        let payload = format!(
            "{quote_id}:{service_type}:{total_fare}:{}",
            expires_at.timestamp()
        );
        let signature = self.sign(&payload);

        (format!("{payload}:{signature}"), expires_at)
    }

    /// Recompute the digest from the token's own fields and check it, the
    /// expiry, and the fare the client claims it was quoted. Checks run in
    /// that order so a forged token is never reported as merely expired.
    pub fn verify(&self, token: &str, claimed_fare: f64) -> Result<Verification, AppError> {
        let parts: Vec<&str> = token.split(':').collect();
        let [quote_id, service_type, fare, expiry, signature] = parts.as_slice() else {
            return Err(AppError::InvalidInput("malformed quote token".to_string()));
        };

        quote_id
            .parse::<Uuid>()
            .map_err(|_| AppError::InvalidInput("malformed quote token".to_string()))?;
        service_type.parse::<ServiceType>()?;
        let signed_fare: f64 = fare
            .parse()
            .map_err(|_| AppError::InvalidInput("malformed quote token".to_string()))?;
        let expiry: i64 = expiry
            .parse()
            .map_err(|_| AppError::InvalidInput("malformed quote token".to_string()))?;

        let payload = format!("{quote_id}:{service_type}:{fare}:{expiry}");
        if !constant_time_eq(&self.sign(&payload), signature) {
            return Ok(Verification::rejected(RejectReason::SignatureMismatch));
        }

        if expiry < Utc::now().timestamp() {
            return Ok(Verification::rejected(RejectReason::Expired));
        }

        if signed_fare != claimed_fare {
            return Ok(Verification::rejected(RejectReason::FareMismatch));
        }

        Ok(Verification::valid())
    }

    fn sign(&self, payload: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.secret.as_bytes());
        hasher.update(b"\n");
        hasher.update(payload.as_bytes());
        hex::encode(hasher.finalize())
    }
}

fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.bytes().zip(b.bytes()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
