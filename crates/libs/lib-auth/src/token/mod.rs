//! # JWT Token Management
//!
//! Issues and verifies HMAC-signed, self-contained bearer tokens.
//!
//! Wire format is a compact JWT (`header.payload.signature`) whose payload is
//! `{"userId": <account id>, "exp": <unix seconds>}`. There is no server-side
//! session: a token is valid exactly when its signature checks out under the
//! shared secret and `exp` has not passed.

use crate::error::{Error, Result};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use lib_utils::{from_unix, unix_after};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Lifetime of an issued token. There is no refresh; clients log in again.
pub const TOKEN_TTL_MINUTES: i64 = 60;

/// Algorithm used for issuing.
const SIGNING_ALGORITHM: Algorithm = Algorithm::HS256;

/// Algorithms accepted on verification. Anything outside the HMAC family is
/// rejected before the signature is looked at.
const ACCEPTED_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

/// Claims carried by a token; also the authenticated identity recovered from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the account identifier.
    #[serde(rename = "userId")]
    pub user_id: i64,
    /// Expiration time (Unix timestamp, seconds).
    pub exp: i64,
}

impl Claims {
    pub fn account_id(&self) -> i64 {
        self.user_id
    }

    /// `exp` as a UTC time, if it is representable.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        from_unix(self.exp).ok()
    }
}

/// Issue a token for `account_id` expiring [`TOKEN_TTL_MINUTES`] from now.
pub fn encode_jwt(account_id: i64, secret: &str) -> Result<String> {
    let claims = Claims {
        user_id: account_id,
        exp: unix_after(Duration::minutes(TOKEN_TTL_MINUTES)),
    };
    sign(&claims, secret)
}

/// Issue a token with an explicit expiry.
pub fn encode_jwt_expiring(account_id: i64, secret: &str, expires_at: DateTime<Utc>) -> Result<String> {
    let claims = Claims {
        user_id: account_id,
        exp: expires_at.timestamp(),
    };
    sign(&claims, secret)
}

fn sign(claims: &Claims, secret: &str) -> Result<String> {
    if secret.is_empty() {
        return Err(Error::Signing("signing secret is not configured".to_string()));
    }

    encode(
        &Header::new(SIGNING_ALGORITHM),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| Error::Signing(e.to_string()))
}

/// Decode and validate a token.
///
/// Every failure (foreign algorithm, bad signature, expiry, garbage input)
/// collapses into [`Error::InvalidToken`].
pub fn decode_jwt(token: &str, secret: &str) -> Result<Claims> {
    if secret.is_empty() {
        return Err(Error::InvalidToken);
    }

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation(),
    )
    .map_err(|e| {
        debug!("[TOKEN] Rejected token: {}", e);
        Error::InvalidToken
    })?;

    Ok(token_data.claims)
}

fn validation() -> Validation {
    let mut validation = Validation::new(SIGNING_ALGORITHM);
    validation.algorithms = ACCEPTED_ALGORITHMS.to_vec();
    validation.leeway = 0;
    validation.validate_exp = true;
    validation
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-key-must-be-at-least-32-chars-long!";

    #[test]
    fn test_jwt_encoding_decoding() {
        let token = encode_jwt(42, SECRET).expect("JWT encoding should succeed");
        let claims = decode_jwt(&token, SECRET).expect("JWT decoding should succeed");

        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.account_id(), 42);
    }

    #[test]
    fn test_expiry_is_sixty_minutes() {
        let before = Utc::now().timestamp();
        let token = encode_jwt(1, SECRET).unwrap();
        let claims = decode_jwt(&token, SECRET).unwrap();

        assert!(claims.exp >= before + 60 * 60);
        assert!(claims.exp <= Utc::now().timestamp() + 60 * 60);
    }

    #[test]
    fn test_token_is_three_part_compact() {
        let token = encode_jwt(1, SECRET).unwrap();
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_expired_token_rejected() {
        let expired_at = Utc::now() - Duration::seconds(5);
        let token = encode_jwt_expiring(7, SECRET, expired_at).unwrap();

        assert!(matches!(decode_jwt(&token, SECRET), Err(Error::InvalidToken)));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = encode_jwt(7, SECRET).unwrap();
        let other = "another-secret-key-that-is-at-least-32-chars";

        assert!(matches!(decode_jwt(&token, other), Err(Error::InvalidToken)));
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let token = encode_jwt(7, SECRET).unwrap();
        let mut parts: Vec<&str> = token.split('.').collect();
        // {"userId":1,"exp":4102444800}
        parts[1] = "eyJ1c2VySWQiOjEsImV4cCI6NDEwMjQ0NDgwMH0";
        let tampered = parts.join(".");

        assert!(matches!(decode_jwt(&tampered, SECRET), Err(Error::InvalidToken)));
    }

    #[test]
    fn test_non_hmac_algorithms_rejected() {
        let payload = "eyJ1c2VySWQiOjEsImV4cCI6NDEwMjQ0NDgwMH0";
        // {"alg":"none","typ":"JWT"}
        let none_token = format!("eyJhbGciOiJub25lIiwidHlwIjoiSldUIn0.{}.", payload);
        // {"alg":"RS256","typ":"JWT"}
        let rs_token = format!("eyJhbGciOiJSUzI1NiIsInR5cCI6IkpXVCJ9.{}.c2lnbmF0dXJl", payload);

        assert!(matches!(decode_jwt(&none_token, SECRET), Err(Error::InvalidToken)));
        assert!(matches!(decode_jwt(&rs_token, SECRET), Err(Error::InvalidToken)));
    }

    #[test]
    fn test_other_hmac_variant_accepted() {
        let claims = Claims {
            user_id: 9,
            exp: unix_after(Duration::minutes(5)),
        };
        let token = encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert_eq!(decode_jwt(&token, SECRET).unwrap(), claims);
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(matches!(decode_jwt("not.a.token", SECRET), Err(Error::InvalidToken)));
        assert!(matches!(decode_jwt("", SECRET), Err(Error::InvalidToken)));
    }

    #[test]
    fn test_empty_secret_is_signing_error() {
        assert!(matches!(encode_jwt(1, ""), Err(Error::Signing(_))));
    }

    #[test]
    fn test_expires_at_matches_exp() {
        let claims = Claims { user_id: 1, exp: 4102444800 };
        assert_eq!(claims.expires_at().map(|t| t.timestamp()), Some(4102444800));
    }
}
