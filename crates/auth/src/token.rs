//! Bearer-token validation against the process signing key.

use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde_json::{Map, Value};

use crate::claims::ClaimSet;
use crate::error::AuthError;

/// Symmetric secret used to verify token signatures.
///
/// Loaded once at startup from configuration and shared read-only across
/// requests. The raw bytes are never logged.
#[derive(Clone)]
pub struct SigningKey(Vec<u8>);

impl SigningKey {
    pub fn from_secret(secret: impl AsRef<[u8]>) -> Self {
        Self(secret.as_ref().to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl core::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("SigningKey(..)")
    }
}

/// Validates inbound bearer tokens and produces verified claim sets.
///
/// Validation covers the HS256 signature and the `exp` timestamp with zero
/// clock-skew tolerance. Issuer and audience are **not** checked: tokens from
/// any issuer/audience are accepted. Validation is pure; the token is neither
/// persisted nor logged.
#[derive(Clone)]
pub struct TokenAuthenticator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenAuthenticator {
    pub fn new(key: &SigningKey) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // An expired token is expired; no grace window.
        validation.leeway = 0;
        validation.validate_aud = false;

        Self {
            decoding_key: DecodingKey::from_secret(key.as_bytes()),
            validation,
        }
    }

    /// Validate a raw bearer token and return its claims.
    ///
    /// On success the claim set contains every payload claim in original
    /// key/value form. Any signature mismatch, malformed structure, or expiry
    /// violation fails with [`AuthError::InvalidToken`]; a partial claim set
    /// is never returned.
    pub fn validate(&self, token: &str) -> Result<ClaimSet, AuthError> {
        let data = jsonwebtoken::decode::<Map<String, Value>>(
            token,
            &self.decoding_key,
            &self.validation,
        )
        .map_err(|_| AuthError::InvalidToken)?;

        Ok(ClaimSet::from_payload(&data.claims))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use jsonwebtoken::{EncodingKey, Header};
    use serde_json::json;

    const SECRET: &str = "test-secret";

    fn mint(secret: &str, mut payload: Value) -> String {
        let exp = (Utc::now() + Duration::minutes(10)).timestamp();
        payload
            .as_object_mut()
            .unwrap()
            .entry("exp")
            .or_insert(json!(exp));

        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &payload,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .expect("failed to encode token")
    }

    fn authenticator() -> TokenAuthenticator {
        TokenAuthenticator::new(&SigningKey::from_secret(SECRET))
    }

    #[test]
    fn valid_token_yields_all_claims_unchanged() {
        let token = mint(
            SECRET,
            json!({
                "uid": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
                "email": "a@b.com",
                "role": "Admin",
            }),
        );

        let claims = authenticator().validate(&token).unwrap();
        assert_eq!(
            claims.first("uid"),
            Some("3fa85f64-5717-4562-b3fc-2c963f66afa6")
        );
        assert_eq!(claims.first("email"), Some("a@b.com"));
        assert_eq!(claims.first("role"), Some("Admin"));
        // exp is a claim too and survives verbatim.
        assert!(claims.first("exp").is_some());
    }

    #[test]
    fn wrong_key_rejected() {
        let token = mint("some-other-secret", json!({ "email": "a@b.com" }));

        assert_eq!(
            authenticator().validate(&token),
            Err(AuthError::InvalidToken)
        );
    }

    #[test]
    fn tampered_payload_rejected() {
        let token = mint(SECRET, json!({ "role": "User" }));

        // Swap the payload segment for one claiming Admin; signature no longer
        // matches.
        let parts: Vec<&str> = token.split('.').collect();
        let forged_payload = mint(SECRET, json!({ "role": "Admin" }));
        let forged_parts: Vec<&str> = forged_payload.split('.').collect();
        let tampered = format!("{}.{}.{}", parts[0], forged_parts[1], parts[2]);

        assert_eq!(
            authenticator().validate(&tampered),
            Err(AuthError::InvalidToken)
        );
    }

    #[test]
    fn expired_token_rejected_with_zero_leeway() {
        let exp = (Utc::now() - Duration::seconds(5)).timestamp();
        let token = mint(SECRET, json!({ "email": "a@b.com", "exp": exp }));

        assert_eq!(
            authenticator().validate(&token),
            Err(AuthError::InvalidToken)
        );
    }

    #[test]
    fn token_without_expiry_rejected() {
        let payload = json!({ "email": "a@b.com" });
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &payload,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert_eq!(
            authenticator().validate(&token),
            Err(AuthError::InvalidToken)
        );
    }

    #[test]
    fn malformed_token_rejected() {
        assert_eq!(
            authenticator().validate("not-a-token"),
            Err(AuthError::InvalidToken)
        );
        assert_eq!(authenticator().validate(""), Err(AuthError::InvalidToken));
    }

    #[test]
    fn foreign_issuer_and_audience_accepted() {
        let token = mint(
            SECRET,
            json!({
                "iss": "https://idp.partner.example",
                "aud": "someone-else",
                "email": "a@b.com",
            }),
        );

        let claims = authenticator().validate(&token).unwrap();
        assert_eq!(claims.first("iss"), Some("https://idp.partner.example"));
        assert_eq!(claims.first("email"), Some("a@b.com"));
    }
}
