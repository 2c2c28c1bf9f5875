/**
 * Token Issuance and Verification
 *
 * This module builds, signs, verifies, and records bearer credentials.
 *
 * # Claims
 *
 * Every token carries the user's identifier as the subject and the role
 * "DataConsumer". Tokens issued for the single privileged username
 * additionally carry the role "Admin". Issuer and audience come from
 * configuration; expiry is one day after issuance.
 *
 * # Signing
 *
 * Tokens are signed with symmetric-key HMAC-SHA256 using the configured
 * secret and serialized in the standard compact representation.
 *
 * # Persistence
 *
 * Each issued token is recorded in the `Tokens` table. A failed insert is
 * logged and returned as `TokenError::Store`; it is not swallowed, so an
 * authentication attempt fails with a server error if the token row cannot
 * be written.
 */

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::account::models::User;
use crate::account::store::UserStore;
use crate::error::TokenError;
use crate::server::config::JwtSettings;

/// Role attached to every issued token
pub const ROLE_DATA_CONSUMER: &str = "DataConsumer";

/// Role attached only to tokens for the privileged username
pub const ROLE_ADMIN: &str = "Admin";

/// The one username whose tokens also carry the Admin role
pub const ADMIN_USERNAME: &str = "tkerstiens";

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User identifier
    pub sub: String,
    /// Role claims ("DataConsumer", optionally "Admin")
    pub roles: Vec<String>,
    /// Token issuer, from configuration
    pub iss: String,
    /// Token audience, from configuration
    pub aud: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Build the claims set for a user
///
/// Pure function: the caller supplies issuance and expiry instants so that
/// claim construction is testable without a clock.
pub fn build_claims(
    user_id: i32,
    username: Option<&str>,
    settings: &JwtSettings,
    issued_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
) -> Claims {
    let mut roles = vec![ROLE_DATA_CONSUMER.to_string()];
    if username == Some(ADMIN_USERNAME) {
        roles.push(ROLE_ADMIN.to_string());
    }

    Claims {
        sub: user_id.to_string(),
        roles,
        iss: settings.valid_issuer.clone(),
        aud: settings.valid_audience.clone(),
        exp: expires_at.timestamp() as u64,
        iat: issued_at.timestamp() as u64,
    }
}

/// Sign a claims set into a compact token string
pub fn sign_token(claims: &Claims, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Verify and decode a token
///
/// Checks the HMAC-SHA256 signature, the configured issuer and audience,
/// and the expiry instant.
pub fn verify_token(
    token: &str,
    settings: &JwtSettings,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[&settings.valid_issuer]);
    validation.set_audience(&[&settings.valid_audience]);

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(settings.secret.as_bytes()),
        &validation,
    )?;

    Ok(data.claims)
}

/// Builds, signs, and records bearer credentials
#[derive(Clone)]
pub struct TokenIssuer {
    settings: JwtSettings,
    store: UserStore,
}

impl TokenIssuer {
    /// Create an issuer over the given settings and token store
    pub fn new(settings: JwtSettings, store: UserStore) -> Self {
        Self { settings, store }
    }

    /// Issue a signed token for the user and record it
    ///
    /// # Errors
    ///
    /// * `TokenError::Configuration` - issuer, audience, or secret is empty
    /// * `TokenError::MissingUserId` - the user has no assigned identifier
    /// * `TokenError::Signing` - encoding the token failed
    /// * `TokenError::Store` - the token row could not be written; logged
    ///   and propagated, never swallowed
    pub async fn issue(&self, user: &User) -> Result<String, TokenError> {
        if self.settings.valid_issuer.is_empty()
            || self.settings.valid_audience.is_empty()
            || self.settings.secret.is_empty()
        {
            tracing::error!("One or more JWT configuration variables are not set");
            return Err(TokenError::Configuration);
        }

        let user_id = user.id.ok_or(TokenError::MissingUserId)?;

        let issued_at = Utc::now();
        let expires_at = issued_at + Duration::days(1);

        let claims = build_claims(
            user_id,
            user.username.as_deref(),
            &self.settings,
            issued_at,
            expires_at,
        );
        let token = sign_token(&claims, &self.settings.secret)?;

        if let Err(err) = self.store.insert_token(user_id, &token, issued_at, expires_at).await {
            tracing::error!("Failed to store issued token: {:?}", err);
            return Err(TokenError::Store(err));
        }

        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn settings() -> JwtSettings {
        crate::test_support::config().jwt
    }

    #[test]
    fn test_claims_carry_data_consumer_role_only() {
        let now = Utc::now();
        let claims = build_claims(7, Some("alice"), &settings(), now, now + Duration::days(1));
        assert_eq!(claims.sub, "7");
        assert_eq!(claims.roles, vec![ROLE_DATA_CONSUMER.to_string()]);
    }

    #[test]
    fn test_privileged_username_also_gets_admin_role() {
        let now = Utc::now();
        let claims = build_claims(
            7,
            Some(ADMIN_USERNAME),
            &settings(),
            now,
            now + Duration::days(1),
        );
        assert_eq!(
            claims.roles,
            vec![ROLE_DATA_CONSUMER.to_string(), ROLE_ADMIN.to_string()]
        );
    }

    #[test]
    fn test_expiry_is_one_day_after_issuance() {
        let now = Utc::now();
        let claims = build_claims(1, Some("alice"), &settings(), now, now + Duration::days(1));
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_sign_and_verify_roundtrip() {
        let settings = settings();
        let now = Utc::now();
        let claims = build_claims(42, Some("alice"), &settings, now, now + Duration::days(1));
        let token = sign_token(&claims, &settings.secret).unwrap();
        assert!(!token.is_empty());

        let decoded = verify_token(&token, &settings).unwrap();
        assert_eq!(decoded.sub, "42");
        assert_eq!(decoded.roles, claims.roles);
        assert_eq!(decoded.iss, "platform");
        assert_eq!(decoded.aud, "consumers");
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let settings = settings();
        let now = Utc::now();
        let claims = build_claims(1, Some("alice"), &settings, now, now + Duration::days(1));
        let token = sign_token(&claims, &settings.secret).unwrap();

        let other = JwtSettings {
            secret: "a-completely-different-signing-secret".to_string(),
            ..settings
        };
        assert!(verify_token(&token, &other).is_err());
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let settings = settings();
        let issued = Utc::now() - Duration::days(2);
        let expired = issued + Duration::days(1);
        let claims = build_claims(1, Some("alice"), &settings, issued, expired);
        let token = sign_token(&claims, &settings.secret).unwrap();

        let err = verify_token(&token, &settings).unwrap_err();
        assert!(matches!(
            err.kind(),
            jsonwebtoken::errors::ErrorKind::ExpiredSignature
        ));
    }

    #[test]
    fn test_verify_rejects_wrong_issuer() {
        let settings = settings();
        let now = Utc::now();
        let claims = build_claims(1, Some("alice"), &settings, now, now + Duration::days(1));
        let token = sign_token(&claims, &settings.secret).unwrap();

        let other = JwtSettings {
            valid_issuer: "someone-else".to_string(),
            ..settings
        };
        assert!(verify_token(&token, &other).is_err());
    }

    #[test]
    fn test_verify_rejects_wrong_audience() {
        let settings = settings();
        let now = Utc::now();
        let claims = build_claims(1, Some("alice"), &settings, now, now + Duration::days(1));
        let token = sign_token(&claims, &settings.secret).unwrap();

        let other = JwtSettings {
            valid_audience: "someone-else".to_string(),
            ..settings
        };
        assert!(verify_token(&token, &other).is_err());
    }
}
