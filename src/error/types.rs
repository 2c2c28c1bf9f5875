/**
 * Error Types
 *
 * This module defines the error types for the two places where a failure is
 * not expressed as a `UserResult`: startup configuration and credential
 * issuance.
 *
 * # Error Categories
 *
 * ## Configuration Errors
 *
 * Produced by `AppConfig::from_env` when one or more required environment
 * variables are absent. The server refuses to start in that case; each
 * missing variable is logged individually at the point of detection.
 *
 * ## Token Errors
 *
 * Produced by `TokenIssuer::issue`. Unlike registration and lookup failures,
 * which the account service converts into a `UserResult`, a token issuance
 * failure propagates to the handler and becomes a 500 response. This keeps
 * the observable behavior of a failed credential insert: the caller sees a
 * server error, not a business failure.
 */

use thiserror::Error;

/// Startup configuration errors
///
/// Returned by `AppConfig::from_env`. The variant carries no variable names
/// because every missing variable has already been logged individually; the
/// error itself only signals that startup must abort.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// One or more required environment variables are not set
    #[error("environment not properly configured")]
    Incomplete,
}

/// Credential issuance errors
///
/// Returned by `TokenIssuer::issue`. All variants surface to the client as
/// a generic 500; the specific cause is logged server-side.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Issuer, audience, or signing secret is empty
    #[error("JWT configuration variables are missing")]
    Configuration,

    /// The user has no store-assigned identifier to embed in the claims
    #[error("no user id provided")]
    MissingUserId,

    /// Signing or serializing the token failed
    #[error("failed to sign token: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),

    /// Persisting the issued token failed
    ///
    /// This is the one store failure that is not converted into a
    /// `UserResult`: it propagates out of `AccountService::authenticate`.
    #[error("failed to store token: {0}")]
    Store(#[from] sqlx::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_message() {
        let error = ConfigError::Incomplete;
        assert_eq!(error.to_string(), "environment not properly configured");
    }

    #[test]
    fn test_token_error_messages() {
        assert_eq!(
            TokenError::Configuration.to_string(),
            "JWT configuration variables are missing"
        );
        assert_eq!(TokenError::MissingUserId.to_string(), "no user id provided");
    }

    #[test]
    fn test_token_error_from_store_error() {
        let error: TokenError = sqlx::Error::RowNotFound.into();
        match error {
            TokenError::Store(_) => {}
            other => panic!("Expected Store variant, got {other:?}"),
        }
    }
}
