/**
 * User Model and Result Wrapper
 *
 * This module defines the user domain model and the uniform outcome wrapper
 * returned by the account service for both registration and authentication.
 */

use serde::Deserialize;

/// User record as it moves through the registration and authentication flow
///
/// Every field is optional because the same shape serves as the inbound
/// request body and the in-flight domain object:
///
/// - `id` is assigned by the store on insert
/// - `password` exists on the write path only and is cleared once the hash
///   has been stored
/// - `confirm_password` is a transient request-only field, never persisted
/// - `token` is populated after a successful authentication
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Store-assigned identifier
    pub id: Option<i32>,
    /// Unique username
    pub username: Option<String>,
    /// Plaintext password (write path only, replaced by a hash in storage)
    pub password: Option<String>,
    /// Password confirmation (request-only, checked at the handler boundary)
    #[serde(rename = "confirmP")]
    pub confirm_password: Option<String>,
    /// Bearer token, set after a successful authentication
    pub token: Option<String>,
}

/// Uniform outcome wrapper for account service operations
///
/// Success is derived: an outcome is successful exactly when the error
/// message is empty.
#[derive(Debug, Clone)]
pub struct UserResult {
    /// The user on success, `None` on failure
    pub user: Option<User>,
    /// User-facing error message, empty on success
    pub error_message: String,
}

impl UserResult {
    /// Wrap a successful outcome
    pub fn success(user: User) -> Self {
        Self {
            user: Some(user),
            error_message: String::new(),
        }
    }

    /// Wrap a failed outcome with a user-facing message
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            user: None,
            error_message: message.into(),
        }
    }

    /// Whether the operation succeeded (error message empty)
    pub fn is_success(&self) -> bool {
        self.error_message.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_success_has_empty_error_message() {
        let result = UserResult::success(User::default());
        assert!(result.is_success());
        assert_eq!(result.error_message, "");
        assert!(result.user.is_some());
    }

    #[test]
    fn test_failure_carries_message_and_no_user() {
        let result = UserResult::failure("User already exists.");
        assert!(!result.is_success());
        assert_eq!(result.error_message, "User already exists.");
        assert!(result.user.is_none());
    }

    #[test]
    fn test_user_deserializes_confirm_password_from_wire_name() {
        let user: User = serde_json::from_str(
            r#"{"username":"alice","password":"p1","confirmP":"p1"}"#,
        )
        .unwrap();
        assert_eq!(user.username.as_deref(), Some("alice"));
        assert_eq!(user.password.as_deref(), Some("p1"));
        assert_eq!(user.confirm_password.as_deref(), Some("p1"));
        assert!(user.id.is_none());
        assert!(user.token.is_none());
    }

    #[test]
    fn test_user_deserializes_with_missing_fields() {
        let user: User = serde_json::from_str(r#"{"username":"alice"}"#).unwrap();
        assert_eq!(user.username.as_deref(), Some("alice"));
        assert!(user.password.is_none());
        assert!(user.confirm_password.is_none());
    }
}
