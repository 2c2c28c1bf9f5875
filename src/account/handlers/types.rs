/**
 * Account Handler Types
 *
 * Response types shared across the account handlers.
 */

use serde::{Deserialize, Serialize};

use crate::account::models::User;

/// Public-safe user projection
///
/// Carries id, username, and token only. Absent fields serialize as null;
/// a freshly registered user has a null token because tokens are issued at
/// authentication, not registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Option<i32>,
    pub username: Option<String>,
    pub token: Option<String>,
}

impl UserDto {
    /// Project a user into its public-safe shape
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            token: user.token.clone(),
        }
    }
}

/// Body of a successful role probe
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthCheckResponse {
    pub is_authorized: bool,
}

impl AuthCheckResponse {
    /// The only value ever returned: the gate rejected everyone else
    pub fn authorized() -> Self {
        Self {
            is_authorized: true,
        }
    }
}

/// Error body for validation and service failures
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_user_dto_never_carries_password() {
        let user = User {
            id: Some(1),
            username: Some("alice".to_string()),
            password: Some("p1".to_string()),
            ..User::default()
        };
        let json = serde_json::to_string(&UserDto::from_user(&user)).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("p1"));
    }

    #[test]
    fn test_user_dto_serializes_absent_token_as_null() {
        let user = User {
            id: Some(1),
            username: Some("alice".to_string()),
            ..User::default()
        };
        let json = serde_json::to_value(UserDto::from_user(&user)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "username": "alice", "token": null})
        );
    }

    #[test]
    fn test_auth_check_response_serialization() {
        let json = serde_json::to_value(AuthCheckResponse::authorized()).unwrap();
        assert_eq!(json, serde_json::json!({"isAuthorized": true}));
    }
}
