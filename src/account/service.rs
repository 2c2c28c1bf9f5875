/**
 * Account Service
 *
 * This module orchestrates registration and authentication over the store
 * gateway, the password hasher, and the token issuer.
 *
 * # Outcome Policy
 *
 * Both operations return the uniform `UserResult` wrapper. Store failures
 * during registration and credential lookup are logged here and converted
 * into a generic failure message; they never propagate to the handlers.
 * The single exception is token persistence during authentication, which
 * surfaces as the `Err` arm of `authenticate` and becomes a server error.
 */

use sqlx::MySqlPool;

use crate::account::hashing::PasswordHasher;
use crate::account::models::{User, UserResult};
use crate::account::store::UserStore;
use crate::account::tokens::TokenIssuer;
use crate::error::TokenError;
use crate::server::config::AppConfig;

/// Registration and authentication orchestration
#[derive(Clone)]
pub struct AccountService {
    store: UserStore,
    hasher: PasswordHasher,
    issuer: TokenIssuer,
}

impl AccountService {
    /// Build the service and its collaborators from the pool and config
    pub fn new(pool: MySqlPool, config: &AppConfig) -> Self {
        let store = UserStore::new(pool);
        Self {
            hasher: PasswordHasher::new(config.salt.clone()),
            issuer: TokenIssuer::new(config.jwt.clone(), store.clone()),
            store,
        }
    }

    /// Register a new user
    ///
    /// 1. Reject empty username or password
    /// 2. Check for an existing user with the same username
    /// 3. Hash the password and insert the row
    /// 4. Return the user with the store-assigned id and the password
    ///    field cleared
    ///
    /// Never returns an error: store failures are logged and converted into
    /// a generic failure result.
    pub async fn register(&self, mut new_user: User) -> UserResult {
        let (username, password) = match credentials(&new_user) {
            Some(pair) => pair,
            None => return UserResult::failure("Username or password are missing."),
        };

        let count = match self.store.count_by_username(&username).await {
            Ok(Some(count)) => count,
            Ok(None) => return UserResult::failure("Unknown error, NTZ9U2H5"),
            Err(err) => {
                tracing::error!("An error occurred while adding the user: {:?}", err);
                return UserResult::failure(
                    "An error occurred while adding the user. Exception logged on server.",
                );
            }
        };

        if count > 0 {
            return UserResult::failure("User already exists.");
        }

        let password_hash = self.hasher.hash(&password);

        match self.store.insert_user(&username, &password_hash).await {
            Ok(id) => {
                new_user.id = Some(id);
                new_user.password = None;
                UserResult::success(new_user)
            }
            Err(err) => {
                tracing::error!("An error occurred while adding the user: {:?}", err);
                UserResult::failure(
                    "An error occurred while adding the user. Exception logged on server.",
                )
            }
        }
    }

    /// Authenticate a user and attach a bearer token
    ///
    /// Re-hashes the presented password and looks the pair up in the store.
    /// No match and lookup failures both produce the generic failure
    /// result. On a match the id is attached and a token issued; a token
    /// issuance failure propagates as `Err`.
    pub async fn authenticate(&self, mut user: User) -> Result<UserResult, TokenError> {
        let (username, password) = match credentials(&user) {
            Some(pair) => pair,
            None => return Ok(UserResult::failure("No Username or Password.")),
        };

        let password_hash = self.hasher.hash(&password);

        let user_id = match self
            .store
            .find_id_by_credentials(&username, &password_hash)
            .await
        {
            Ok(Some(id)) => id,
            Ok(None) => {
                return Ok(UserResult::failure(
                    "Unable to authenticate user credentials.",
                ))
            }
            Err(err) => {
                tracing::error!("An error occurred while authenticating the user: {:?}", err);
                return Ok(UserResult::failure(
                    "Unable to authenticate user credentials.",
                ));
            }
        };

        user.id = Some(user_id);
        let token = self.issuer.issue(&user).await?;
        user.token = Some(token);

        Ok(UserResult::success(user))
    }
}

/// Extract non-empty username and password, owned
fn credentials(user: &User) -> Option<(String, String)> {
    let username = user.username.as_deref().filter(|u| !u.is_empty())?;
    let password = user.password.as_deref().filter(|p| !p.is_empty())?;
    Some((username.to_string(), password.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // Lazy pool underneath: no connection is made until a query runs, and
    // the validation paths below return before any query.
    fn service() -> AccountService {
        crate::test_support::state().account
    }

    fn user(username: Option<&str>, password: Option<&str>) -> User {
        User {
            username: username.map(String::from),
            password: password.map(String::from),
            ..User::default()
        }
    }

    #[tokio::test]
    async fn test_register_rejects_missing_username() {
        let result = service().register(user(None, Some("p1"))).await;
        assert!(!result.is_success());
        assert_eq!(result.error_message, "Username or password are missing.");
    }

    #[tokio::test]
    async fn test_register_rejects_empty_password() {
        let result = service().register(user(Some("alice"), Some(""))).await;
        assert!(!result.is_success());
        assert_eq!(result.error_message, "Username or password are missing.");
    }

    #[tokio::test]
    async fn test_authenticate_rejects_missing_credentials() {
        let result = service()
            .authenticate(user(Some("alice"), None))
            .await
            .unwrap();
        assert!(!result.is_success());
        assert_eq!(result.error_message, "No Username or Password.");
    }

    #[test]
    fn test_credentials_filters_empty_strings() {
        assert!(credentials(&user(Some(""), Some("p1"))).is_none());
        assert!(credentials(&user(Some("alice"), Some(""))).is_none());
        assert_eq!(
            credentials(&user(Some("alice"), Some("p1"))),
            Some(("alice".to_string(), "p1".to_string()))
        );
    }
}
