/**
 * Registration Handler
 *
 * This module implements the user registration handler for POST /users.
 *
 * # Registration Process
 *
 * 1. Validate that username, password, and password confirmation are
 *    present and that the confirmation matches
 * 2. Hand the user to the account service (duplicate check, hashing,
 *    insert)
 * 3. Map the outcome: 201 with the public projection, or 400 carrying the
 *    service's error message
 *
 * # Validation
 *
 * Shape validation happens here, before the service is invoked; the
 * service independently re-checks username/password presence.
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::account::handlers::types::{ErrorResponse, UserDto};
use crate::account::models::User;
use crate::server::state::AppState;

/// Register a new user
///
/// # Arguments
///
/// * `State(state)` - Application state carrying the account service
/// * `Json(user)` - Registration request with username, password, and
///   password confirmation
///
/// # Returns
///
/// `201 Created` with `{id, username, token}` (token null at this point),
/// or `400 Bad Request` with `{error}` on validation or service failure.
pub async fn create_user(
    State(state): State<AppState>,
    Json(user): Json<User>,
) -> Result<(StatusCode, Json<UserDto>), (StatusCode, Json<ErrorResponse>)> {
    if is_blank(&user.username) {
        return Err(bad_request("Username not present."));
    }

    if is_blank(&user.password) || is_blank(&user.confirm_password) {
        return Err(bad_request("Password not present."));
    }

    if user.password != user.confirm_password {
        return Err(bad_request("Password confirmation does not match."));
    }

    tracing::info!(
        "Registration request for username: {}",
        user.username.as_deref().unwrap_or_default()
    );

    let result = state.account.register(user).await;

    match (result.is_success(), result.user) {
        (true, Some(user)) => {
            tracing::info!(
                "User created: {} (id {})",
                user.username.as_deref().unwrap_or_default(),
                user.id.unwrap_or_default()
            );
            Ok((StatusCode::CREATED, Json(UserDto::from_user(&user))))
        }
        (_, _) => Err(bad_request(result.error_message)),
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().unwrap_or("").is_empty()
}

fn bad_request(message: impl Into<String>) -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message)))
}
