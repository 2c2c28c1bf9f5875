/**
 * Authentication Handler
 *
 * This module implements the user authentication handler for
 * POST /users/auth.
 *
 * # Authentication Process
 *
 * 1. Validate that username and password are present
 * 2. Hand the credentials to the account service (hash, lookup, token
 *    issuance)
 * 3. Map the outcome: 200 with the public projection including the bearer
 *    token, or 401 with a fixed message
 *
 * # Security Notes
 *
 * Whatever the underlying cause (missing fields, unknown user, wrong
 * password, lookup failure), the response is the same 401 with the same
 * message, so the caller cannot tell which part of the credentials was
 * wrong. The one exception is a token persistence failure, which is a
 * server fault and answers 500.
 */

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::account::handlers::types::{ErrorResponse, UserDto};
use crate::account::models::User;
use crate::server::state::AppState;

/// Fixed message for every authentication failure
const AUTH_FAILED: &str = "Unable to authenticate credentials.";

/// Authenticate a user
///
/// # Arguments
///
/// * `State(state)` - Application state carrying the account service
/// * `Json(user)` - Credentials (username and password)
///
/// # Returns
///
/// `200 OK` with `{id, username, token}` on success, `401 Unauthorized`
/// with the fixed generic message on any credential failure, or `500` if
/// the issued token could not be recorded.
pub async fn auth_user(State(state): State<AppState>, Json(user): Json<User>) -> Response {
    if is_blank(&user.username) || is_blank(&user.password) {
        return unauthorized();
    }

    match state.account.authenticate(user).await {
        Ok(result) => match (result.is_success(), result.user) {
            (true, Some(user)) => {
                tracing::info!(
                    "User authenticated: {}",
                    user.username.as_deref().unwrap_or_default()
                );
                Json(UserDto::from_user(&user)).into_response()
            }
            // The service's message is intentionally discarded here.
            (_, _) => unauthorized(),
        },
        Err(err) => err.into_response(),
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().unwrap_or("").is_empty()
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse::new(AUTH_FAILED)),
    )
        .into_response()
}
