/**
 * User Listing Handler
 *
 * GET /users returns the in-memory placeholder collection seeded into the
 * application state at construction. It is not backed by the store and is
 * never consulted by registration or authentication.
 */

use axum::{extract::State, response::Json};

use crate::account::handlers::types::UserDto;
use crate::server::state::AppState;

/// List placeholder users
///
/// Projects the read-only seed through `UserDto` so seed passwords never
/// serialize.
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<UserDto>> {
    Json(state.seed_users.iter().map(UserDto::from_user).collect())
}
