/**
 * Router Configuration
 *
 * This module assembles the application's routes into a single router.
 *
 * # Routes
 *
 * - `GET  /users` - Placeholder user listing
 * - `POST /users` - User registration
 * - `POST /users/auth` - User authentication
 * - `GET  /users/auth/check/admin` - Role probe, requires "Admin"
 * - `GET  /users/auth/check/dataconsumer` - Role probe, requires
 *   "DataConsumer"
 *
 * The two probe routes are wrapped in the role middleware; everything else
 * is public. A trace layer logs every request, and unknown routes fall
 * back to a plain 404.
 */

use axum::{middleware, routing, Router};
use tower_http::trace::TraceLayer;

use crate::account::handlers::{auth_user, check_admin, check_data_consumer, create_user, list_users};
use crate::middleware::auth::{require_admin, require_data_consumer};
use crate::server::state::AppState;

/// Create the router with all routes configured
///
/// # Arguments
///
/// * `state` - Application state shared by handlers and middleware
///
/// # Returns
///
/// Configured router ready to serve requests
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/users", routing::get(list_users).post(create_user))
        .route("/users/auth", routing::post(auth_user))
        .route(
            "/users/auth/check/admin",
            routing::get(check_admin)
                .layer(middleware::from_fn_with_state(state.clone(), require_admin)),
        )
        .route(
            "/users/auth/check/dataconsumer",
            routing::get(check_data_consumer).layer(middleware::from_fn_with_state(
                state.clone(),
                require_data_consumer,
            )),
        )
        .layer(TraceLayer::new_for_http())
        .fallback(|| async { (axum::http::StatusCode::NOT_FOUND, "404 Not Found") })
        .with_state(state)
}
