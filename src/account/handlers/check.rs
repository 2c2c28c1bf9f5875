/**
 * Role Probe Handlers
 *
 * GET /users/auth/check/admin and GET /users/auth/check/dataconsumer.
 *
 * Both handlers sit behind the role middleware, which verifies the bearer
 * token and the required role before they run. By the time a request gets
 * here it is authorized, so each handler only returns the fixed marker.
 */

use axum::response::Json;

use crate::account::handlers::types::AuthCheckResponse;

/// Probe for the "Admin" role
pub async fn check_admin() -> Json<AuthCheckResponse> {
    Json(AuthCheckResponse::authorized())
}

/// Probe for the "DataConsumer" role
pub async fn check_data_consumer() -> Json<AuthCheckResponse> {
    Json(AuthCheckResponse::authorized())
}
