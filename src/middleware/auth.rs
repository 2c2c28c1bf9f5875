/**
 * Role Authorization Middleware
 *
 * This middleware protects routes that require a role-bearing token. It
 * extracts the bearer token from the Authorization header, verifies it
 * (signature, issuer, audience, expiry), and checks the required role
 * against the token's role claims before invoking the handler.
 *
 * Returns 401 Unauthorized when the token is missing or invalid and
 * 403 Forbidden when a valid token lacks the required role.
 */

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::account::tokens::{verify_token, Claims, ROLE_ADMIN, ROLE_DATA_CONSUMER};
use crate::server::state::AppState;

/// Whether the claims grant the given role
///
/// The authorization rule is exactly "role is present in the token's role
/// claims"; keeping it a standalone predicate keeps the rule testable
/// without an HTTP stack.
pub fn has_role(claims: &Claims, role: &str) -> bool {
    claims.roles.iter().any(|r| r == role)
}

/// Gate requiring the "Admin" role
pub async fn require_admin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    authorize(state, request, next, ROLE_ADMIN).await
}

/// Gate requiring the "DataConsumer" role
pub async fn require_data_consumer(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    authorize(state, request, next, ROLE_DATA_CONSUMER).await
}

/// Verify the bearer token and check the required role
///
/// 1. Extract the token from the Authorization header ("Bearer <token>")
/// 2. Verify signature, issuer, audience, and expiry
/// 3. Check the required role against the role claims
async fn authorize(
    state: AppState,
    request: Request,
    next: Next,
    role: &'static str,
) -> Result<Response, StatusCode> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            StatusCode::UNAUTHORIZED
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        StatusCode::UNAUTHORIZED
    })?;

    let claims = verify_token(token, &state.config.jwt).map_err(|e| {
        tracing::warn!("Invalid token: {:?}", e);
        StatusCode::UNAUTHORIZED
    })?;

    if !has_role(&claims, role) {
        tracing::warn!("Token for subject {} lacks required role {}", claims.sub, role);
        return Err(StatusCode::FORBIDDEN);
    }

    Ok(next.run(request).await)
}
