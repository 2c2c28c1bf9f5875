/**
 * Error Conversion
 *
 * This module provides the `IntoResponse` implementation for `TokenError`,
 * allowing the authentication handler to return an issuance failure
 * directly. Conversion is where the failure is logged; the client only ever
 * sees a generic message.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Internal server error."
 * }
 * ```
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::types::TokenError;

impl IntoResponse for TokenError {
    /// Convert a token issuance failure into an HTTP response
    ///
    /// Every variant maps to 500 Internal Server Error with a fixed body.
    /// The underlying cause is logged here so handlers do not have to.
    fn into_response(self) -> Response {
        tracing::error!("Token issuance failed: {:?}", self);

        let body = Json(serde_json::json!({
            "error": "Internal server error.",
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
