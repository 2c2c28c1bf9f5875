//! Middleware Module
//!
//! HTTP middleware for request processing. Currently provides the
//! role-based authorization gate for the token check endpoints.
//!
//! # Architecture
//!
//! - **`auth`** - Bearer token verification and role checking

pub mod auth;

pub use auth::{has_role, require_admin, require_data_consumer};
