//! Catalyst Platform - User Account Service
//!
//! A small user-account service: register a user, authenticate a user,
//! issue a bearer credential, and gate two probe endpoints by role. Built
//! as an Axum HTTP server over an external MySQL store consumed through
//! parameterized sqlx queries.
//!
//! # Module Structure
//!
//! - **`server`** - Configuration, application state, and app assembly
//! - **`routes`** - Route configuration and router assembly
//! - **`account`** - Registration, authentication, hashing, token
//!   issuance, store access, and the HTTP handlers
//! - **`middleware`** - Role authorization gate for the probe endpoints
//! - **`error`** - Startup and token issuance error types
//!
//! # Request Flow
//!
//! ```text
//! handler -> AccountService -> { UserStore, PasswordHasher, TokenIssuer } -> store
//! ```
//!
//! Handlers validate input shape and map outcomes to responses; the
//! account service owns the registration and authentication logic; the
//! store gateway owns the SQL. Configuration is read from the environment
//! once at startup and passed down explicitly to each component.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Registration, authentication, and account handlers
pub mod account;

/// Request middleware
pub mod middleware;

/// Error types
pub mod error;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use account::{AccountService, User, UserResult};
pub use error::{ConfigError, TokenError};
pub use server::{create_app, AppConfig};
