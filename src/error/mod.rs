//! Error Module
//!
//! This module defines the error types used at the service and startup
//! boundaries. Errors are explicit values; nothing in the crate panics
//! across a layer boundary.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # Error Types
//!
//! - `ConfigError` - Missing environment configuration, fatal at startup
//! - `TokenError` - Credential issuance failures (configuration, signing,
//!   token persistence)
//!
//! # HTTP Response Conversion
//!
//! `TokenError` implements `IntoResponse` so the authentication handler can
//! surface an issuance failure directly as a 500 response. Conversion is the
//! point where the underlying cause is logged.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{ConfigError, TokenError};
