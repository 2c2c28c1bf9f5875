//! Account Handlers Module
//!
//! HTTP handlers for the account endpoints. Handlers validate input shape
//! and map service outcomes to responses; all account logic lives in the
//! service layer.
//!
//! # Handlers
//!
//! - **`list_users`** - GET /users - Placeholder user listing
//! - **`create_user`** - POST /users - User registration
//! - **`auth_user`** - POST /users/auth - User authentication
//! - **`check_admin`** - GET /users/auth/check/admin - Admin role probe
//! - **`check_data_consumer`** - GET /users/auth/check/dataconsumer -
//!   DataConsumer role probe
//!
//! # Response Policy
//!
//! Success responses carry the public-safe `UserDto` projection (id,
//! username, token); the password never serializes. Registration failures
//! keep the service's message in the 400 body, while authentication
//! failures always answer 401 with the same fixed message regardless of
//! the underlying cause.

/// Response types
pub mod types;

/// Placeholder user listing handler
pub mod list;

/// User registration handler
pub mod register;

/// User authentication handler
pub mod authenticate;

/// Role-gated probe handlers
pub mod check;

// Re-export commonly used types
pub use types::{AuthCheckResponse, ErrorResponse, UserDto};

// Re-export handlers
pub use authenticate::auth_user;
pub use check::{check_admin, check_data_consumer};
pub use list::list_users;
pub use register::create_user;
