//! Account Module
//!
//! This module handles user registration, authentication, credential
//! issuance, and the storage operations behind them. It provides the HTTP
//! handlers for the account endpoints and the service that orchestrates
//! them.
//!
//! # Architecture
//!
//! The account module is organized into focused submodules:
//!
//! - **`models`** - User domain model and the uniform `UserResult` wrapper
//! - **`hashing`** - Deterministic salted password hashing
//! - **`store`** - Parameterized SQL operations against the user store
//! - **`tokens`** - JWT claims, signing, verification, and persistence
//! - **`service`** - Registration and authentication orchestration
//! - **`handlers`** - HTTP handlers for the account endpoints
//!
//! # Module Structure
//!
//! ```text
//! account/
//! ├── mod.rs          - Module exports and documentation
//! ├── models.rs       - User model and UserResult
//! ├── hashing.rs      - Salted SHA-256 password hashing
//! ├── store.rs        - User store gateway (sqlx)
//! ├── tokens.rs       - JWT issuance and verification
//! ├── service.rs      - Account service
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs          - Handler exports
//!     ├── types.rs        - Response types
//!     ├── list.rs         - Placeholder user listing
//!     ├── register.rs     - User registration handler
//!     ├── authenticate.rs - User authentication handler
//!     └── check.rs        - Role-gated probe handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: Username and password provided → duplicate check →
//!    password hashed and stored → user row created
//! 2. **Authenticate**: Credentials re-hashed and matched → JWT issued,
//!    recorded in the token store, and returned
//! 3. **Check**: Bearer token verified and its role claims matched against
//!    the endpoint's required role
//!
//! # Security
//!
//! - Passwords are hashed with a server-wide salt before storage and are
//!   never returned in responses
//! - Tokens are HMAC-SHA256 signed and expire after one day
//! - Failed authentication always answers with the same generic message

/// User model and result wrapper
pub mod models;

/// Salted password hashing
pub mod hashing;

/// User store gateway
pub mod store;

/// JWT issuance and verification
pub mod tokens;

/// Registration and authentication orchestration
pub mod service;

/// HTTP handlers for account endpoints
pub mod handlers;

// Re-export commonly used types
pub use models::{User, UserResult};
pub use service::AccountService;
