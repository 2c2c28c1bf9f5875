/**
 * Application State Management
 *
 * This module defines the shared state handed to every request handler.
 *
 * # Contents
 *
 * - the validated configuration (`Arc`, read-only)
 * - the store connection pool
 * - the account service built over both
 * - the placeholder user seed for the listing endpoint
 *
 * # Thread Safety
 *
 * Nothing in the state is mutable after construction. The placeholder seed
 * is an `Arc<Vec<User>>` populated once here; it backs only the listing
 * endpoint and is never consulted by registration or authentication, which
 * always go to the store.
 */

use std::sync::Arc;

use sqlx::MySqlPool;

use crate::account::models::User;
use crate::account::service::AccountService;
use crate::server::config::AppConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Validated process-wide configuration
    pub config: Arc<AppConfig>,
    /// Store connection pool
    pub pool: MySqlPool,
    /// Registration and authentication service
    pub account: AccountService,
    /// Read-only placeholder records for the listing endpoint
    pub seed_users: Arc<Vec<User>>,
}

impl AppState {
    /// Assemble the state from validated configuration and a pool
    pub fn new(config: AppConfig, pool: MySqlPool) -> Self {
        let account = AccountService::new(pool.clone(), &config);

        let seed_users = Arc::new(vec![User {
            id: Some(1),
            username: Some("Jimmy".to_string()),
            password: Some("Neutron".to_string()),
            ..User::default()
        }]);

        Self {
            config: Arc::new(config),
            pool,
            account,
            seed_users,
        }
    }
}
