/**
 * Server Initialization
 *
 * This module assembles the application: pool construction from validated
 * configuration, state creation, and router configuration.
 *
 * # Initialization Process
 *
 * 1. Build a lazy connection pool from the configured store URL. No
 *    connection is opened here; each store operation checks one out when
 *    it runs, matching the per-operation connection model.
 * 2. Create the shared `AppState`.
 * 3. Create and return the router.
 *
 * Configuration has already been validated by the time this runs, so the
 * only failure mode is an unparseable store URL.
 */

use axum::Router;
use sqlx::mysql::MySqlPoolOptions;

use crate::routes::router::create_router;
use crate::server::config::AppConfig;
use crate::server::state::AppState;

/// Create and configure the application
///
/// # Arguments
///
/// * `config` - validated process-wide configuration
///
/// # Returns
///
/// Configured router ready to serve requests, or the pool construction
/// error if the store URL is malformed.
pub fn create_app(config: AppConfig) -> Result<Router, sqlx::Error> {
    tracing::info!("Initializing platform server");

    let pool = MySqlPoolOptions::new().connect_lazy(&config.database_url())?;
    let state = AppState::new(config, pool);

    Ok(create_router(state))
}
