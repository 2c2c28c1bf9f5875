/**
 * Test Support
 *
 * Shared fixtures for unit tests. The pool is created lazily, so state
 * built here never opens a store connection; tests that use it only
 * exercise paths that return before any query runs.
 */

use crate::server::config::{AppConfig, DatabaseSettings, JwtSettings};
use crate::server::state::AppState;

/// A complete, valid configuration for tests
pub fn config() -> AppConfig {
    AppConfig {
        salt: "pepper".to_string(),
        database: DatabaseSettings {
            host: "localhost".to_string(),
            port: "3306".to_string(),
            name: "platform".to_string(),
            user: "svc".to_string(),
            password: "hunter2".to_string(),
        },
        jwt: JwtSettings {
            valid_issuer: "platform".to_string(),
            valid_audience: "consumers".to_string(),
            secret: "test-secret-at-least-32-bytes-long".to_string(),
        },
    }
}

/// Application state over a lazy pool that never connects
pub fn state() -> AppState {
    let config = config();
    let pool = sqlx::mysql::MySqlPoolOptions::new()
        .connect_lazy(&config.database_url())
        .expect("valid test database url");
    AppState::new(config, pool)
}
