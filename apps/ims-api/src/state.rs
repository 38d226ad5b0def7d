//! Application state management.
//!
//! Shared state handed to every router builder: configuration and the
//! PostgreSQL pool.

/// Shared application state.
///
/// Cloning is cheap: `DatabaseConnection` wraps a pooled, reference-counted handle.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL database connection pool
    pub db: database::postgres::DatabaseConnection,
}
