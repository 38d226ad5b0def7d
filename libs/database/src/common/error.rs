/// Errors raised while managing the database handle
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Error reported by SeaORM / the PostgreSQL driver
    #[cfg(feature = "postgres")]
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sea_orm::DbErr),

    /// The readiness probe could not reach the database
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    /// Applying schema migrations failed
    #[error("Migration error: {0}")]
    Migration(String),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
