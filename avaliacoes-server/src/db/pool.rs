//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection settings instead of a URL, so
//! each setting maps onto one environment variable.

use std::fmt;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Connection settings for the reviews database.
#[derive(Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    /// TLS mode. `Require` encrypts the connection but does not verify the
    /// server certificate; use `VerifyCa`/`VerifyFull` for verification.
    pub ssl_mode: PgSslMode,
    pub max_connections: u32,
}

impl DbConfig {
    /// Build sqlx connect options from these settings.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
            .ssl_mode(self.ssl_mode)
    }

    /// True when TLS is in use but the peer certificate is not checked.
    pub fn skips_certificate_verification(&self) -> bool {
        matches!(
            self.ssl_mode,
            PgSslMode::Allow | PgSslMode::Prefer | PgSslMode::Require
        )
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .field("ssl_mode", &self.ssl_mode)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the initial connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&db_config).await?;
/// ```
pub async fn create_pool(config: &DbConfig) -> Result<PgPool, sqlx::Error> {
    if config.skips_certificate_verification() {
        tracing::warn!(
            ssl_mode = ?config.ssl_mode,
            "database TLS certificate is NOT verified"
        );
    }

    tracing::debug!(
        host = %config.host,
        port = config.port,
        database = %config.database,
        max_connections = config.max_connections,
        "connecting database pool"
    );

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(config.connect_options())
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(ssl_mode: PgSslMode) -> DbConfig {
        DbConfig {
            host: "db.example.com".into(),
            port: 5432,
            user: "reviews".into(),
            password: "hunter2".into(),
            database: "reviews".into(),
            ssl_mode,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }

    #[test]
    fn connect_options_carry_settings() {
        let options = config(PgSslMode::Require).connect_options();
        assert_eq!(options.get_host(), "db.example.com");
        assert_eq!(options.get_port(), 5432);
        assert_eq!(options.get_username(), "reviews");
        assert_eq!(options.get_database(), Some("reviews"));
    }

    #[test]
    fn require_skips_verification() {
        assert!(config(PgSslMode::Require).skips_certificate_verification());
        assert!(!config(PgSslMode::VerifyFull).skips_certificate_verification());
        assert!(!config(PgSslMode::Disable).skips_certificate_verification());
    }

    #[test]
    fn debug_redacts_password() {
        let rendered = format!("{:?}", config(PgSslMode::Require));
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p avaliacoes-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let options: PgConnectOptions = url.parse().expect("invalid DATABASE_URL");
        let pool = PgPoolOptions::new()
            .max_connections(2)
            .connect_with(options)
            .await
            .expect("pool creation failed");

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }
}
