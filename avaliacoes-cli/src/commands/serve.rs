//! HTTP server command
//!
//! Every setting comes from a flag or its environment variable; a `.env`
//! file in the working directory is loaded before parsing.

use anyhow::{Context, Result};
use clap::{Args, Parser};
use sqlx::postgres::PgSslMode;

use avaliacoes_server::db::pool::DEFAULT_MAX_CONNECTIONS;
use avaliacoes_server::http::server::DEFAULT_PORT;
use avaliacoes_server::{create_pool, run_server, DbConfig, ServerConfig};

/// Arguments for the serve command
#[derive(Parser)]
pub struct ServeArgs {
    /// Port to listen on, on all interfaces
    #[arg(long, short = 'p', env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// The single origin allowed by CORS (e.g. https://my-site.vercel.app)
    #[arg(long, env = "ALLOWED_HOSTS")]
    pub allowed_origin: String,

    #[command(flatten)]
    pub db: DbArgs,
}

/// Database connection flags
#[derive(Args)]
pub struct DbArgs {
    /// Database host
    #[arg(long, env = "PGHOST")]
    pub db_host: String,

    /// Database port
    #[arg(long, env = "PGPORT")]
    pub db_port: u16,

    /// Database user
    #[arg(long, env = "PGUSER")]
    pub db_user: String,

    /// Database password
    #[arg(long, env = "PGPASSWORD", hide_env_values = true)]
    pub db_password: String,

    /// Database name
    #[arg(long, env = "PGDATABASE")]
    pub db_name: String,

    /// TLS mode: disable, allow, prefer, require, verify-ca, verify-full.
    /// WARNING: `require` encrypts but does NOT verify the server certificate.
    #[arg(long, env = "PGSSLMODE", default_value = "require")]
    pub db_ssl_mode: PgSslMode,

    /// Maximum pooled connections
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub db_max_connections: u32,
}

impl From<DbArgs> for DbConfig {
    fn from(args: DbArgs) -> Self {
        Self {
            host: args.db_host,
            port: args.db_port,
            user: args.db_user,
            password: args.db_password,
            database: args.db_name,
            ssl_mode: args.db_ssl_mode,
            max_connections: args.db_max_connections,
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_config = DbConfig::from(args.db);

    tracing::info!(
        port = args.port,
        db_host = %db_config.host,
        db_name = %db_config.database,
        "Starting avaliacoes server"
    );

    let pool = create_pool(&db_config)
        .await
        .context("Failed to create database pool")?;

    let config = ServerConfig::new(args.port, args.allowed_origin);

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: [&str; 13] = [
        "serve",
        "--allowed-origin",
        "https://site.example",
        "--db-host",
        "db.local",
        "--db-port",
        "6543",
        "--db-user",
        "u",
        "--db-password",
        "p",
        "--db-name",
        "reviews",
    ];

    #[test]
    fn flags_map_to_db_config() {
        let mut argv = BASE.to_vec();
        argv.extend(["--db-ssl-mode", "verify-full", "--db-max-connections", "4"]);
        let args = ServeArgs::try_parse_from(argv).unwrap();

        assert_eq!(args.allowed_origin, "https://site.example");
        let config = DbConfig::from(args.db);
        assert_eq!(config.host, "db.local");
        assert_eq!(config.port, 6543);
        assert_eq!(config.database, "reviews");
        assert_eq!(config.max_connections, 4);
        assert!(!config.skips_certificate_verification());
    }

    #[test]
    fn explicit_port() {
        let mut argv = BASE.to_vec();
        argv.extend(["--port", "8080"]);
        let args = ServeArgs::try_parse_from(argv).unwrap();
        assert_eq!(args.port, 8080);
    }

    #[test]
    fn unknown_ssl_mode_is_rejected() {
        let mut argv = BASE.to_vec();
        argv.extend(["--db-ssl-mode", "sometimes"]);
        assert!(ServeArgs::try_parse_from(argv).is_err());
    }
}
