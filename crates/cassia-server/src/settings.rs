//! Server configuration.
//!
//! Settings load from `conf/application.yml`, overridable through
//! `CASSIA_`-prefixed environment variables and a handful of command line
//! flags. The database URL additionally honors `DATABASE_URL`.

use std::time::Duration;

use clap::Parser;
use config::{Config, Environment};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

const DEFAULT_SERVER_PORT: u16 = 8080;

#[derive(Debug, Parser)]
#[command(name = "cassia", about = "Cassia admin console server")]
struct Cli {
    #[arg(short = 'c', long = "config", default_value = "conf/application.yml")]
    config: String,
    #[arg(long = "db-url", env = "DATABASE_URL")]
    database_url: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct Configuration {
    pub config: Config,
}

impl Configuration {
    pub fn new() -> anyhow::Result<Self> {
        let args = Cli::parse();

        let mut config_builder = Config::builder()
            .add_source(config::File::with_name(&args.config))
            .add_source(
                Environment::with_prefix("cassia")
                    .separator(".")
                    .try_parsing(true),
            );

        if let Some(url) = args.database_url {
            config_builder = config_builder.set_override("db.url", url)?;
        }

        let config = config_builder.build()?;

        Ok(Configuration { config })
    }

    pub fn from_config(config: Config) -> Self {
        Configuration { config }
    }

    pub fn server_address(&self) -> String {
        self.config
            .get_string("server.address")
            .unwrap_or("0.0.0.0".to_string())
    }

    pub fn server_port(&self) -> u16 {
        self.config
            .get_int("server.port")
            .unwrap_or(DEFAULT_SERVER_PORT.into()) as u16
    }

    pub fn context_path(&self) -> String {
        self.config
            .get_string("server.contextPath")
            .unwrap_or("".to_string())
    }

    pub async fn database_connection(&self) -> anyhow::Result<DatabaseConnection> {
        let max_connections = self
            .config
            .get_int("db.pool.config.maximumPoolSize")
            .unwrap_or(100) as u32;
        let min_connections = self
            .config
            .get_int("db.pool.config.minimumPoolSize")
            .unwrap_or(1) as u32;
        let connect_timeout = self
            .config
            .get_int("db.pool.config.connectionTimeout")
            .unwrap_or(30) as u64;
        let idle_timeout = self
            .config
            .get_int("db.pool.config.idleTimeout")
            .unwrap_or(10) as u64;
        let max_lifetime = self
            .config
            .get_int("db.pool.config.maxLifetime")
            .unwrap_or(1800) as u64;
        let sqlx_logging = self
            .config
            .get_bool("db.pool.config.sqlxLogging")
            .unwrap_or(false);

        let url = self.config.get_string("db.url")?;

        let mut opt = ConnectOptions::new(url);
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(connect_timeout))
            .idle_timeout(Duration::from_secs(idle_timeout))
            .max_lifetime(Duration::from_secs(max_lifetime))
            .sqlx_logging(sqlx_logging);

        tracing::info!(
            max_connections = max_connections,
            min_connections = min_connections,
            connect_timeout = connect_timeout,
            idle_timeout = idle_timeout,
            max_lifetime = max_lifetime,
            "database connection pool configured"
        );

        let database_connection = Database::connect(opt).await?;

        Ok(database_connection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_absent_keys() {
        let configuration = Configuration::from_config(Config::default());
        assert_eq!(configuration.server_address(), "0.0.0.0");
        assert_eq!(configuration.server_port(), DEFAULT_SERVER_PORT);
        assert_eq!(configuration.context_path(), "");
    }

    #[test]
    fn test_configured_values_win() {
        let config = Config::builder()
            .set_override("server.address", "127.0.0.1")
            .unwrap()
            .set_override("server.port", 9090)
            .unwrap()
            .set_override("server.contextPath", "/admin")
            .unwrap()
            .build()
            .unwrap();

        let configuration = Configuration::from_config(config);
        assert_eq!(configuration.server_address(), "127.0.0.1");
        assert_eq!(configuration.server_port(), 9090);
        assert_eq!(configuration.context_path(), "/admin");
    }
}
