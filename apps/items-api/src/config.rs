use core_config::{AppInfo, FromEnv, app_info, env_flag, server::ServerConfig};
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Apply pending migrations before serving (`RUN_MIGRATIONS`, default true)
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?;
        let server = ServerConfig::from_env()?;
        let run_migrations = env_flag("RUN_MIGRATIONS", true)?;

        Ok(Self {
            app: app_info!(),
            database,
            server,
            environment,
            run_migrations,
        })
    }
}
