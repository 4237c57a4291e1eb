use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::{defaults, envconfig::EnvConfig, validate};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub logging: LoggingConfig,
    /// Read from the `DB_` namespace, not `APP_`.
    #[serde(skip)]
    pub database: DatabaseConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let mut cfg = <Self as EnvConfig>::from_env()?;
        cfg.database = DatabaseConfig::from_env()?;
        validate::validate(&cfg)?;
        Ok(cfg)
    }
}

impl EnvConfig for AppConfig {}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneralConfig {
    pub host: String,
    pub port: u16,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            host: defaults::DEFAULT_HOST.to_string(),
            port: defaults::DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub rust_log: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            rust_log: defaults::DEFAULT_RUST_LOG.to_string(),
        }
    }
}

/// Connection parameters taken from `DB_*`.
///
/// Missing host, user, password or name are left empty on purpose: the
/// bootstrapper reports them as failed connection attempts.
#[derive(Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub sslmode: String,
    pub max_connections: u32,
    pub min_idle: u32,
    pub connect_timeout_secs: u64,
    pub connect_attempts: u32,
    pub retry_delay_ms: u64,
}

impl DatabaseConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: defaults::DEFAULT_DB_PORT,
            user: String::new(),
            password: String::new(),
            name: String::new(),
            sslmode: defaults::DEFAULT_DB_SSLMODE.to_string(),
            max_connections: defaults::DEFAULT_DB_MAX_CONNECTIONS,
            min_idle: defaults::DEFAULT_DB_MIN_IDLE,
            connect_timeout_secs: defaults::DEFAULT_DB_CONNECT_TIMEOUT_SECS,
            connect_attempts: defaults::DEFAULT_DB_CONNECT_ATTEMPTS,
            retry_delay_ms: defaults::DEFAULT_DB_RETRY_DELAY_MS,
        }
    }
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .field("sslmode", &self.sslmode)
            .field("max_connections", &self.max_connections)
            .field("min_idle", &self.min_idle)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("connect_attempts", &self.connect_attempts)
            .field("retry_delay_ms", &self.retry_delay_ms)
            .finish()
    }
}

impl EnvConfig for DatabaseConfig {
    const PREFIX: &'static str = "DB";
    const TRY_PARSING: bool = false;
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, DatabaseConfig};

    #[test]
    fn defaults_listen_on_8080() {
        let cfg = AppConfig::default();

        assert_eq!(cfg.general.host, "0.0.0.0");
        assert_eq!(cfg.general.port, 8080);
        assert_eq!(cfg.logging.rust_log, "info,tower_http=info");
    }

    #[test]
    fn database_defaults_retry_thirty_times_one_second_apart() {
        let cfg = DatabaseConfig::default();

        assert_eq!(cfg.connect_attempts, 30);
        assert_eq!(cfg.retry_delay().as_secs(), 1);
        assert_eq!(cfg.port, 5432);
        assert_eq!(cfg.sslmode, "disable");
        assert!(cfg.host.is_empty());
    }

    #[test]
    fn debug_output_redacts_password() {
        let cfg = DatabaseConfig {
            password: "hunter2".to_string(),
            ..Default::default()
        };

        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }
}
