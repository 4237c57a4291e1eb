use anyhow::{Result, bail};

use super::AppConfig;

pub fn validate(cfg: &AppConfig) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    if cfg.general.host.trim().is_empty() {
        errors.push("general.host must not be empty".to_string());
    }

    let database = &cfg.database;
    if database.connect_attempts == 0 {
        errors.push("DB_CONNECT_ATTEMPTS must be > 0".to_string());
    }

    if database.max_connections == 0 {
        errors.push("DB_MAX_CONNECTIONS must be > 0".to_string());
    }

    if database.min_idle > database.max_connections {
        errors.push(format!(
            "DB_MIN_IDLE ({}) must be <= DB_MAX_CONNECTIONS ({})",
            database.min_idle, database.max_connections
        ));
    }

    if errors.is_empty() {
        return Ok(());
    }

    bail!("invalid app config:\n- {}", errors.join("\n- "))
}
