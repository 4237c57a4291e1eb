pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_RUST_LOG: &str = "info,tower_http=info";

pub const DEFAULT_DB_PORT: u16 = 5432;
pub const DEFAULT_DB_SSLMODE: &str = "disable";
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_DB_MIN_IDLE: u32 = 1;
pub const DEFAULT_DB_CONNECT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_DB_CONNECT_ATTEMPTS: u32 = 30;
pub const DEFAULT_DB_RETRY_DELAY_MS: u64 = 1_000;
