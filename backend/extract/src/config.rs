use std::path::PathBuf;

use chrono::Utc;
use tracing::info;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 6379;
pub const DEFAULT_DB: i64 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db: i64,
    pub output: PathBuf,
}

impl Config {
    /// Unset flags take the defaults. Values are left for the Redis client to validate.
    pub fn load(
        host: Option<String>,
        port: Option<u16>,
        db: Option<i64>,
        output: Option<PathBuf>,
    ) -> Self {
        let config = Self {
            host: host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: port.unwrap_or(DEFAULT_PORT),
            db: db.unwrap_or(DEFAULT_DB),
            output: output.unwrap_or_else(default_output),
        };

        info!(
            "Exporting db {} on {}:{} to {}",
            config.db,
            config.host,
            config.port,
            config.output.display()
        );

        config
    }

    pub fn redis_url(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("redis://[{}]:{}/{}", self.host, self.port, self.db)
        } else {
            format!("redis://{}:{}/{}", self.host, self.port, self.db)
        }
    }
}

/// `users.<unix seconds>.json` in the working directory.
pub fn default_output() -> PathBuf {
    PathBuf::from(format!("users.{}.json", Utc::now().timestamp()))
}
