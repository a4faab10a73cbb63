use config::{Config, ConfigError};
use serde::Deserialize;

pub mod application;
pub mod domain;
pub mod infrastructure;

#[derive(Clone, Debug, Deserialize)]
pub struct VenueConfig {
    pub server: Server,
    pub database: Database,
    pub logger: Logger,
}

impl VenueConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.address", "0.0.0.0:3000")?
            .set_default("database.url", "sqlite::memory:")?
            .set_default("database.foreign_keys", false)?
            .set_default("database.max_connections", 5_i64)?
            .set_default("logger.level", "INFO")?
            .add_source(config::File::with_name("venue").required(false))
            .add_source(
                config::Environment::with_prefix("VENUE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize::<VenueConfig>()
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Server {
    pub address: String,
    pub tls: Option<Tls>,
}

/// PEM形式の証明書と秘密鍵
#[derive(Clone, Debug, Deserialize)]
pub struct Tls {
    pub cert: String,
    pub key: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Database {
    pub url: String,
    /// 予約の会場IDを外部キーとして検証するか
    pub foreign_keys: bool,
    pub max_connections: u32,
}

impl Database {
    /// 接続ごとに別のデータベースになるインメモリURLか
    pub fn is_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

impl Default for Database {
    fn default() -> Self {
        Self {
            url: "sqlite::memory:".to_owned(),
            foreign_keys: false,
            max_connections: 5,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Logger {
    pub level: Level,
}

#[derive(Clone, Debug, Deserialize)]
pub enum Level {
    TRACE,
    DEBUG,
    INFO,
    WARN,
    ERROR,
}

impl From<&Level> for tracing::Level {
    fn from(value: &Level) -> Self {
        match value {
            Level::TRACE => tracing::Level::TRACE,
            Level::DEBUG => tracing::Level::DEBUG,
            Level::INFO => tracing::Level::INFO,
            Level::WARN => tracing::Level::WARN,
            Level::ERROR => tracing::Level::ERROR,
        }
    }
}
