pub mod core;

use std::{error::Error, str::FromStr};

use sqlx::{
    error::ErrorKind,
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions},
};
use tracing::{debug, info};

use crate::{domain::DataAccessError, Database};

pub use self::core::*;

const SCHEMA: [&str; 2] = [
    "CREATE TABLE IF NOT EXISTS venues (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        location TEXT NOT NULL,
        capacity INTEGER NOT NULL,
        price REAL NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS reservations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        venue_id INTEGER,
        customer_name TEXT,
        reservation_date TEXT,
        FOREIGN KEY (venue_id) REFERENCES venues(id)
    )",
];

impl From<sqlx::Error> for DataAccessError {
    fn from(value: sqlx::Error) -> Self {
        let kind: fn(Box<dyn Error + Send + Sync>) -> Self = match &value {
            sqlx::Error::Configuration(_)
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => Self::ConnectionError,
            sqlx::Error::Database(e) => match e.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => Self::WriteError,
                _ => Self::QueryError,
            },
            sqlx::Error::Protocol(_) => Self::QueryError,
            sqlx::Error::RowNotFound
            | sqlx::Error::TypeNotFound { .. }
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::Decode(_) => Self::ReadError,
            sqlx::Error::Encode(_) => Self::WriteError,
            _ => Self::ClientSideError,
        };
        kind(Box::new(value))
    }
}

/// 会場と予約の2テーブルを持つSQLiteストレージ
#[derive(Clone, Debug)]
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    /// 接続してテーブルを作成する
    pub async fn connect(config: &Database) -> Result<Self, DataAccessError> {
        let options = SqliteConnectOptions::from_str(&config.url)?
            .create_if_missing(true)
            .foreign_keys(config.foreign_keys);
        // インメモリDBは接続が閉じると消えるため、1本を保持し続ける
        let pool_options = if config.is_memory() {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(config.max_connections)
        };
        let pool = pool_options.connect_with(options).await?;
        let storage = Self { pool };
        storage.initialize().await?;
        info!(url = %config.url, foreign_keys = config.foreign_keys, "ストレージを初期化しました");
        Ok(storage)
    }

    /// 既定設定のインメモリストレージ
    pub async fn in_memory() -> Result<Self, DataAccessError> {
        Self::connect(&Database::default()).await
    }

    pub fn venues(&self) -> SqliteVenueRepository {
        SqliteVenueRepository::new(self.pool.clone())
    }

    pub fn reservations(&self) -> SqliteReservationRepository {
        SqliteReservationRepository::new(self.pool.clone())
    }

    async fn initialize(&self) -> Result<(), DataAccessError> {
        for statement in SCHEMA {
            debug!(statement, "スキーマを適用");
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }
}
