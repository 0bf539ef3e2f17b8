//! Database Layer
//!
//! - [`models`]: stored records
//! - [`repository`]: the CRUD contract and its backends
//!
//! SQLite pools are opened here and migrated from `migrations/`.

pub mod models;
pub mod repository;

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

/// Open a SQLite pool for `url` (e.g. `sqlite://employees.db?mode=rwc`)
pub async fn connect(url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await
}

/// Single-connection in-memory database that lives as long as the pool
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
}

/// Apply pending migrations
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
