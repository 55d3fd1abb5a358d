//! SQLite storage: connection pool setup and schema bootstrap.
//!
//! The pool is created once at startup and injected into the repositories,
//! so tests can hand the same code an in-memory database.

pub mod schema;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::time::Duration;

/// Shared SQLite connection pool.
pub type DbPool = Pool<Sqlite>;

/// Open the database at `database_url`, creating it if needed, and apply the
/// embedded schema.
///
/// In-memory URLs are forced to a single connection: every pooled connection
/// would otherwise open its own empty database.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(5));

    let max_connections = if database_url.contains(":memory:") {
        1
    } else {
        max_connections
    };

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    migrate(&pool).await?;
    Ok(pool)
}

/// Open a private in-memory database. Used by tests and ad-hoc tooling.
pub async fn connect_in_memory() -> Result<DbPool, sqlx::Error> {
    connect("sqlite::memory:", 1).await
}

/// Apply the embedded schema. Safe to run more than once.
pub async fn migrate(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(schema::SCHEMA).execute(pool).await?;
    Ok(())
}
