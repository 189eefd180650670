//! Database pool setup for Parrot
//!
//! SQLite allows only one writer at a time; the pool uses WAL journal mode
//! with a busy timeout so concurrent request transactions queue instead of
//! failing, and enforces foreign keys on every connection.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// Open (creating if missing) the SQLite database at `database_url` and run
/// the embedded migrations before handing the pool out.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let opts = SqliteConnectOptions::from_str(database_url)?
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(5))
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await?;

    sqlx::migrate!("../../migrations").run(&pool).await?;

    Ok(pool)
}
