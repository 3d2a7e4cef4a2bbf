use ledger_dns_domain::config::DatabaseConfig;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

fn connect_options(
    database_url: &str,
    cfg: &DatabaseConfig,
) -> Result<SqliteConnectOptions, sqlx::Error> {
    Ok(SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(cfg.busy_timeout_secs)))
}

/// Pool used by the management API for inserts, updates and deletes.
///
/// Opening it also brings the schema up to date, so it must be created
/// before the read pool.
pub async fn create_write_pool(
    database_url: &str,
    cfg: &DatabaseConfig,
) -> Result<SqlitePool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(cfg.write_pool_max_connections)
        .connect_with(connect_options(database_url, cfg)?)
        .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

/// Pool shared by DNS lookups and API reads.
pub async fn create_read_pool(
    database_url: &str,
    cfg: &DatabaseConfig,
) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(cfg.read_pool_max_connections)
        .connect_with(connect_options(database_url, cfg)?)
        .await
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    MIGRATOR.run(pool).await?;
    info!("Database schema is up to date");
    Ok(())
}
