#![allow(dead_code)]

use ledger_dns_domain::config::DatabaseConfig;
use ledger_dns_infrastructure::database::{create_read_pool, create_write_pool, run_migrations};
use ledger_dns_infrastructure::repositories::SqliteRecordRepository;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use tempfile::TempDir;

/// Single-connection in-memory database with the schema applied.
pub async fn create_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    run_migrations(&pool).await.unwrap();

    pool
}

pub async fn memory_repository() -> SqliteRecordRepository {
    let pool = create_test_db().await;
    SqliteRecordRepository::new(pool.clone(), pool)
}

/// File-backed database opened through the production pool constructors.
/// The returned directory must outlive the pools.
pub async fn file_repository() -> (SqliteRecordRepository, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let cfg = DatabaseConfig {
        path: dir.path().join("records.db").to_string_lossy().into_owned(),
        ..DatabaseConfig::default()
    };

    let write_pool = create_write_pool(&cfg.url(), &cfg).await.unwrap();
    let read_pool = create_read_pool(&cfg.url(), &cfg).await.unwrap();

    (SqliteRecordRepository::new(write_pool, read_pool), dir)
}
