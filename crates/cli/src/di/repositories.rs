use ledger_dns_infrastructure::repositories::SqliteRecordRepository;
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub record: Arc<SqliteRecordRepository>,
}

impl Repositories {
    pub fn new(write_pool: SqlitePool, read_pool: SqlitePool) -> Self {
        Self {
            record: Arc::new(SqliteRecordRepository::new(write_pool, read_pool)),
        }
    }
}
