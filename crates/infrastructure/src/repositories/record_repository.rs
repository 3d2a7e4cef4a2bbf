use async_trait::async_trait;
use ledger_dns_application::ports::RecordRepository;
use ledger_dns_domain::{DomainError, NewRecord, Record};
use sqlx::SqlitePool;
use tracing::{debug, error, instrument};

type RecordRow = (i64, String, String, String);

/// SQLite-backed record store.
///
/// Reads and writes go through separate pools so that API writes never
/// starve the resolution path of connections.
pub struct SqliteRecordRepository {
    write_pool: SqlitePool,
    read_pool: SqlitePool,
}

impl SqliteRecordRepository {
    pub fn new(write_pool: SqlitePool, read_pool: SqlitePool) -> Self {
        Self {
            write_pool,
            read_pool,
        }
    }

    fn row_to_record(row: RecordRow) -> Record {
        let (id, name, kind, value) = row;
        Record::new(id, name, kind, value)
    }
}

fn store_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> DomainError {
    move |e| {
        error!(error = %e, "{}", context);
        DomainError::StoreUnavailable(e.to_string())
    }
}

#[async_trait]
impl RecordRepository for SqliteRecordRepository {
    #[instrument(skip(self))]
    async fn lookup(&self, name: &str, kind: &str) -> Result<Vec<Record>, DomainError> {
        let rows = sqlx::query_as::<_, RecordRow>(
            "SELECT id, name, type, value FROM records
             WHERE name = ? AND type = ?
             ORDER BY id",
        )
        .bind(name)
        .bind(kind)
        .fetch_all(&self.read_pool)
        .await
        .map_err(store_error("Failed to look up records"))?;

        debug!(matches = rows.len(), "Lookup finished");

        Ok(rows.into_iter().map(Self::row_to_record).collect())
    }

    #[instrument(skip(self))]
    async fn insert(&self, record: &NewRecord) -> Result<i64, DomainError> {
        let (id,) = sqlx::query_as::<_, (i64,)>(
            "INSERT INTO records (name, type, value) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(record.name.as_ref())
        .bind(record.kind.as_ref())
        .bind(record.value.as_ref())
        .fetch_one(&self.write_pool)
        .await
        .map_err(store_error("Failed to insert record"))?;

        Ok(id)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> Result<Option<Record>, DomainError> {
        let row = sqlx::query_as::<_, RecordRow>(
            "SELECT id, name, type, value FROM records WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.read_pool)
        .await
        .map_err(store_error("Failed to query record by id"))?;

        Ok(row.map(Self::row_to_record))
    }

    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<Record>, DomainError> {
        let rows = sqlx::query_as::<_, RecordRow>(
            "SELECT id, name, type, value FROM records ORDER BY id",
        )
        .fetch_all(&self.read_pool)
        .await
        .map_err(store_error("Failed to list records"))?;

        Ok(rows.into_iter().map(Self::row_to_record).collect())
    }

    #[instrument(skip(self))]
    async fn find(
        &self,
        name: Option<&str>,
        kind: Option<&str>,
    ) -> Result<Vec<Record>, DomainError> {
        let rows = sqlx::query_as::<_, RecordRow>(
            "SELECT id, name, type, value FROM records
             WHERE (?1 IS NULL OR name = ?1) AND (?2 IS NULL OR type = ?2)
             ORDER BY id",
        )
        .bind(name)
        .bind(kind)
        .fetch_all(&self.read_pool)
        .await
        .map_err(store_error("Failed to filter records"))?;

        Ok(rows.into_iter().map(Self::row_to_record).collect())
    }

    #[instrument(skip(self))]
    async fn update(&self, id: i64, record: &NewRecord) -> Result<Record, DomainError> {
        let row = sqlx::query_as::<_, RecordRow>(
            "UPDATE records SET name = ?, type = ?, value = ? WHERE id = ?
             RETURNING id, name, type, value",
        )
        .bind(record.name.as_ref())
        .bind(record.kind.as_ref())
        .bind(record.value.as_ref())
        .bind(id)
        .fetch_optional(&self.write_pool)
        .await
        .map_err(store_error("Failed to update record"))?;

        row.map(Self::row_to_record)
            .ok_or(DomainError::RecordNotFound(id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM records WHERE id = ?")
            .bind(id)
            .execute(&self.write_pool)
            .await
            .map_err(store_error("Failed to delete record"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::RecordNotFound(id));
        }

        Ok(())
    }
}
