use async_trait::async_trait;
use ledger_dns_domain::{DomainError, NewRecord, Record};

/// Keyed record store.
///
/// Implementations must be safe for concurrent reads: the resolution path
/// shares one instance across every in-flight query without extra locking.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Exact match on `(name, kind)`, in the store's natural order.
    async fn lookup(&self, name: &str, kind: &str) -> Result<Vec<Record>, DomainError>;

    async fn insert(&self, record: &NewRecord) -> Result<i64, DomainError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<Record>, DomainError>;

    async fn get_all(&self) -> Result<Vec<Record>, DomainError>;

    /// Filter on whichever columns are given; `(None, None)` returns everything.
    async fn find(
        &self,
        name: Option<&str>,
        kind: Option<&str>,
    ) -> Result<Vec<Record>, DomainError>;

    /// Full replace of name, kind and value.
    async fn update(&self, id: i64, record: &NewRecord) -> Result<Record, DomainError>;

    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}
