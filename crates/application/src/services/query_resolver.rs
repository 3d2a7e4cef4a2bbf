use ledger_dns_domain::{normalize_name, DomainError, Record};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::RecordRepository;

/// Turns a queried `(name, kind)` into the stored records that answer it.
pub struct QueryResolver {
    repo: Arc<dyn RecordRepository>,
}

impl QueryResolver {
    pub fn new(repo: Arc<dyn RecordRepository>) -> Self {
        Self { repo }
    }

    /// Strips one trailing `.` from `queried_name` and looks up exact matches.
    ///
    /// Unknown kinds are passed through and simply match nothing. Any store
    /// failure comes back as [`DomainError::StoreUnavailable`].
    #[instrument(skip(self))]
    pub async fn resolve(
        &self,
        queried_name: &str,
        requested_kind: &str,
    ) -> Result<Vec<Record>, DomainError> {
        let name = normalize_name(queried_name);

        let records = self
            .repo
            .lookup(name, requested_kind)
            .await
            .map_err(|e| match e {
                DomainError::StoreUnavailable(_) => e,
                other => DomainError::StoreUnavailable(other.to_string()),
            })?;

        debug!(name = %name, kind = %requested_kind, matches = records.len(), "Records resolved");

        Ok(records)
    }
}
