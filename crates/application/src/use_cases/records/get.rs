use ledger_dns_domain::{DomainError, Record};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::RecordRepository;

pub struct GetRecordsUseCase {
    repo: Arc<dyn RecordRepository>,
}

impl GetRecordsUseCase {
    pub fn new(repo: Arc<dyn RecordRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<Record>, DomainError> {
        self.repo.get_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<Record, DomainError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or(DomainError::RecordNotFound(id))
    }

    /// Blank filters are treated as absent.
    #[instrument(skip(self))]
    pub async fn find(
        &self,
        name: Option<&str>,
        kind: Option<&str>,
    ) -> Result<Vec<Record>, DomainError> {
        let name = name.map(str::trim).filter(|n| !n.is_empty());
        let kind = kind.map(str::trim).filter(|k| !k.is_empty());

        match (name, kind) {
            (None, None) => self.repo.get_all().await,
            (Some(name), Some(kind)) => self.repo.lookup(name, kind).await,
            (name, kind) => self.repo.find(name, kind).await,
        }
    }
}
