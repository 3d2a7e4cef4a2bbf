use ledger_dns_domain::DomainError;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::RecordRepository;

pub struct DeleteRecordUseCase {
    repo: Arc<dyn RecordRepository>,
}

impl DeleteRecordUseCase {
    pub fn new(repo: Arc<dyn RecordRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, id: i64) -> Result<(), DomainError> {
        self.repo.delete(id).await?;

        info!(record_id = id, "Record deleted successfully");

        Ok(())
    }
}
