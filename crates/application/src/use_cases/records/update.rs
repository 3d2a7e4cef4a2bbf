use ledger_dns_domain::{DomainError, Record};
use std::sync::Arc;
use tracing::{info, instrument};

use super::validated;
use crate::ports::RecordRepository;

pub struct UpdateRecordUseCase {
    repo: Arc<dyn RecordRepository>,
}

impl UpdateRecordUseCase {
    pub fn new(repo: Arc<dyn RecordRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        id: i64,
        name: String,
        kind: String,
        value: String,
    ) -> Result<Record, DomainError> {
        let replacement = validated(name, kind, value)?;

        let updated = self.repo.update(id, &replacement).await?;

        info!(
            record_id = id,
            name = %updated.name,
            kind = %updated.kind,
            "Record updated successfully"
        );

        Ok(updated)
    }
}
