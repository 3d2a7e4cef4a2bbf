use ledger_dns_domain::{DomainError, Record};
use std::sync::Arc;
use tracing::{info, instrument};

use super::validated;
use crate::ports::RecordRepository;

pub struct CreateRecordUseCase {
    repo: Arc<dyn RecordRepository>,
}

impl CreateRecordUseCase {
    pub fn new(repo: Arc<dyn RecordRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        name: String,
        kind: String,
        value: String,
    ) -> Result<Record, DomainError> {
        let new_record = validated(name, kind, value)?;

        let id = self.repo.insert(&new_record).await?;

        info!(
            record_id = id,
            name = %new_record.name,
            kind = %new_record.kind,
            "Record created successfully"
        );

        Ok(new_record.into_record(id))
    }
}
