mod create;
mod delete;
mod get;
mod update;

pub use create::CreateRecordUseCase;
pub use delete::DeleteRecordUseCase;
pub use get::GetRecordsUseCase;
pub use update::UpdateRecordUseCase;

use ledger_dns_domain::{DomainError, NewRecord};

fn validated(name: String, kind: String, value: String) -> Result<NewRecord, DomainError> {
    NewRecord::validate_name(&name).map_err(DomainError::InvalidRecord)?;
    NewRecord::validate_kind(kind.trim()).map_err(DomainError::InvalidRecord)?;

    Ok(NewRecord::new(name, kind, value).normalized())
}
