use ledger_dns_application::ports::MalformedRecordReporter;
use ledger_dns_domain::{DomainError, Record};
use tracing::warn;

/// Logs records that could not be turned into answers so an operator can fix
/// them through the management API.
pub struct TracingMalformedRecordReporter;

impl MalformedRecordReporter for TracingMalformedRecordReporter {
    fn report(&self, record: &Record, error: &DomainError) {
        warn!(
            record_id = record.id,
            name = %record.name,
            kind = %record.kind,
            value = %record.value,
            error = %error,
            "Dropping malformed record from answer"
        );
    }
}
