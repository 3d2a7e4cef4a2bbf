use ledger_dns_domain::{DomainError, Record};

/// Observer for records dropped from an answer because their value could not
/// be interpreted for their kind. Reporting never changes the reply.
pub trait MalformedRecordReporter: Send + Sync {
    fn report(&self, record: &Record, error: &DomainError);
}

pub struct NullMalformedRecordReporter;

impl MalformedRecordReporter for NullMalformedRecordReporter {
    fn report(&self, _record: &Record, _error: &DomainError) {}
}
