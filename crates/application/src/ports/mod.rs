mod malformed_record_reporter;
mod record_repository;

pub use malformed_record_reporter::{MalformedRecordReporter, NullMalformedRecordReporter};
pub use record_repository::RecordRepository;
