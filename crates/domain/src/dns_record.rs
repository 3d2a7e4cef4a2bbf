mod record;
mod record_kind;

pub use record::{normalize_name, NewRecord, Record};
pub use record_kind::RecordKind;
