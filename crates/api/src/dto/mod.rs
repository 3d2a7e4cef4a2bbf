pub mod record;

pub use record::{CreatedRecordResponse, RecordQuery, RecordRequest, RecordResponse};
