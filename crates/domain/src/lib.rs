//! Ledger DNS Domain Layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod dns_reply;
pub mod errors;

pub use config::{CliOverrides, Config, ConfigError, ResponsePolicy};
pub use dns_query::{DnsQuery, Question};
pub use dns_record::{normalize_name, NewRecord, Record, RecordKind};
pub use dns_reply::{AnswerData, AnswerEntry, DnsClass, Reply};
pub use errors::DomainError;
