use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Record store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Malformed {kind} record value: {value:?}")]
    MalformedRecordValue { kind: String, value: String },

    #[error("Failed to send DNS response: {0}")]
    TransportSendFailure(String),

    #[error("Record not found: {0}")]
    RecordNotFound(i64),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Query timeout")]
    QueryTimeout,
}
