use ledger_dns_domain::Record;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordResponse {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

impl RecordResponse {
    pub fn from_record(r: Record) -> Self {
        Self {
            id: r.id,
            name: r.name.to_string(),
            kind: r.kind.to_string(),
            value: r.value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedRecordResponse {
    pub id: i64,
}

/// Body of both create and full-replace update. Missing fields deserialize
/// as empty so they surface as validation errors rather than body rejections.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RecordRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordQuery {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}
