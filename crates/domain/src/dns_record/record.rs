use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A stored `(name, kind, value)` fact.
///
/// `kind` is kept as the raw tag the administrator wrote. It only becomes a
/// [`super::RecordKind`] when an answer is synthesized from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub name: Arc<str>,
    pub kind: Arc<str>,
    pub value: Arc<str>,
}

impl Record {
    pub fn new(
        id: i64,
        name: impl Into<Arc<str>>,
        kind: impl Into<Arc<str>>,
        value: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            kind: kind.into(),
            value: value.into(),
        }
    }
}

/// Record contents before the store assigns an identity. Used for both
/// insert and full-replace update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    pub name: Arc<str>,
    pub kind: Arc<str>,
    pub value: Arc<str>,
}

impl NewRecord {
    pub fn new(
        name: impl Into<Arc<str>>,
        kind: impl Into<Arc<str>>,
        value: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            value: value.into(),
        }
    }

    pub fn validate_name(name: &str) -> Result<(), String> {
        if name.trim().is_empty() {
            return Err("Record name cannot be empty".to_string());
        }
        if name.len() > 253 {
            return Err("Record name cannot exceed 253 characters".to_string());
        }
        Ok(())
    }

    pub fn validate_kind(kind: &str) -> Result<(), String> {
        if kind.trim().is_empty() {
            return Err("Record type cannot be empty".to_string());
        }
        if !kind.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(format!("Invalid record type '{}'", kind));
        }
        Ok(())
    }

    /// Normalized copy suitable for persisting: trimmed name without the
    /// trailing dot, upper-cased kind tag. The value is stored untouched.
    pub fn normalized(&self) -> Self {
        Self {
            name: Arc::from(normalize_name(self.name.trim())),
            kind: Arc::from(self.kind.trim().to_ascii_uppercase()),
            value: self.value.clone(),
        }
    }

    pub fn into_record(self, id: i64) -> Record {
        Record {
            id,
            name: self.name,
            kind: self.kind,
            value: self.value,
        }
    }
}

/// Strips at most one trailing `.` from a queried name.
pub fn normalize_name(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}
