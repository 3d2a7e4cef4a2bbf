#![allow(dead_code)]
use ledger_dns_domain::{NewRecord, Record};

pub struct RecordBuilder {
    id: i64,
    name: String,
    kind: String,
    value: String,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            name: "example.com".to_string(),
            kind: "A".to_string(),
            value: "192.0.2.1".to_string(),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn kind(mut self, kind: &str) -> Self {
        self.kind = kind.to_string();
        self
    }

    pub fn value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn build(self) -> Record {
        Record::new(self.id, self.name, self.kind, self.value)
    }

    pub fn build_new(self) -> NewRecord {
        NewRecord::new(self.name, self.kind, self.value)
    }
}
