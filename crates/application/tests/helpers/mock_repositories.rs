#![allow(dead_code)]

use async_trait::async_trait;
use ledger_dns_application::ports::{MalformedRecordReporter, RecordRepository};
use ledger_dns_domain::{DomainError, NewRecord, Record};
use std::collections::HashSet;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

/// In-memory store that keeps insertion order and never reuses ids.
#[derive(Clone)]
pub struct MockRecordRepository {
    records: Arc<RwLock<Vec<Record>>>,
    next_id: Arc<AtomicI64>,
    failing_names: Arc<RwLock<HashSet<String>>>,
    should_fail: Arc<RwLock<bool>>,
    lookups: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockRecordRepository {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(AtomicI64::new(1)),
            failing_names: Arc::new(RwLock::new(HashSet::new())),
            should_fail: Arc::new(RwLock::new(false)),
            lookups: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_records(records: &[(&str, &str, &str)]) -> Self {
        let repo = Self::new();
        for (name, kind, value) in records {
            repo.add(name, kind, value);
        }
        repo
    }

    pub fn add(&self, name: &str, kind: &str, value: &str) -> i64 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.records
            .write()
            .unwrap()
            .push(Record::new(id, name, kind, value));
        id
    }

    pub fn fail_lookups_for(&self, name: &str) {
        self.failing_names.write().unwrap().insert(name.to_string());
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().unwrap() = should_fail;
    }

    pub fn lookups(&self) -> Vec<(String, String)> {
        self.lookups.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.records.read().unwrap().len()
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if *self.should_fail.read().unwrap() {
            return Err(DomainError::StoreUnavailable(
                "mock store offline".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for MockRecordRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordRepository for MockRecordRepository {
    async fn lookup(&self, name: &str, kind: &str) -> Result<Vec<Record>, DomainError> {
        self.lookups
            .lock()
            .unwrap()
            .push((name.to_string(), kind.to_string()));
        self.check_available()?;

        if self.failing_names.read().unwrap().contains(name) {
            return Err(DomainError::StoreUnavailable(format!(
                "lookup for {} failed",
                name
            )));
        }

        Ok(self
            .records
            .read()
            .unwrap()
            .iter()
            .filter(|r| r.name.as_ref() == name && r.kind.as_ref() == kind)
            .cloned()
            .collect())
    }

    async fn insert(&self, record: &NewRecord) -> Result<i64, DomainError> {
        self.check_available()?;
        Ok(self.add(&record.name, &record.kind, &record.value))
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Record>, DomainError> {
        self.check_available()?;
        Ok(self
            .records
            .read()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn get_all(&self) -> Result<Vec<Record>, DomainError> {
        self.check_available()?;
        Ok(self.records.read().unwrap().clone())
    }

    async fn find(
        &self,
        name: Option<&str>,
        kind: Option<&str>,
    ) -> Result<Vec<Record>, DomainError> {
        self.check_available()?;
        Ok(self
            .records
            .read()
            .unwrap()
            .iter()
            .filter(|r| name.map_or(true, |n| r.name.as_ref() == n))
            .filter(|r| kind.map_or(true, |k| r.kind.as_ref() == k))
            .cloned()
            .collect())
    }

    async fn update(&self, id: i64, record: &NewRecord) -> Result<Record, DomainError> {
        self.check_available()?;
        let mut records = self.records.write().unwrap();
        let existing = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(DomainError::RecordNotFound(id))?;

        *existing = record.clone().into_record(id);
        Ok(existing.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        self.check_available()?;
        let mut records = self.records.write().unwrap();
        let before = records.len();
        records.retain(|r| r.id != id);

        if records.len() == before {
            return Err(DomainError::RecordNotFound(id));
        }
        Ok(())
    }
}

/// Captures every dropped record for assertions.
#[derive(Default)]
pub struct RecordingReporter {
    reports: Mutex<Vec<(Record, DomainError)>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<(Record, DomainError)> {
        self.reports.lock().unwrap().clone()
    }
}

impl MalformedRecordReporter for RecordingReporter {
    fn report(&self, record: &Record, error: &DomainError) {
        self.reports
            .lock()
            .unwrap()
            .push((record.clone(), error.clone()));
    }
}
