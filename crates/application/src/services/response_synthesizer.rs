use ledger_dns_domain::{
    AnswerData, AnswerEntry, DnsClass, DomainError, Record, RecordKind, ResponsePolicy,
};
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::{debug, trace};

use crate::ports::{MalformedRecordReporter, NullMalformedRecordReporter};

/// Builds the rdata of one answer from a stored record.
pub type AnswerBuilder = fn(&Record) -> Result<AnswerData, DomainError>;

/// Maps stored records onto answer entries through a kind → builder table.
pub struct ResponseSynthesizer {
    policy: ResponsePolicy,
    builders: HashMap<RecordKind, AnswerBuilder>,
    reporter: Arc<dyn MalformedRecordReporter>,
}

impl ResponseSynthesizer {
    pub fn new(policy: ResponsePolicy, reporter: Arc<dyn MalformedRecordReporter>) -> Self {
        let mut builders: HashMap<RecordKind, AnswerBuilder> = HashMap::new();
        builders.insert(RecordKind::A, build_address);
        builders.insert(RecordKind::TXT, build_text);

        Self {
            policy,
            builders,
            reporter,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(
            ResponsePolicy::default(),
            Arc::new(NullMalformedRecordReporter),
        )
    }

    /// Registers or replaces the builder for `kind`.
    pub fn with_builder(mut self, kind: RecordKind, builder: AnswerBuilder) -> Self {
        self.builders.insert(kind, builder);
        self
    }

    pub fn policy(&self) -> ResponsePolicy {
        self.policy
    }

    pub fn supports(&self, kind: RecordKind) -> bool {
        self.builders.contains_key(&kind)
    }

    /// One entry per usable record, in input order, named with the question's
    /// original spelling.
    ///
    /// Records of kinds without a builder, or of a different kind than the
    /// one requested, are skipped. Records whose value fails to build are
    /// skipped and handed to the reporter.
    pub fn synthesize(
        &self,
        original_name: &str,
        requested_kind: &str,
        records: &[Record],
    ) -> Vec<AnswerEntry> {
        let Some(requested) = RecordKind::from_tag(requested_kind) else {
            trace!(kind = %requested_kind, "Unsupported requested kind, no answers");
            return Vec::new();
        };

        let name: Arc<str> = Arc::from(original_name);
        let mut answers = Vec::with_capacity(records.len());

        for record in records {
            let Some(kind) = RecordKind::from_tag(&record.kind) else {
                trace!(id = record.id, kind = %record.kind, "Skipping record of unsupported kind");
                continue;
            };

            if kind != requested {
                debug!(
                    id = record.id,
                    kind = %kind,
                    requested = %requested,
                    "Skipping record whose kind differs from the question"
                );
                continue;
            }

            let Some(builder) = self.builders.get(&kind) else {
                continue;
            };

            match builder(record) {
                Ok(data) => answers.push(AnswerEntry {
                    name: Arc::clone(&name),
                    type_code: requested.to_u16(),
                    class: DnsClass::IN,
                    ttl: self.policy.answer_ttl,
                    data,
                }),
                Err(e) => self.reporter.report(record, &e),
            }
        }

        answers
    }
}

fn build_address(record: &Record) -> Result<AnswerData, DomainError> {
    record
        .value
        .trim()
        .parse::<Ipv4Addr>()
        .map(AnswerData::Address)
        .map_err(|_| DomainError::MalformedRecordValue {
            kind: record.kind.to_string(),
            value: record.value.to_string(),
        })
}

fn build_text(record: &Record) -> Result<AnswerData, DomainError> {
    Ok(AnswerData::Text(vec![Arc::clone(&record.value)]))
}
