use ledger_dns_domain::{DnsQuery, DomainError, Reply};
use std::sync::Arc;
use tracing::{debug, error, instrument, warn};

use crate::services::{QueryResolver, ResponseSynthesizer};

/// Answers one inbound query from the record store.
///
/// Questions are handled strictly in order; each contributes its entries to
/// the answer section before the next one starts. A store failure only drops
/// the failing question's contribution.
pub struct HandleDnsQueryUseCase {
    resolver: Arc<QueryResolver>,
    synthesizer: Arc<ResponseSynthesizer>,
}

impl HandleDnsQueryUseCase {
    pub fn new(resolver: Arc<QueryResolver>, synthesizer: Arc<ResponseSynthesizer>) -> Self {
        Self {
            resolver,
            synthesizer,
        }
    }

    #[instrument(skip(self, query), fields(questions = query.questions.len()))]
    pub async fn execute(&self, query: &DnsQuery) -> Reply {
        let mut reply = Reply::default();

        for (index, question) in query.questions.iter().enumerate() {
            let records = match self.resolver.resolve(&question.name, &question.kind).await {
                Ok(records) => records,
                Err(DomainError::StoreUnavailable(reason)) => {
                    warn!(
                        question = index,
                        name = %question.name,
                        kind = %question.kind,
                        reason = %reason,
                        "Record store unavailable, skipping question"
                    );
                    continue;
                }
                Err(e) => {
                    error!(question = index, error = %e, "Unexpected resolution failure");
                    continue;
                }
            };

            let entries = self
                .synthesizer
                .synthesize(&question.name, &question.kind, &records);

            debug!(
                question = index,
                name = %question.name,
                kind = %question.kind,
                records = records.len(),
                answers = entries.len(),
                "Question answered"
            );

            reply.answers.extend(entries);
        }

        reply.authoritative = self.synthesizer.policy().authoritative;
        reply
    }
}
