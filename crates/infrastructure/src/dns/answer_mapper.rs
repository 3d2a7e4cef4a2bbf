//! Conversion between wire messages and the domain's query/reply types.

use hickory_proto::op::Query;
use hickory_proto::rr::rdata::{A, TXT};
use hickory_proto::rr::{DNSClass, Name, RData, Record};
use ledger_dns_domain::{AnswerData, AnswerEntry, DnsClass, DnsQuery, DomainError, Question};
use std::str::FromStr;

/// Longest character-string a TXT segment can carry on the wire.
pub const MAX_TXT_SEGMENT: usize = 255;

pub struct AnswerMapper;

impl AnswerMapper {
    /// Builds the domain query from the message's question section, keeping
    /// each name exactly as sent (fully qualified names keep their dot).
    pub fn to_query<'a>(queries: impl IntoIterator<Item = &'a Query>) -> DnsQuery {
        DnsQuery::new(
            queries
                .into_iter()
                .map(|q| Question::new(q.name().to_string(), q.query_type().to_string()))
                .collect(),
        )
    }

    pub fn to_hickory(entry: &AnswerEntry) -> Result<Record, DomainError> {
        let name = Name::from_str(&entry.name)
            .map_err(|e| DomainError::InvalidDomainName(format!("{}: {}", entry.name, e)))?;

        let rdata = match &entry.data {
            AnswerData::Address(addr) => RData::A(A(*addr)),
            AnswerData::Text(segments) => RData::TXT(TXT::new(
                segments
                    .iter()
                    .flat_map(|segment| split_segment(segment))
                    .collect(),
            )),
        };

        let mut record = Record::from_rdata(name, entry.ttl, rdata);
        record.set_dns_class(match entry.class {
            DnsClass::IN => DNSClass::IN,
        });

        Ok(record)
    }
}

/// Splits a text value into wire-sized pieces without breaking a UTF-8
/// sequence. Empty input stays a single empty segment.
pub fn split_segment(value: &str) -> Vec<String> {
    if value.len() <= MAX_TXT_SEGMENT {
        return vec![value.to_string()];
    }

    let mut chunks = Vec::new();
    let mut rest = value;

    while !rest.is_empty() {
        let mut end = rest.len().min(MAX_TXT_SEGMENT);
        while !rest.is_char_boundary(end) {
            end -= 1;
        }
        let (head, tail) = rest.split_at(end);
        chunks.push(head.to_string());
        rest = tail;
    }

    chunks
}
