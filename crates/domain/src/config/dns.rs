use serde::{Deserialize, Serialize};

/// TTL stamped on every answer. The store has no per-record TTL.
pub const DEFAULT_ANSWER_TTL: u32 = 3600;

/// The responder never defers to another server for names it is asked about.
pub const AUTHORITATIVE: bool = true;

/// Largest TTL a resource record may carry on the wire.
pub const MAX_ANSWER_TTL: u32 = i32::MAX as u32;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    #[serde(default = "default_answer_ttl")]
    pub answer_ttl: u32,

    #[serde(default = "default_authoritative")]
    pub authoritative: bool,

    /// Deadline for one inbound query, enforced by the transport.
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            answer_ttl: default_answer_ttl(),
            authoritative: default_authoritative(),
            query_timeout_ms: default_query_timeout_ms(),
        }
    }
}

impl DnsConfig {
    pub fn response_policy(&self) -> ResponsePolicy {
        ResponsePolicy {
            answer_ttl: self.answer_ttl,
            authoritative: self.authoritative,
        }
    }
}

/// Header policy applied to every reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponsePolicy {
    pub answer_ttl: u32,
    pub authoritative: bool,
}

impl Default for ResponsePolicy {
    fn default() -> Self {
        Self {
            answer_ttl: DEFAULT_ANSWER_TTL,
            authoritative: AUTHORITATIVE,
        }
    }
}

fn default_answer_ttl() -> u32 {
    DEFAULT_ANSWER_TTL
}

fn default_authoritative() -> bool {
    AUTHORITATIVE
}

fn default_query_timeout_ms() -> u64 {
    5000
}
