use std::sync::Arc;

/// One `(queried name, requested kind)` pair from an inbound message.
///
/// `name` is kept exactly as the requester sent it (trailing dot included);
/// `kind` is the protocol's symbolic type name such as `"A"` or `"TXT"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: Arc<str>,
    pub kind: Arc<str>,
}

impl Question {
    pub fn new(name: impl Into<Arc<str>>, kind: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DnsQuery {
    pub questions: Vec<Question>,
}

impl DnsQuery {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn single(name: impl Into<Arc<str>>, kind: impl Into<Arc<str>>) -> Self {
        Self {
            questions: vec![Question::new(name, kind)],
        }
    }
}
