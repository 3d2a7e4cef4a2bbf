use std::net::Ipv4Addr;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DnsClass {
    IN,
}

impl DnsClass {
    pub fn to_u16(&self) -> u16 {
        match self {
            DnsClass::IN => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerData {
    Address(Ipv4Addr),
    Text(Vec<Arc<str>>),
}

/// A single resource record in the reply's answer section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerEntry {
    pub name: Arc<str>,
    pub type_code: u16,
    pub class: DnsClass,
    pub ttl: u32,
    pub data: AnswerData,
}

impl AnswerEntry {
    pub fn address(&self) -> Option<Ipv4Addr> {
        match self.data {
            AnswerData::Address(addr) => Some(addr),
            AnswerData::Text(_) => None,
        }
    }

    pub fn text(&self) -> Option<&[Arc<str>]> {
        match &self.data {
            AnswerData::Text(segments) => Some(segments),
            AnswerData::Address(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    pub authoritative: bool,
    pub answers: Vec<AnswerEntry>,
}

impl Reply {
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}
