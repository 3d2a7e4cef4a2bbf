use std::fmt;
use std::str::FromStr;

/// Record kinds the responder knows how to turn into answers.
///
/// The store itself accepts any kind tag; anything that does not parse into
/// one of these variants is simply never answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    A,
    TXT,
}

impl RecordKind {
    pub const ALL: [RecordKind; 2] = [RecordKind::A, RecordKind::TXT];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::A => "A",
            RecordKind::TXT => "TXT",
        }
    }

    /// Wire type code.
    pub fn to_u16(&self) -> u16 {
        match self {
            RecordKind::A => 1,
            RecordKind::TXT => 16,
        }
    }

    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            1 => Some(RecordKind::A),
            16 => Some(RecordKind::TXT),
            _ => None,
        }
    }

    /// Exact, case-sensitive match on the symbolic name.
    ///
    /// Stored tags are compared verbatim by the store, so a lowercase `"a"`
    /// is deliberately not the same kind as `"A"`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "A" => Some(RecordKind::A),
            "TXT" => Some(RecordKind::TXT),
            _ => None,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| format!("Unsupported record kind: {}", s))
    }
}
