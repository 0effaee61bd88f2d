use super::RecordType;
use std::fmt;

/// A single store-level fact derived from a parsed record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Association {
    /// `value` is a member of the set keyed by `(record_type, domain)`.
    Member {
        record_type: RecordType,
        domain: String,
        value: String,
    },

    /// `alias` resolves to `target` via CNAME.
    Alias { alias: String, target: String },
}

impl Association {
    pub fn member(
        record_type: RecordType,
        domain: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Association::Member {
            record_type,
            domain: domain.into(),
            value: value.into(),
        }
    }

    pub fn alias(alias: impl Into<String>, target: impl Into<String>) -> Self {
        Association::Alias {
            alias: alias.into(),
            target: target.into(),
        }
    }

    pub fn record_type(&self) -> RecordType {
        match self {
            Association::Member { record_type, .. } => *record_type,
            Association::Alias { .. } => RecordType::CNAME,
        }
    }
}

impl fmt::Display for Association {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Association::Member {
                record_type,
                domain,
                value,
            } => write!(f, "{} {} {}", record_type, domain, value),
            Association::Alias { alias, target } => write!(f, "CNAME {} -> {}", alias, target),
        }
    }
}
