use super::RecordType;
use std::sync::Arc;

/// Lower-cases a domain name and strips the root label's trailing dot.
///
/// Applied on both the write path and the query path so that the two agree
/// on store keys.
pub fn normalize_name(name: &str) -> String {
    name.trim_end_matches('.').to_ascii_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: Arc<str>,
    pub record_type: RecordType,
}

impl Question {
    pub fn new(name: &str, record_type: RecordType) -> Self {
        Self {
            name: normalize_name(name).into(),
            record_type,
        }
    }
}
