//! Grammar for the administrative record syntax.
//!
//! A command line such as
//!
//! ```text
//! A example.com 1.2.3.4 1.2.3.5 CNAME example.com www.example.com
//! ```
//!
//! is a sequence of blocks with no delimiter other than the type keywords
//! themselves. Keywords are sparse, so the list is walked from the tail: the
//! arguments of a block are everything after its keyword up to the start of
//! the block that follows it.

use crate::record::{Record, RecordType};

/// Splits a flat token list into records, in input order.
///
/// Tokens before the first recognised keyword do not belong to any block and
/// are dropped without error.
pub fn parse_records<S: AsRef<str>>(tokens: &[S]) -> Vec<Record> {
    let mut records = Vec::new();
    let mut end = tokens.len();

    while end > 0 {
        let keyword = tokens[..end]
            .iter()
            .enumerate()
            .rev()
            .find_map(|(i, token)| RecordType::from_keyword(token.as_ref()).map(|rt| (i, rt)));

        let Some((start, record_type)) = keyword else {
            break;
        };

        let args = tokens[start + 1..end]
            .iter()
            .map(|token| token.as_ref().to_string())
            .collect();
        records.push(Record::new(record_type, args));
        end = start;
    }

    records.reverse();
    records
}
