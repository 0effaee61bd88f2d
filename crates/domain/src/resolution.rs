//! The alias-chasing lookup shared by every record store.
//!
//! Stores that can run it inside a single consistent snapshot (a read lock,
//! a server-side script) get an atomic lookup: an alias rewrite is seen
//! either fully before or fully after.

use crate::answer::Answer;
use crate::question::Question;
use crate::record::{RecordClass, RecordType};
use std::collections::HashSet;
use std::net::IpAddr;

/// Read access to one consistent snapshot of the stored associations.
pub trait AssociationView {
    /// Members of the set keyed by `(record_type, owner)`.
    fn members(&self, record_type: RecordType, owner: &str) -> Vec<String>;

    /// CNAME target of `owner`, if any.
    fn alias(&self, owner: &str) -> Option<String>;
}

/// Resolves `question` against `view`, following at most `max_depth` aliases.
///
/// Direct answers for the current owner win over its alias. Each followed
/// alias contributes a CNAME answer ahead of whatever its target yields. An
/// owner is never visited twice, so alias cycles end early.
pub fn chase<V: AssociationView + ?Sized>(
    view: &V,
    question: &Question,
    max_depth: usize,
) -> Vec<Answer> {
    let record_type = question.record_type;
    let mut answers = Vec::new();
    let mut visited = HashSet::new();
    let mut owner = question.name.to_string();
    let mut depth = 0;

    loop {
        if !record_type.is_alias() {
            let direct: Vec<Answer> = view
                .members(record_type, &owner)
                .iter()
                .filter_map(|value| stored_answer(record_type, &owner, value))
                .collect();
            if !direct.is_empty() {
                answers.extend(direct);
                return answers;
            }
        }

        if depth >= max_depth || !visited.insert(owner.clone()) {
            return answers;
        }

        let Some(target) = view.alias(&owner) else {
            return answers;
        };
        answers.push(Answer::cname(owner.as_str(), target.as_str()));

        if record_type.is_alias() {
            return answers;
        }
        owner = target;
        depth += 1;
    }
}

/// Builds the answer for one stored value.
///
/// Address values that do not parse as an address of the type's family are
/// skipped.
pub fn stored_answer(record_type: RecordType, owner: &str, value: &str) -> Option<Answer> {
    match record_type.class() {
        RecordClass::Address => {
            let address: IpAddr = value.parse().ok()?;
            let family_matches = match record_type {
                RecordType::A => address.is_ipv4(),
                _ => address.is_ipv6(),
            };
            family_matches.then(|| Answer::address(record_type, owner, address))
        }
        RecordClass::Alias | RecordClass::Data => Some(Answer::data(record_type, owner, value)),
    }
}
