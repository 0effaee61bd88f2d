#![allow(dead_code)]
use redis_dns_domain::{Association, AssociationView, Record, RecordType};
use std::collections::{BTreeSet, HashMap};

/// Flattens records back into the token list an operator would type.
pub fn tokens_for(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .flat_map(|record| {
            std::iter::once(record.record_type.to_string()).chain(record.args.iter().cloned())
        })
        .collect()
}

/// Plain map-backed view for exercising the chase without a store.
#[derive(Default)]
pub struct MapView {
    sets: HashMap<(RecordType, String), BTreeSet<String>>,
    aliases: HashMap<String, String>,
}

impl MapView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, association: Association) -> Self {
        match association {
            Association::Member {
                record_type,
                domain,
                value,
            } => {
                self.sets
                    .entry((record_type, domain))
                    .or_default()
                    .insert(value);
            }
            Association::Alias { alias, target } => {
                self.aliases.insert(alias, target);
            }
        }
        self
    }

    pub fn with_all(self, associations: Vec<Association>) -> Self {
        associations.into_iter().fold(self, MapView::with)
    }
}

impl AssociationView for MapView {
    fn members(&self, record_type: RecordType, owner: &str) -> Vec<String> {
        self.sets
            .get(&(record_type, owner.to_string()))
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn alias(&self, owner: &str) -> Option<String> {
        self.aliases.get(owner).cloned()
    }
}
