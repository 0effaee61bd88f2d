mod association;
mod record_type;

pub use association::Association;
pub use record_type::{RecordClass, RecordType};

use crate::question::normalize_name;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

/// One block of administrative input: a type keyword and its raw arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub record_type: RecordType,
    pub args: Vec<String>,
}

impl Record {
    pub fn new(record_type: RecordType, args: Vec<String>) -> Self {
        Self { record_type, args }
    }

    /// Expands the block into the store facts it describes.
    ///
    /// - Address types: `domains... ips...`, the IP suffix is found by
    ///   scanning backward while tokens parse as addresses of the type's
    ///   family. Every domain is paired with every address.
    /// - CNAME: `target aliases...`.
    /// - Data types: `domain values...`.
    ///
    /// Owner names are normalized; values other than alias targets are kept
    /// verbatim.
    pub fn associations(&self) -> Vec<Association> {
        match self.record_type.class() {
            RecordClass::Address => {
                let boundary = self.address_boundary();
                let (domains, ips) = self.args.split_at(boundary);
                domains
                    .iter()
                    .flat_map(|domain| {
                        ips.iter().map(move |ip| {
                            Association::member(self.record_type, normalize_name(domain), ip)
                        })
                    })
                    .collect()
            }
            RecordClass::Alias => match self.args.split_first() {
                Some((target, aliases)) => {
                    let target = normalize_name(target);
                    aliases
                        .iter()
                        .map(|alias| Association::alias(normalize_name(alias), target.clone()))
                        .collect()
                }
                None => Vec::new(),
            },
            RecordClass::Data => match self.args.split_first() {
                Some((domain, values)) => {
                    let domain = normalize_name(domain);
                    values
                        .iter()
                        .map(|value| Association::member(self.record_type, domain.clone(), value))
                        .collect()
                }
                None => Vec::new(),
            },
        }
    }

    /// Index of the first address token in the trailing run of addresses.
    fn address_boundary(&self) -> usize {
        let is_address = |token: &str| match self.record_type {
            RecordType::A => token.parse::<Ipv4Addr>().is_ok(),
            RecordType::AAAA => token.parse::<Ipv6Addr>().is_ok(),
            _ => false,
        };

        self.args
            .iter()
            .rposition(|token| !is_address(token))
            .map_or(0, |last_domain| last_domain + 1)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.record_type)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
