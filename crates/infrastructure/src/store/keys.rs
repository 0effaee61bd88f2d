//! Key layout shared by the admin write path and the resolver read path.
//!
//! `<TYPE>:<domain>` holds a set of values, `CNAME:<alias>` holds the alias
//! target as a plain string. `lookup.lua` builds the same keys server-side.

use redis_dns_domain::RecordType;

pub fn set_key(record_type: RecordType, domain: &str) -> String {
    format!("{}:{}", record_type.as_str(), domain)
}

pub fn alias_key(alias: &str) -> String {
    format!("{}:{}", RecordType::CNAME.as_str(), alias)
}
