use super::RecordType;
use std::fmt;
use std::net::IpAddr;

/// Payload of an answer: an address for A/AAAA, opaque text otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerData {
    Address(IpAddr),
    Data(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub record_type: RecordType,

    pub name: String,

    pub data: AnswerData,

    /// Always 0: answers are re-read from the store on every query.
    pub ttl: u32,
}

impl Answer {
    pub fn address(record_type: RecordType, name: impl Into<String>, address: IpAddr) -> Self {
        Self {
            record_type,
            name: name.into(),
            data: AnswerData::Address(address),
            ttl: 0,
        }
    }

    pub fn data(record_type: RecordType, name: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            record_type,
            name: name.into(),
            data: AnswerData::Data(data.into()),
            ttl: 0,
        }
    }

    pub fn cname(alias: impl Into<String>, target: impl Into<String>) -> Self {
        Self::data(RecordType::CNAME, alias, target)
    }
}

impl fmt::Display for AnswerData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerData::Address(addr) => write!(f, "{}", addr),
            AnswerData::Data(data) => write!(f, "{}", data),
        }
    }
}
