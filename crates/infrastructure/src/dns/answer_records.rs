use hickory_proto::rr::rdata::{A, AAAA, CNAME, NS, PTR, TXT};
use hickory_proto::rr::{Name, RData, Record};
use redis_dns_domain::{Answer, AnswerData, RecordType};
use std::net::IpAddr;
use std::str::FromStr;
use tracing::warn;

const MAX_CHARACTER_STRING: usize = 255;

/// Converts resolved answers into wire records, dropping any that cannot be
/// expressed (unparseable names, data of the wrong shape).
pub fn answer_records(answers: &[Answer]) -> Vec<Record> {
    answers
        .iter()
        .filter_map(|answer| {
            let record = to_record(answer);
            if record.is_none() {
                warn!(
                    name = %answer.name,
                    record_type = %answer.record_type,
                    data = %answer.data,
                    "Answer cannot be encoded, skipping"
                );
            }
            record
        })
        .collect()
}

fn to_record(answer: &Answer) -> Option<Record> {
    let name = fqdn(&answer.name)?;
    let rdata = to_rdata(answer.record_type, &answer.data)?;
    Some(Record::from_rdata(name, answer.ttl, rdata))
}

fn to_rdata(record_type: RecordType, data: &AnswerData) -> Option<RData> {
    match (record_type, data) {
        (RecordType::A, AnswerData::Address(IpAddr::V4(v4))) => Some(RData::A(A(*v4))),
        (RecordType::AAAA, AnswerData::Address(IpAddr::V6(v6))) => Some(RData::AAAA(AAAA(*v6))),
        (RecordType::CNAME, AnswerData::Data(target)) => Some(RData::CNAME(CNAME(fqdn(target)?))),
        (RecordType::NS, AnswerData::Data(host)) => Some(RData::NS(NS(fqdn(host)?))),
        (RecordType::PTR, AnswerData::Data(host)) => Some(RData::PTR(PTR(fqdn(host)?))),
        (RecordType::TXT, AnswerData::Data(text)) => Some(RData::TXT(txt(text))),
        _ => None,
    }
}

/// Character-strings are capped at 255 bytes, so longer values (DKIM keys)
/// are split across several strings of one record.
fn txt(text: &str) -> TXT {
    TXT::from_bytes(text.as_bytes().chunks(MAX_CHARACTER_STRING).collect())
}

fn fqdn(name: &str) -> Option<Name> {
    Name::from_str(&format!("{}.", name.trim_end_matches('.'))).ok()
}
