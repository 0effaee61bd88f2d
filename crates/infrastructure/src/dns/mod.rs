pub mod answer_records;
pub mod record_type_map;
pub mod server;

pub use answer_records::answer_records;
pub use record_type_map::RecordTypeMapper;
pub use server::DnsServerHandler;
