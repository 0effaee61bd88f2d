//! Redis DNS Domain Layer
pub mod answer;
pub mod config;
pub mod errors;
pub mod question;
pub mod record;
pub mod record_grammar;
pub mod resolution;

pub use answer::{Answer, AnswerData};
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use question::{normalize_name, Question};
pub use record::{Association, Record, RecordClass, RecordType};
pub use record_grammar::parse_records;
pub use resolution::{chase, AssociationView};
