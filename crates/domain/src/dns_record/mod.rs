pub mod answer;
pub mod record;
pub mod record_type;

pub use answer::{AnswerRecord, RecordData};
pub use record::DnsRecord;
pub use record_type::RecordType;
