mod rdata;
mod record;
mod record_type;

pub use rdata::RData;
pub use record::Answer;
pub use record_type::RecordType;

/// Internet class.
pub const CLASS_IN: u16 = 0x0001;

/// Any class; valid in questions.
pub const CLASS_ANY: u16 = 0x00FF;
