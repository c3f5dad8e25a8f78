//! mDNS wire domain layer: the values a packet decodes into and encodes from.
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod packet_header;

pub use config::{CliOverrides, CodecConfig, Config, ConfigError, LoggingConfig, TransportConfig};
pub use dns_query::Query;
pub use dns_record::{Answer, RData, RecordType, CLASS_ANY, CLASS_IN};
pub use errors::CodecError;
pub use packet_header::{PacketHeader, Section};

/// Maximum length of a decoded name, including the terminator slot.
pub const MAX_NAME_LEN: usize = 256;

/// Default packet buffer capacity.
pub const MAX_PACKET_SIZE: usize = 4096;

/// Size of the fixed DNS header.
pub const HEADER_LEN: usize = 12;
