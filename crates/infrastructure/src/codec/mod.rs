pub mod field;
pub mod header;
pub mod name;
pub mod observer;
pub mod packet;
pub mod record;

pub use field::{PacketReader, PacketWriter};
pub use header::{encode_header, read_header};
pub use name::{decode_name, encode_name, encoded_name_len, read_name};
pub use observer::{CollectingObserver, NullObserver, PacketObserver};
pub use packet::PacketCodec;
pub use record::{decode_rdata, write_rdata};
