use crate::dns_record::RecordType;
use crate::packet_header::Section;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Packet too short: {len} bytes")]
    PacketTooShort { len: usize },

    #[error("Packet carries response code {0}")]
    ResponseCode(u8),

    #[error("Datagram of {len} bytes exceeds buffer capacity {capacity}")]
    Oversized { len: usize, capacity: usize },

    #[error("Invalid class: 0x{0:04X}")]
    InvalidClass(u16),

    #[error("Cursor overran packet: position {pos}, size {size}")]
    Overrun { pos: usize, size: usize },

    #[error("Compression pointer at {at} does not point backward (target {target})")]
    BadPointer { at: usize, target: usize },

    #[error("Compression pointer loop at {at}")]
    PointerLoop { at: usize },

    #[error("RDATA length for {rrtype}: expected {expected}, got {actual}")]
    RdataLength {
        rrtype: RecordType,
        expected: usize,
        actual: usize,
    },

    #[error("Cannot add {adding} section: {blocked_by} section already has records")]
    OrderingViolation { adding: Section, blocked_by: Section },

    #[error("Encoding RDATA for {0} is not supported")]
    UnsupportedType(RecordType),

    #[error("RDATA does not match record type {rrtype}")]
    RdataMismatch { rrtype: RecordType },

    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("The {0} section already holds the maximum of 65535 items")]
    SectionFull(Section),

    #[error("Buffer full: need {needed} bytes, {remaining} remaining")]
    BufferFull { needed: usize, remaining: usize },
}

