use super::RecordType;
use crate::MAX_NAME_LEN;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};


/// Decoded payload of a resource record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RData {
    A(Ipv4Addr),
    Ptr(String),
    Hinfo(String),
    Txt(String),
    Aaaa(Ipv6Addr),
    Srv {
        priority: u16,
        weight: u16,
        port: u16,
        target: String,
    },
    /// Payload of a type without a dedicated decoder, or one that failed to decode.
    Raw(Vec<u8>),
}

impl RData {
    /// The record type this payload belongs to; `None` for raw bytes.
    pub fn record_type(&self) -> Option<RecordType> {
        match self {
            RData::A(_) => Some(RecordType::A),
            RData::Ptr(_) => Some(RecordType::PTR),
            RData::Hinfo(_) => Some(RecordType::HINFO),
            RData::Txt(_) => Some(RecordType::TXT),
            RData::Aaaa(_) => Some(RecordType::AAAA),
            RData::Srv { .. } => Some(RecordType::SRV),
            RData::Raw(_) => None,
        }
    }

    /// Text form bounded by the same output capacity decoded names and text
    /// obey: raw payloads render at most `max_len - 1` characters. Other
    /// variants are already bounded when decoded and render as [`Display`].
    ///
    /// [`Display`]: fmt::Display
    pub fn render(&self, max_len: usize) -> String {
        match self {
            RData::Raw(bytes) => {
                let mut out = String::new();
                let _ = write_raw(&mut out, bytes, max_len);
                out
            }
            other => other.to_string(),
        }
    }
}

/// Writes "XX XX ..." for as many bytes as fit in `max_len - 1` characters.
fn write_raw(out: &mut impl fmt::Write, bytes: &[u8], max_len: usize) -> fmt::Result {
    let limit = max_len.saturating_sub(1) / 3;
    for (i, byte) in bytes.iter().take(limit).enumerate() {
        if i > 0 {
            out.write_str(" ")?;
        }
        write!(out, "{:02X}", byte)?;
    }
    Ok(())
}

impl fmt::Display for RData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RData::A(addr) => write!(f, "{}", addr),
            RData::Ptr(name) => f.write_str(name),
            RData::Hinfo(text) | RData::Txt(text) => f.write_str(text),
            RData::Aaaa(addr) => {
                for (i, byte) in addr.octets().iter().enumerate() {
                    if i > 0 {
                        f.write_str(":")?;
                    }
                    write!(f, "{:02X}", byte)?;
                }
                Ok(())
            }
            RData::Srv {
                priority,
                weight,
                port,
                target,
            } => write!(
                f,
                "p={};w={};port={};target={}",
                priority, weight, port, target
            ),
            RData::Raw(bytes) => write_raw(f, bytes, MAX_NAME_LEN),
        }
    }
}
