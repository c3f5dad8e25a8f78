//! RDATA layouts per record type.

use super::field::{PacketReader, PacketWriter};
use super::name::{encode_name, read_name, BoundedText};
use mdns_wire_domain::{CodecError, RData, RecordType};
use std::net::{Ipv4Addr, Ipv6Addr};

const SRV_FIXED_LEN: usize = 6;

/// Decodes `rdlength` bytes of RDATA at the reader's cursor.
///
/// `rdlength` is untrusted: a payload reaching past the packet fails before
/// anything is read. Text and raw payloads are copied; names inside the
/// payload are decoded against the whole packet and must consume exactly the
/// bytes the length prefix declares. The caller owns the cursor afterwards and
/// should move it to the end of the payload whatever the outcome.
pub fn decode_rdata(
    reader: &mut PacketReader<'_>,
    rrtype: RecordType,
    rdlength: usize,
    max_len: usize,
) -> Result<RData, CodecError> {
    let start = reader.position();
    let end = start.saturating_add(rdlength);
    if end > reader.size() {
        return Err(CodecError::Overrun {
            pos: end,
            size: reader.size(),
        });
    }

    let fixed_len = |expected: usize| {
        if rdlength == expected {
            Ok(())
        } else {
            Err(CodecError::RdataLength {
                rrtype,
                expected,
                actual: rdlength,
            })
        }
    };

    let rdata = match rrtype {
        RecordType::A => {
            fixed_len(4)?;
            let octets: [u8; 4] = reader.take(4).try_into().map_err(|_| overrun(reader))?;
            RData::A(Ipv4Addr::from(octets))
        }
        RecordType::AAAA => {
            fixed_len(16)?;
            let octets: [u8; 16] = reader.take(16).try_into().map_err(|_| overrun(reader))?;
            RData::Aaaa(Ipv6Addr::from(octets))
        }
        RecordType::PTR => RData::Ptr(read_name(reader, max_len)?),
        RecordType::HINFO => RData::Hinfo(text(reader.take(rdlength), max_len)),
        RecordType::TXT => RData::Txt(text(reader.take(rdlength), max_len)),
        RecordType::SRV => {
            if rdlength <= SRV_FIXED_LEN {
                return Err(CodecError::RdataLength {
                    rrtype,
                    expected: SRV_FIXED_LEN + 1,
                    actual: rdlength,
                });
            }
            let priority = reader.read_u16();
            let weight = reader.read_u16();
            let port = reader.read_u16();
            let target = read_name(reader, max_len)?;
            RData::Srv {
                priority,
                weight,
                port,
                target,
            }
        }
        _ => RData::Raw(reader.take(rdlength).to_vec()),
    };

    let consumed = reader.position() - start;
    if consumed != rdlength {
        return Err(CodecError::RdataLength {
            rrtype,
            expected: rdlength,
            actual: consumed,
        });
    }
    Ok(rdata)
}

/// Fails unless `write_rdata` can emit `rdata` for `rrtype`.
pub fn check_encodable(rrtype: RecordType, rdata: &RData) -> Result<(), CodecError> {
    match (rrtype, rdata) {
        (RecordType::A, RData::A(_))
        | (RecordType::PTR, RData::Ptr(_))
        | (RecordType::SRV, RData::Srv { .. }) => Ok(()),
        (RecordType::A | RecordType::PTR | RecordType::SRV, _) => {
            Err(CodecError::RdataMismatch { rrtype })
        }
        (other, _) => Err(CodecError::UnsupportedType(other)),
    }
}

/// Writes the length-prefixed RDATA for `rdata`. Only A, PTR and SRV have
/// writers; every other type is rejected before anything is written.
/// Returns the RDATA length, excluding its prefix.
pub fn write_rdata(
    writer: &mut PacketWriter<'_>,
    rrtype: RecordType,
    rdata: &RData,
) -> Result<usize, CodecError> {
    check_encodable(rrtype, rdata)?;

    let length_at = writer.position();
    writer.write_u16(0)?;
    let start = writer.position();

    match rdata {
        RData::A(addr) => writer.write_bytes(&addr.octets())?,
        RData::Ptr(name) => {
            encode_name(writer, name)?;
        }
        RData::Srv {
            priority,
            weight,
            port,
            target,
        } => {
            writer.write_u16(*priority)?;
            writer.write_u16(*weight)?;
            writer.write_u16(*port)?;
            encode_name(writer, target)?;
        }
        _ => return Err(CodecError::UnsupportedType(rrtype)),
    }

    let rdlength = writer.position() - start;
    writer.patch_u16(length_at, rdlength as u16);
    Ok(rdlength)
}

fn text(bytes: &[u8], max_len: usize) -> String {
    let mut out = BoundedText::new(max_len);
    out.extend(bytes);
    out.into_string()
}

fn overrun(reader: &PacketReader<'_>) -> CodecError {
    CodecError::Overrun {
        pos: reader.position(),
        size: reader.size(),
    }
}
