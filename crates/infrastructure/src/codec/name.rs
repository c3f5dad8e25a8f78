//! Label-sequence names: decoding with compression pointers, flat encoding.

use super::field::{PacketReader, PacketWriter};
use mdns_wire_domain::CodecError;
use smallvec::SmallVec;

const POINTER_MASK: u8 = 0xC0;
const MAX_LABEL_LEN: usize = 63;
const MAX_ENCODED_NAME_LEN: usize = 255;

/// Decodes the name at the reader's cursor into at most `max_len - 1` bytes.
///
/// The cursor ends up past the name as it appears at the cursor: after the
/// terminating zero, or after the first compression pointer. Labels that do
/// not fit in the output are dropped but still skipped over. Pointers must
/// point strictly backward and may not revisit an offset.
pub fn read_name(reader: &mut PacketReader<'_>, max_len: usize) -> Result<String, CodecError> {
    let packet = reader.packet();
    let byte_at = |at: usize| packet.get(at).copied().unwrap_or(0);

    let mut out = BoundedText::new(max_len);
    let mut visited: SmallVec<[usize; 8]> = SmallVec::new();
    let mut pos = reader.position();
    let mut followed_pointer = false;
    let mut first_label = true;

    loop {
        let len_byte = byte_at(pos);

        if len_byte == 0 {
            if !followed_pointer {
                reader.seek(pos + 1);
            }
            break;
        }

        if len_byte >= POINTER_MASK {
            let target = (((len_byte & !POINTER_MASK) as usize) << 8) | byte_at(pos + 1) as usize;
            if !followed_pointer {
                reader.seek(pos + 2);
            }
            if target >= pos {
                return Err(CodecError::BadPointer { at: pos, target });
            }
            if visited.contains(&target) {
                return Err(CodecError::PointerLoop { at: pos });
            }
            visited.push(target);
            followed_pointer = true;
            pos = target;
            continue;
        }

        let label_len = len_byte as usize;
        let start = (pos + 1).min(packet.len());
        let end = (pos + 1 + label_len).min(packet.len());
        if !first_label {
            out.push(b'.');
        }
        first_label = false;
        out.extend(&packet[start..end]);
        pos += 1 + label_len;
    }

    Ok(out.into_string())
}

/// Decodes the name at `start`, returning it with the position just past it.
pub fn decode_name(
    packet: &[u8],
    start: usize,
    max_len: usize,
) -> Result<(String, usize), CodecError> {
    let mut reader = PacketReader::new(packet, start);
    let name = read_name(&mut reader, max_len)?;
    Ok((name, reader.position()))
}

/// Number of bytes `name` takes on the wire, validating it on the way.
///
/// A single trailing dot is accepted. Empty labels elsewhere, labels over 63
/// bytes and names over 255 encoded bytes are rejected.
pub fn encoded_name_len(name: &str) -> Result<usize, CodecError> {
    let trimmed = name.strip_suffix('.').unwrap_or(name);
    if trimmed.is_empty() {
        return Ok(1);
    }

    let mut total = 1;
    for label in trimmed.split('.') {
        if label.is_empty() {
            return Err(CodecError::InvalidName(format!("empty label in '{}'", name)));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(CodecError::InvalidName(format!(
                "label '{}' exceeds {} bytes",
                label, MAX_LABEL_LEN
            )));
        }
        total += 1 + label.len();
    }

    if total > MAX_ENCODED_NAME_LEN {
        return Err(CodecError::InvalidName(format!(
            "'{}' encodes to {} bytes",
            name, total
        )));
    }
    Ok(total)
}

/// Writes `name` as length-prefixed labels plus a zero terminator. Never
/// emits compression pointers. Returns the number of bytes written.
pub fn encode_name(writer: &mut PacketWriter<'_>, name: &str) -> Result<usize, CodecError> {
    let total = encoded_name_len(name)?;
    writer.ensure(total)?;

    let trimmed = name.strip_suffix('.').unwrap_or(name);
    if !trimmed.is_empty() {
        for label in trimmed.split('.') {
            writer.write_u8(label.len() as u8)?;
            writer.write_bytes(label.as_bytes())?;
        }
    }
    writer.write_u8(0)?;
    Ok(total)
}

/// Byte accumulator that silently stops growing at `max_len - 1` bytes.
pub(crate) struct BoundedText {
    bytes: Vec<u8>,
    limit: usize,
}

impl BoundedText {
    pub(crate) fn new(max_len: usize) -> Self {
        let limit = max_len.saturating_sub(1);
        Self {
            bytes: Vec::with_capacity(limit.min(64)),
            limit,
        }
    }

    pub(crate) fn push(&mut self, byte: u8) {
        if self.bytes.len() < self.limit {
            self.bytes.push(byte);
        }
    }

    pub(crate) fn extend(&mut self, bytes: &[u8]) {
        let room = self.limit - self.bytes.len();
        self.bytes.extend_from_slice(&bytes[..bytes.len().min(room)]);
    }

    /// Converts to a string no longer than the limit. Invalid UTF-8 is
    /// replaced, then cut back to a character boundary if that made it grow.
    pub(crate) fn into_string(self) -> String {
        match String::from_utf8(self.bytes) {
            Ok(text) => text,
            Err(err) => {
                let mut text = String::from_utf8_lossy(err.as_bytes()).into_owned();
                let mut cut = self.limit.min(text.len());
                while !text.is_char_boundary(cut) {
                    cut -= 1;
                }
                text.truncate(cut);
                text
            }
        }
    }
}
