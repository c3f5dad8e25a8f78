//! Big-endian field access over the packet buffer.
//!
//! The reader never fails: bytes past the end of the packet read as zero while
//! the cursor keeps advancing, so callers detect overruns once per item with
//! [`PacketReader::check_bounds`] instead of after every field. The writer
//! checks capacity before every write and leaves the buffer untouched when a
//! field does not fit.

use mdns_wire_domain::CodecError;

const FLAG_BIT: u16 = 0x8000;

/// Read cursor over `packet`, whose length is the declared packet size.
#[derive(Debug, Clone)]
pub struct PacketReader<'a> {
    packet: &'a [u8],
    pos: usize,
}

impl<'a> PacketReader<'a> {
    pub fn new(packet: &'a [u8], pos: usize) -> Self {
        Self { packet, pos }
    }

    pub fn packet(&self) -> &'a [u8] {
        self.packet
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn size(&self) -> usize {
        self.packet.len()
    }

    pub fn seek(&mut self, pos: usize) {
        self.pos = pos;
    }

    pub fn skip(&mut self, len: usize) {
        self.pos = self.pos.saturating_add(len);
    }

    /// Fails when the cursor has moved past the declared size.
    pub fn check_bounds(&self) -> Result<(), CodecError> {
        if self.pos > self.packet.len() {
            return Err(CodecError::Overrun {
                pos: self.pos,
                size: self.packet.len(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&mut self) -> u8 {
        let value = self.packet.get(self.pos).copied().unwrap_or(0);
        self.skip(1);
        value
    }

    pub fn read_u16(&mut self) -> u16 {
        u16::from_be_bytes([self.read_u8(), self.read_u8()])
    }

    pub fn read_u32(&mut self) -> u32 {
        u32::from_be_bytes([
            self.read_u8(),
            self.read_u8(),
            self.read_u8(),
            self.read_u8(),
        ])
    }

    /// Reads a class field: the top bit as a flag plus the 15-bit class.
    pub fn read_flagged_u16(&mut self) -> (bool, u16) {
        let raw = self.read_u16();
        (raw & FLAG_BIT != 0, raw & !FLAG_BIT)
    }

    /// Advances by `len` and returns the part of those bytes inside the packet.
    pub fn take(&mut self, len: usize) -> &'a [u8] {
        let start = self.pos.min(self.packet.len());
        let end = self.pos.saturating_add(len).min(self.packet.len());
        self.skip(len);
        &self.packet[start..end]
    }
}

/// Write cursor over the full-capacity packet buffer.
#[derive(Debug)]
pub struct PacketWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> PacketWriter<'a> {
    pub fn new(buf: &'a mut [u8], pos: usize) -> Self {
        Self { buf, pos }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    pub fn ensure(&self, needed: usize) -> Result<(), CodecError> {
        if needed > self.remaining() {
            return Err(CodecError::BufferFull {
                needed,
                remaining: self.remaining(),
            });
        }
        Ok(())
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), CodecError> {
        self.ensure(bytes.len())?;
        self.buf[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
        self.pos += bytes.len();
        Ok(())
    }

    pub fn write_u8(&mut self, value: u8) -> Result<(), CodecError> {
        self.write_bytes(&[value])
    }

    pub fn write_u16(&mut self, value: u16) -> Result<(), CodecError> {
        self.write_bytes(&value.to_be_bytes())
    }

    pub fn write_u32(&mut self, value: u32) -> Result<(), CodecError> {
        self.write_bytes(&value.to_be_bytes())
    }

    /// Writes a class field with `flag` in the top bit.
    pub fn write_flagged_u16(&mut self, flag: bool, value: u16) -> Result<(), CodecError> {
        let raw = (value & !FLAG_BIT) | if flag { FLAG_BIT } else { 0 };
        self.write_u16(raw)
    }

    /// Overwrites a 16-bit field that was already written at `at`.
    pub fn patch_u16(&mut self, at: usize, value: u16) {
        debug_assert!(at + 2 <= self.pos, "patching unwritten bytes");
        self.buf[at..at + 2].copy_from_slice(&value.to_be_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_are_big_endian() {
        let packet = [0x12, 0x34, 0xDE, 0xAD, 0xBE, 0xEF];
        let mut reader = PacketReader::new(&packet, 0);

        assert_eq!(reader.read_u16(), 0x1234);
        assert_eq!(reader.read_u32(), 0xDEADBEEF);
        assert_eq!(reader.position(), 6);
        assert!(reader.check_bounds().is_ok());
    }

    #[test]
    fn test_flagged_read_splits_top_bit() {
        let packet = [0x80, 0x01, 0x00, 0xFF];
        let mut reader = PacketReader::new(&packet, 0);

        assert_eq!(reader.read_flagged_u16(), (true, 0x0001));
        assert_eq!(reader.read_flagged_u16(), (false, 0x00FF));
    }

    #[test]
    fn test_reading_past_size_yields_zero_and_flags_overrun() {
        let packet = [0xAB];
        let mut reader = PacketReader::new(&packet, 0);

        assert_eq!(reader.read_u16(), 0xAB00);
        assert_eq!(reader.position(), 2);
        assert_eq!(
            reader.check_bounds(),
            Err(CodecError::Overrun { pos: 2, size: 1 })
        );
    }

    #[test]
    fn test_take_clamps_to_packet() {
        let packet = [1, 2, 3, 4];
        let mut reader = PacketReader::new(&packet, 2);

        assert_eq!(reader.take(10), &[3, 4]);
        assert_eq!(reader.position(), 12);
        assert!(reader.take(3).is_empty());
    }

    #[test]
    fn test_writer_round_trips_fields() {
        let mut buf = [0u8; 8];
        let mut writer = PacketWriter::new(&mut buf, 0);
        writer.write_u16(0x0102).unwrap();
        writer.write_flagged_u16(true, 0x0001).unwrap();
        writer.write_u32(120).unwrap();
        assert_eq!(writer.remaining(), 0);

        let mut reader = PacketReader::new(&buf, 0);
        assert_eq!(reader.read_u16(), 0x0102);
        assert_eq!(reader.read_flagged_u16(), (true, 1));
        assert_eq!(reader.read_u32(), 120);
    }

    #[test]
    fn test_writer_rejects_overflow_without_writing() {
        let mut buf = [0u8; 3];
        let mut writer = PacketWriter::new(&mut buf, 2);

        assert_eq!(
            writer.write_u16(0xFFFF),
            Err(CodecError::BufferFull {
                needed: 2,
                remaining: 1
            })
        );
        assert_eq!(writer.position(), 2);
        assert_eq!(buf, [0, 0, 0]);
    }

    #[test]
    fn test_patch_overwrites_length_prefix() {
        let mut buf = [0u8; 4];
        let mut writer = PacketWriter::new(&mut buf, 0);
        writer.write_u16(0).unwrap();
        writer.write_u16(0xAAAA).unwrap();
        writer.patch_u16(0, 2);

        assert_eq!(buf, [0x00, 0x02, 0xAA, 0xAA]);
    }
}
