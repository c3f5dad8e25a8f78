use mdns_wire_domain::{CodecError, PacketHeader, Section, HEADER_LEN};

const QR_BIT: u8 = 0b1000_0000;
const TC_BIT: u8 = 0b0000_0010;
const RCODE_MASK: u8 = 0b0000_1111;

/// Parses the fixed 12-byte header.
///
/// Fails when fewer than 12 bytes are present or the response code is
/// non-zero; either way the datagram carries nothing usable. The
/// transaction id is ignored.
pub fn read_header(packet: &[u8]) -> Result<PacketHeader, CodecError> {
    if packet.len() < HEADER_LEN {
        return Err(CodecError::PacketTooShort { len: packet.len() });
    }

    let rcode = packet[3] & RCODE_MASK;
    if rcode != 0 {
        return Err(CodecError::ResponseCode(rcode));
    }

    let mut header = PacketHeader {
        is_answer: packet[2] & QR_BIT != 0,
        truncated: packet[2] & TC_BIT != 0,
        ..PacketHeader::default()
    };
    for section in Section::ALL {
        let at = section.count_offset();
        *header.count_mut(section) = u16::from_be_bytes([packet[at], packet[at + 1]]);
    }
    Ok(header)
}

/// Serialises `header` with a zero transaction id.
pub fn encode_header(header: &PacketHeader) -> [u8; HEADER_LEN] {
    let mut flags = 0u8;
    if header.is_answer {
        flags |= QR_BIT;
    }
    if header.truncated {
        flags |= TC_BIT;
    }

    let mut out = [0u8; HEADER_LEN];
    out[2] = flags;
    for section in Section::ALL {
        let at = section.count_offset();
        out[at..at + 2].copy_from_slice(&header.count(section).to_be_bytes());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_response_header() {
        let packet = [
            0xAB, 0xCD, // ID (ignored)
            0x84, 0x00, // QR + AA
            0x00, 0x00, // QDCOUNT
            0x00, 0x02, // ANCOUNT
            0x00, 0x00, // NSCOUNT
            0x00, 0x01, // ARCOUNT
        ];
        let header = read_header(&packet).unwrap();

        assert!(header.is_answer);
        assert!(!header.truncated);
        assert_eq!(header.answer_count, 2);
        assert_eq!(header.ar_count, 1);
    }

    #[test]
    fn test_truncated_bit() {
        let mut packet = [0u8; 12];
        packet[2] = TC_BIT;
        let header = read_header(&packet).unwrap();

        assert!(header.truncated);
        assert!(!header.is_answer);
    }

    #[test]
    fn test_nonzero_rcode_rejected() {
        let mut packet = [0u8; 12];
        packet[3] = 0x03;
        assert_eq!(read_header(&packet), Err(CodecError::ResponseCode(3)));
    }

    #[test]
    fn test_short_header_rejected() {
        assert_eq!(
            read_header(&[0u8; 11]),
            Err(CodecError::PacketTooShort { len: 11 })
        );
    }

    #[test]
    fn test_encode_then_read() {
        let header = PacketHeader {
            is_answer: true,
            truncated: false,
            query_count: 1,
            answer_count: 258,
            ns_count: 0,
            ar_count: 3,
        };
        let bytes = encode_header(&header);

        assert_eq!(&bytes[..4], &[0, 0, 0x80, 0]);
        assert_eq!(&bytes[6..8], &[0x01, 0x02]);
        assert_eq!(read_header(&bytes), Ok(header));
    }
}
