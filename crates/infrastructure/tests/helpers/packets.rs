use mdns_wire_domain::CodecConfig;
use mdns_wire_infrastructure::codec::{CollectingObserver, PacketCodec};

/// Hand-assembles wire bytes, so tests can describe malformed packets the
/// encoder would refuse to produce.
#[derive(Debug, Clone, Default)]
pub struct PacketBytes {
    buf: Vec<u8>,
}

impl PacketBytes {
    /// Header with zero id, the given flags byte and section counts.
    pub fn header(flags: u8, qd: u16, an: u16, ns: u16, ar: u16) -> Self {
        let mut buf = vec![0x00, 0x00, flags, 0x00];
        for count in [qd, an, ns, ar] {
            buf.extend_from_slice(&count.to_be_bytes());
        }
        Self { buf }
    }

    pub fn query(qd: u16) -> Self {
        Self::header(0x00, qd, 0, 0, 0)
    }

    pub fn response(an: u16) -> Self {
        Self::header(0x84, 0, an, 0, 0)
    }

    pub fn name(mut self, name: &str) -> Self {
        for label in name.split('.').filter(|l| !l.is_empty()) {
            self.buf.push(label.len() as u8);
            self.buf.extend_from_slice(label.as_bytes());
        }
        self.buf.push(0);
        self
    }

    pub fn pointer(mut self, offset: u16) -> Self {
        self.buf
            .extend_from_slice(&(0xC000 | offset).to_be_bytes());
        self
    }

    pub fn u8(mut self, value: u8) -> Self {
        self.buf.push(value);
        self
    }

    pub fn u16(mut self, value: u16) -> Self {
        self.buf.extend_from_slice(&value.to_be_bytes());
        self
    }

    pub fn u32(mut self, value: u32) -> Self {
        self.buf.extend_from_slice(&value.to_be_bytes());
        self
    }

    pub fn bytes(mut self, bytes: &[u8]) -> Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    /// Zero-fills up to `len` bytes.
    pub fn pad_to(mut self, len: usize) -> Self {
        self.buf.resize(len, 0);
        self
    }

    /// Question fields after the name.
    pub fn question(self, qtype: u16, qclass: u16) -> Self {
        self.u16(qtype).u16(qclass)
    }

    /// Record fields after the name, up to and including RDLENGTH.
    pub fn record(self, rrtype: u16, rrclass: u16, ttl: u32, rdlength: u16) -> Self {
        self.u16(rrtype).u16(rrclass).u32(ttl).u16(rdlength)
    }

    pub fn build(self) -> Vec<u8> {
        self.buf
    }
}

pub fn collecting_codec() -> PacketCodec<CollectingObserver> {
    PacketCodec::with_observer(&CodecConfig::default(), CollectingObserver::new())
}

/// Parses `packet` with a fresh collecting codec.
pub fn parse(packet: &[u8]) -> (Option<mdns_wire_domain::PacketHeader>, CollectingObserver) {
    let mut codec = collecting_codec();
    let header = codec.parse(packet);
    (header, codec.into_observer())
}

/// Zeroes the packet offsets recorded on decode, so decoded items compare
/// equal to the values they were built from.
pub fn without_offsets(mut seen: CollectingObserver) -> CollectingObserver {
    for query in &mut seen.queries {
        query.offset = 0;
    }
    for answer in &mut seen.answers {
        answer.offset = 0;
    }
    seen
}
