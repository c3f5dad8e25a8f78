use std::fmt;

/// The four counted sections that follow the 12-byte header, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Query,
    Answer,
    Authority,
    Additional,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Query,
        Section::Answer,
        Section::Authority,
        Section::Additional,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Query => "query",
            Section::Answer => "answer",
            Section::Authority => "authority",
            Section::Additional => "additional",
        }
    }

    /// Byte offset of this section's count inside the header.
    pub fn count_offset(&self) -> usize {
        match self {
            Section::Query => 4,
            Section::Answer => 6,
            Section::Authority => 8,
            Section::Additional => 10,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoded form of the fixed DNS header.
///
/// The transaction id is not kept: mDNS ignores it on receive and writes zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PacketHeader {
    /// QR bit: the packet is a response.
    pub is_answer: bool,
    /// TC bit: more records follow in another packet.
    pub truncated: bool,
    pub query_count: u16,
    pub answer_count: u16,
    pub ns_count: u16,
    pub ar_count: u16,
}

impl PacketHeader {
    pub fn count(&self, section: Section) -> u16 {
        match section {
            Section::Query => self.query_count,
            Section::Answer => self.answer_count,
            Section::Authority => self.ns_count,
            Section::Additional => self.ar_count,
        }
    }

    pub fn count_mut(&mut self, section: Section) -> &mut u16 {
        match section {
            Section::Query => &mut self.query_count,
            Section::Answer => &mut self.answer_count,
            Section::Authority => &mut self.ns_count,
            Section::Additional => &mut self.ar_count,
        }
    }

    /// Number of resource records across answer, authority and additional sections.
    pub fn record_count(&self) -> usize {
        self.answer_count as usize + self.ns_count as usize + self.ar_count as usize
    }

    /// The first section after `section` that already holds items, if any.
    pub fn later_populated_section(&self, section: Section) -> Option<Section> {
        Section::ALL
            .into_iter()
            .filter(|s| *s > section)
            .find(|s| self.count(*s) > 0)
    }
}

impl fmt::Display for PacketHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} qd={} an={} ns={} ar={}{}",
            if self.is_answer { "response" } else { "query" },
            self.query_count,
            self.answer_count,
            self.ns_count,
            self.ar_count,
            if self.truncated { " (truncated)" } else { "" }
        )
    }
}
