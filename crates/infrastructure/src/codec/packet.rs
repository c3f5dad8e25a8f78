//! Packet codec: owns one buffer and either parses a received datagram into
//! observer events or builds an outgoing packet section by section.

use super::field::{PacketReader, PacketWriter};
use super::header::{encode_header, read_header};
use super::name::{encode_name, read_name};
use super::observer::{NullObserver, PacketObserver};
use super::record::{check_encodable, decode_rdata, write_rdata};
use mdns_wire_domain::{
    Answer, CodecConfig, CodecError, PacketHeader, Query, RData, RecordType, Section, CLASS_ANY,
    CLASS_IN, HEADER_LEN,
};
use tracing::{debug, trace};

/// Shortest datagram worth parsing: a header plus at least one byte.
const MIN_DATAGRAM_LEN: usize = HEADER_LEN + 1;

pub struct PacketCodec<O = NullObserver> {
    buffer: Vec<u8>,
    size: usize,
    pos: usize,
    header: PacketHeader,
    max_name_len: usize,
    observer: O,
}

impl PacketCodec<NullObserver> {
    pub fn new(config: &CodecConfig) -> Self {
        Self::with_observer(config, NullObserver)
    }
}

impl<O: PacketObserver> PacketCodec<O> {
    pub fn with_observer(config: &CodecConfig, observer: O) -> Self {
        let capacity = config.buffer_capacity.max(MIN_DATAGRAM_LEN);
        let mut codec = Self {
            buffer: vec![0; capacity],
            size: HEADER_LEN,
            pos: HEADER_LEN,
            header: PacketHeader::default(),
            max_name_len: config.max_name_len,
            observer,
        };
        codec.clear();
        codec
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Header of the last parsed packet, or of the packet being built.
    pub fn header(&self) -> &PacketHeader {
        &self.header
    }

    /// Logical packet length in bytes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The packet bytes, ready to hand to a transport.
    pub fn packet(&self) -> &[u8] {
        &self.buffer[..self.size]
    }

    /// Decodes `datagram`, delivering every query and then every answer,
    /// authority and additional record to the observer.
    ///
    /// Returns `None` when there is no usable packet: fewer than 13 bytes,
    /// more bytes than the buffer holds, or a rejected header. Problems with
    /// single items only mark those items invalid and decoding moves on,
    /// except that an item whose fields run past the end of the packet is the
    /// last one delivered.
    pub fn parse(&mut self, datagram: &[u8]) -> Option<PacketHeader> {
        if datagram.len() < MIN_DATAGRAM_LEN {
            trace!(len = datagram.len(), "Datagram too short to carry a packet");
            return None;
        }
        if datagram.len() > self.buffer.len() {
            debug!(
                error = %CodecError::Oversized { len: datagram.len(), capacity: self.buffer.len() },
                "Dropping datagram"
            );
            return None;
        }

        self.buffer[..datagram.len()].copy_from_slice(datagram);
        self.size = datagram.len();
        self.pos = HEADER_LEN;

        let header = match read_header(&self.buffer[..self.size]) {
            Ok(header) => header,
            Err(e) => {
                debug!(error = %e, "Ignoring packet");
                self.clear();
                return None;
            }
        };
        self.header = header;

        if header.truncated {
            debug!("Packet is truncated, more records follow in another packet");
        }

        let packet = &self.buffer[..self.size];
        let mut reader = PacketReader::new(packet, HEADER_LEN);

        let mut delivered = 0usize;
        for _ in 0..header.query_count {
            let query = read_query(&mut reader, self.max_name_len);
            self.observer.on_query(query);
            delivered += 1;
            if reader.check_bounds().is_err() {
                return self.stop_at_overrun(header, delivered);
            }
        }

        for _ in 0..header.record_count() {
            let answer = read_answer(&mut reader, self.max_name_len);
            self.observer.on_answer(answer);
            delivered += 1;
            if reader.check_bounds().is_err() {
                return self.stop_at_overrun(header, delivered);
            }
        }

        trace!(
            header = %header,
            consumed = reader.position(),
            size = self.size,
            "Packet parsed"
        );
        self.pos = self.size;
        Some(header)
    }

    /// Ends a parse whose cursor ran past the packet. The overrunning item has
    /// already been delivered as invalid; the remaining declared items are not.
    fn stop_at_overrun(
        &mut self,
        header: PacketHeader,
        delivered: usize,
    ) -> Option<PacketHeader> {
        let declared = header.query_count as usize + header.record_count();
        debug!(
            delivered,
            declared,
            size = self.size,
            "Packet ended before its declared items, stopping"
        );
        self.pos = self.size;
        Some(header)
    }

    /// Resets to an empty query packet: zeroed header, no sections.
    pub fn clear(&mut self) {
        self.header = PacketHeader::default();
        self.buffer[..HEADER_LEN].copy_from_slice(&encode_header(&self.header));
        self.size = HEADER_LEN;
        self.pos = HEADER_LEN;
    }

    /// Appends a question. Fails once any resource record has been added.
    pub fn add_query(&mut self, query: &Query) -> Result<(), CodecError> {
        self.ensure_order(Section::Query)?;

        let mut writer = PacketWriter::new(&mut self.buffer, self.pos);
        encode_name(&mut writer, &query.name)?;
        writer.write_u16(query.qtype.to_u16())?;
        writer.write_flagged_u16(query.unicast_response, query.qclass)?;
        let end = writer.position();

        self.commit(Section::Query, end);
        Ok(())
    }

    /// Appends an answer record. Fails once authority or additional records exist.
    pub fn add_answer(&mut self, answer: &Answer) -> Result<(), CodecError> {
        self.add_record(Section::Answer, answer)
    }

    /// Appends an authority (NS section) record. Fails once additional records exist.
    pub fn add_authority(&mut self, answer: &Answer) -> Result<(), CodecError> {
        self.add_record(Section::Authority, answer)
    }

    /// Appends an additional record.
    pub fn add_additional(&mut self, answer: &Answer) -> Result<(), CodecError> {
        self.add_record(Section::Additional, answer)
    }

    fn add_record(&mut self, section: Section, answer: &Answer) -> Result<(), CodecError> {
        self.ensure_order(section)?;
        check_encodable(answer.rrtype, &answer.rdata)?;

        let mut writer = PacketWriter::new(&mut self.buffer, self.pos);
        encode_name(&mut writer, &answer.name)?;
        writer.write_u16(answer.rrtype.to_u16())?;
        writer.write_flagged_u16(answer.cache_flush, answer.rrclass)?;
        writer.write_u32(answer.ttl)?;
        write_rdata(&mut writer, answer.rrtype, &answer.rdata)?;
        let end = writer.position();

        self.commit(section, end);
        Ok(())
    }

    /// Checks that one more `adding` item may be appended: no later section
    /// holds items yet and the section count has room.
    fn ensure_order(&self, adding: Section) -> Result<(), CodecError> {
        if let Some(blocked_by) = self.header.later_populated_section(adding) {
            debug!(%adding, %blocked_by, "Rejecting out-of-order section");
            return Err(CodecError::OrderingViolation { adding, blocked_by });
        }
        if self.header.count(adding) == u16::MAX {
            debug!(section = %adding, "Rejecting append to a full section");
            return Err(CodecError::SectionFull(adding));
        }
        Ok(())
    }

    /// Accepts bytes written up to `end` as one more item of `section` and
    /// rewrites the header. A packet without questions goes out as a response.
    fn commit(&mut self, section: Section, end: usize) {
        *self.header.count_mut(section) += 1;
        self.header.is_answer = self.header.query_count == 0;
        self.buffer[..HEADER_LEN].copy_from_slice(&encode_header(&self.header));
        self.pos = end;
        self.size = end;
    }
}

fn class_is_valid(class: u16) -> bool {
    class == CLASS_IN || class == CLASS_ANY
}

fn read_query(reader: &mut PacketReader<'_>, max_name_len: usize) -> Query {
    let offset = reader.position();
    let name = read_name(reader, max_name_len);
    let qtype = RecordType::from_u16(reader.read_u16());
    let (unicast_response, qclass) = reader.read_flagged_u16();

    let mut query = Query::new(String::new(), qtype).with_unicast_response(unicast_response);
    query.qclass = qclass;
    query.offset = offset;
    match name {
        Ok(name) => query.name = name,
        Err(e) => query.invalidate(e),
    }
    if !class_is_valid(qclass) {
        query.invalidate(CodecError::InvalidClass(qclass));
    }
    if let Err(e) = reader.check_bounds() {
        query.invalidate(e);
    }

    match &query.error {
        Some(e) => debug!(name = %query.name, offset, error = %e, "Invalid query"),
        None => trace!(query = %query, "Query decoded"),
    }
    query
}

fn read_answer(reader: &mut PacketReader<'_>, max_name_len: usize) -> Answer {
    let offset = reader.position();
    let name = read_name(reader, max_name_len);
    let rrtype = RecordType::from_u16(reader.read_u16());
    let (cache_flush, rrclass) = reader.read_flagged_u16();
    let ttl = reader.read_u32();
    let rdlength = reader.read_u16() as usize;

    let rdata_start = reader.position();
    let rdata = decode_rdata(reader, rrtype, rdlength, max_name_len);
    reader.seek(rdata_start.saturating_add(rdlength));

    let mut answer = Answer::new(String::new(), RData::Raw(Vec::new()), ttl)
        .with_type(rrtype)
        .with_cache_flush(cache_flush);
    answer.rrclass = rrclass;
    answer.offset = offset;
    match name {
        Ok(name) => answer.name = name,
        Err(e) => answer.invalidate(e),
    }
    if !class_is_valid(rrclass) {
        answer.invalidate(CodecError::InvalidClass(rrclass));
    }
    match rdata {
        Ok(rdata) => answer.rdata = rdata,
        Err(e) => {
            let packet = reader.packet();
            let start = rdata_start.min(packet.len());
            let end = rdata_start.saturating_add(rdlength).min(packet.len());
            answer.rdata = RData::Raw(packet[start..end].to_vec());
            answer.invalidate(e);
        }
    }
    if let Err(e) = reader.check_bounds() {
        answer.invalidate(e);
    }

    match &answer.error {
        Some(e) => debug!(
            name = %answer.name,
            rrtype = %rrtype,
            offset,
            error = %e,
            "Invalid record"
        ),
        None => trace!(answer = %answer, "Record decoded"),
    }
    answer
}
