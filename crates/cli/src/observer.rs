use mdns_wire_domain::{Answer, Query};
use mdns_wire_infrastructure::codec::PacketObserver;
use std::fmt::Write;
use tracing::{info, warn};

/// Logs each decoded item; invalid ones at warn level with the reason and
/// their offset in the packet, which lines up with the `--raw` dump.
#[derive(Debug)]
pub struct LoggingObserver {
    max_name_len: usize,
    pub queries: usize,
    pub answers: usize,
}

impl LoggingObserver {
    /// `max_name_len` bounds rendered raw payloads like decoded names.
    pub fn new(max_name_len: usize) -> Self {
        Self {
            max_name_len,
            queries: 0,
            answers: 0,
        }
    }
}

impl PacketObserver for LoggingObserver {
    fn on_query(&mut self, query: Query) {
        self.queries += 1;
        match &query.error {
            None => info!(
                name = %query.name,
                qtype = %query.qtype,
                unicast = query.unicast_response,
                "query"
            ),
            Some(error) => warn!(
                name = %query.name,
                qtype = %query.qtype,
                offset = format_args!("{:04x}", query.offset),
                error = %error,
                "malformed query"
            ),
        }
    }

    fn on_answer(&mut self, answer: Answer) {
        self.answers += 1;
        let rdata = answer.rdata.render(self.max_name_len);
        match &answer.error {
            None => info!(
                name = %answer.name,
                rrtype = %answer.rrtype,
                ttl = answer.ttl,
                flush = answer.cache_flush,
                rdata = %rdata,
                "record"
            ),
            Some(error) => warn!(
                name = %answer.name,
                rrtype = %answer.rrtype,
                offset = format_args!("{:04x}", answer.offset),
                rdata = %rdata,
                error = %error,
                "malformed record"
            ),
        }
    }
}

/// Sixteen bytes per line: offset, hex, printable ASCII.
pub fn hex_dump(bytes: &[u8]) -> String {
    let mut out = String::new();
    for (row, chunk) in bytes.chunks(16).enumerate() {
        let _ = write!(out, "{:04x}  ", row * 16);
        for byte in chunk {
            let _ = write!(out, "{:02x} ", byte);
        }
        for _ in chunk.len()..16 {
            out.push_str("   ");
        }
        out.push(' ');
        out.extend(chunk.iter().map(|&b| {
            if b.is_ascii_graphic() || b == b' ' {
                b as char
            } else {
                '.'
            }
        }));
        out.push('\n');
    }
    out
}
