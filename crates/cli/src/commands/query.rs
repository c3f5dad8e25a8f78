use crate::observer::LoggingObserver;
use mdns_wire_domain::{Config, Query, RecordType};
use mdns_wire_infrastructure::codec::{read_header, PacketCodec};
use mdns_wire_infrastructure::transport::{DatagramTransport, MulticastTransport};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info};

pub async fn run(
    config: &Config,
    name: &str,
    qtype: RecordType,
    unicast: bool,
    wait_secs: u64,
) -> anyhow::Result<()> {
    let transport = MulticastTransport::bind(&config.transport)?;

    let observer = LoggingObserver::new(config.codec.max_name_len);
    let mut codec = PacketCodec::with_observer(&config.codec, observer);
    codec.add_query(&Query::new(name, qtype).with_unicast_response(unicast))?;
    transport.send(codec.packet()).await?;
    info!(name, qtype = %qtype, unicast, "Query sent");

    let deadline = Instant::now() + Duration::from_secs(wait_secs);
    let mut buf = vec![0u8; codec.capacity() + 1];

    while let Ok(received) = tokio::time::timeout_at(deadline, transport.recv(&mut buf)).await {
        let (len, from) = received?;
        let datagram = &buf[..len];
        if !is_response(datagram) {
            debug!(from = %from, len, "Skipping non-response datagram");
            continue;
        }
        if let Some(header) = codec.parse(datagram) {
            info!(from = %from, header = %header, "reply");
        }
    }

    info!(records = codec.observer().answers, "Wait window closed");
    Ok(())
}

/// True when `datagram` carries a usable response header. Questions,
/// including our own one looped back by the multicast socket, are not.
fn is_response(datagram: &[u8]) -> bool {
    read_header(datagram).is_ok_and(|header| header.is_answer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdns_wire_domain::{Answer, CodecConfig, RData};
    use std::net::Ipv4Addr;

    #[test]
    fn test_own_question_is_not_a_response() {
        let mut codec = PacketCodec::new(&CodecConfig::default());
        codec
            .add_query(&Query::new("printer.local", RecordType::A))
            .unwrap();

        assert!(!is_response(codec.packet()));
    }

    #[test]
    fn test_answer_packet_is_a_response() {
        let mut codec = PacketCodec::new(&CodecConfig::default());
        codec
            .add_answer(&Answer::new(
                "printer.local",
                RData::A(Ipv4Addr::new(192, 168, 1, 40)),
                120,
            ))
            .unwrap();

        assert!(is_response(codec.packet()));
    }

    #[test]
    fn test_rejected_header_is_not_a_response() {
        let mut packet = [0u8; 16];
        packet[2] = 0x84;
        packet[3] = 0x03;

        assert!(!is_response(&packet));
        assert!(!is_response(&packet[..6]));
    }
}
