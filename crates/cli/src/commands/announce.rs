use mdns_wire_domain::{Answer, Config, RData};
use mdns_wire_infrastructure::codec::PacketCodec;
use mdns_wire_infrastructure::transport::{DatagramTransport, MulticastTransport};
use std::net::Ipv4Addr;
use tracing::info;

pub async fn run(
    config: &Config,
    name: &str,
    address: Ipv4Addr,
    ttl: u32,
    flush: bool,
) -> anyhow::Result<()> {
    let transport = MulticastTransport::bind(&config.transport)?;

    let record = Answer::new(name, RData::A(address), ttl).with_cache_flush(flush);
    let mut codec = PacketCodec::new(&config.codec);
    codec.add_answer(&record)?;

    let sent = transport.send(codec.packet()).await?;
    if record.is_goodbye() {
        info!(name, address = %address, bytes = sent, "Goodbye sent");
    } else {
        info!(name, address = %address, ttl, bytes = sent, "Announcement sent");
    }
    Ok(())
}
