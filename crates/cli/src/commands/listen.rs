use crate::observer::{hex_dump, LoggingObserver};
use mdns_wire_domain::Config;
use mdns_wire_infrastructure::codec::PacketCodec;
use mdns_wire_infrastructure::transport::{DatagramTransport, MulticastTransport};
use tracing::{debug, error, info};

pub async fn run(config: &Config, raw: bool) -> anyhow::Result<()> {
    let transport = MulticastTransport::bind(&config.transport)?;
    let observer = LoggingObserver::new(config.codec.max_name_len);
    let mut codec = PacketCodec::with_observer(&config.codec, observer);
    let mut buf = vec![0u8; codec.capacity() + 1];

    info!(group = %transport.group(), "Listening, Ctrl-C to stop");

    loop {
        tokio::select! {
            received = transport.recv(&mut buf) => {
                let (len, from) = match received {
                    Ok(received) => received,
                    Err(e) => {
                        error!(error = %e, "Receive failed");
                        continue;
                    }
                };
                let datagram = &buf[..len];
                if raw {
                    info!(from = %from, len, "datagram\n{}", hex_dump(datagram));
                }
                match codec.parse(datagram) {
                    Some(header) => info!(from = %from, header = %header, "packet"),
                    None => debug!(from = %from, len, "Ignored datagram"),
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    let seen = codec.observer();
    info!(queries = seen.queries, records = seen.answers, "Stopped");
    Ok(())
}
