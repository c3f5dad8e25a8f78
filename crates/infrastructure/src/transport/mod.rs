pub mod multicast;
pub mod udp;

use async_trait::async_trait;
use std::net::SocketAddr;
use thiserror::Error;

pub use multicast::MulticastTransport;
pub use udp::UdpTransport;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to configure socket: {0}")]
    Configure(#[source] std::io::Error),

    #[error("Failed to send to {addr}: {source}")]
    Send {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to receive: {0}")]
    Recv(#[source] std::io::Error),
}

/// Datagram socket the codec's packets travel over.
#[async_trait]
pub trait DatagramTransport: Send + Sync {
    /// Waits for the next datagram. Returns its length and sender.
    async fn recv(&self, buf: &mut [u8]) -> Result<(usize, SocketAddr), TransportError>;

    /// Sends `packet` to the transport's default destination.
    async fn send(&self, packet: &[u8]) -> Result<usize, TransportError>;

    /// Sends `packet` to `addr`, e.g. a unicast reply to a querier.
    async fn send_to(&self, packet: &[u8], addr: SocketAddr) -> Result<usize, TransportError>;

    fn local_addr(&self) -> Option<SocketAddr>;

    fn protocol_name(&self) -> &'static str;
}
