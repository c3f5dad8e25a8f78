//! Plain unicast UDP socket with a fixed peer. Used for one-shot legacy
//! queries and for exercising the codec over loopback.

use super::{DatagramTransport, TransportError};
use async_trait::async_trait;
use std::net::SocketAddr;
use tokio::net::UdpSocket;
use tracing::debug;

pub struct UdpTransport {
    socket: UdpSocket,
    peer: SocketAddr,
}

impl UdpTransport {
    /// Binds `local` (port 0 picks an ephemeral port) and sends to `peer`.
    pub async fn bind(local: SocketAddr, peer: SocketAddr) -> Result<Self, TransportError> {
        let socket = UdpSocket::bind(local)
            .await
            .map_err(|source| TransportError::Bind {
                addr: local,
                source,
            })?;
        Ok(Self { socket, peer })
    }

    pub fn peer(&self) -> SocketAddr {
        self.peer
    }
}

#[async_trait]
impl DatagramTransport for UdpTransport {
    async fn recv(&self, buf: &mut [u8]) -> Result<(usize, SocketAddr), TransportError> {
        self.socket.recv_from(buf).await.map_err(TransportError::Recv)
    }

    async fn send(&self, packet: &[u8]) -> Result<usize, TransportError> {
        self.send_to(packet, self.peer).await
    }

    async fn send_to(&self, packet: &[u8], addr: SocketAddr) -> Result<usize, TransportError> {
        let sent = self
            .socket
            .send_to(packet, addr)
            .await
            .map_err(|source| TransportError::Send { addr, source })?;
        debug!(peer = %addr, bytes_sent = sent, "UDP packet sent");
        Ok(sent)
    }

    fn local_addr(&self) -> Option<SocketAddr> {
        self.socket.local_addr().ok()
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_loopback_pair_exchanges_datagrams() {
        let any: SocketAddr = "127.0.0.1:0".parse().unwrap();
        let a = UdpTransport::bind(any, any).await.unwrap();
        let b_addr = {
            let b = UdpTransport::bind(any, a.local_addr().unwrap()).await.unwrap();
            let addr = b.local_addr().unwrap();
            b.send(b"ping").await.unwrap();
            addr
        };

        let mut buf = [0u8; 16];
        let (len, from) = a.recv(&mut buf).await.unwrap();
        assert_eq!(&buf[..len], b"ping");
        assert_eq!(from, b_addr);
        assert_eq!(a.protocol_name(), "UDP");
    }
}
