//! mDNS multicast socket (RFC 6762 §3): bound to the shared port, joined to
//! the link-local group, sending to the group by default.

use super::{DatagramTransport, TransportError};
use async_trait::async_trait;
use mdns_wire_domain::TransportConfig;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use tokio::net::UdpSocket;
use tracing::{debug, info};

pub struct MulticastTransport {
    socket: UdpSocket,
    group: SocketAddr,
}

impl MulticastTransport {
    /// Binds the mDNS port on all interfaces and joins the multicast group on
    /// `config.interface` (the unspecified address lets the OS choose).
    ///
    /// Must be called inside a tokio runtime.
    pub fn bind(config: &TransportConfig) -> Result<Self, TransportError> {
        let group = config.group_addr();
        let bind_addr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, config.port));

        let socket = create_multicast_socket(config, bind_addr)?;
        let std_socket: std::net::UdpSocket = socket.into();
        let socket = UdpSocket::from_std(std_socket).map_err(TransportError::Configure)?;

        info!(
            group = %group,
            interface = %config.interface,
            ttl = config.multicast_ttl,
            "Joined mDNS multicast group"
        );

        Ok(Self {
            socket,
            group: SocketAddr::V4(group),
        })
    }

    pub fn group(&self) -> SocketAddr {
        self.group
    }
}

fn create_multicast_socket(
    config: &TransportConfig,
    bind_addr: SocketAddr,
) -> Result<Socket, TransportError> {
    let socket = Socket::new(Domain::IPV4, Type::DGRAM, Some(Protocol::UDP))
        .map_err(TransportError::Configure)?;
    socket
        .set_reuse_address(true)
        .map_err(TransportError::Configure)?;
    #[cfg(unix)]
    socket
        .set_reuse_port(true)
        .map_err(TransportError::Configure)?;
    socket
        .bind(&bind_addr.into())
        .map_err(|source| TransportError::Bind {
            addr: bind_addr,
            source,
        })?;

    socket
        .join_multicast_v4(&config.multicast_group, &config.interface)
        .map_err(TransportError::Configure)?;
    socket
        .set_multicast_ttl_v4(config.multicast_ttl)
        .map_err(TransportError::Configure)?;
    socket
        .set_multicast_loop_v4(config.multicast_loop)
        .map_err(TransportError::Configure)?;
    if !config.interface.is_unspecified() {
        socket
            .set_multicast_if_v4(&config.interface)
            .map_err(TransportError::Configure)?;
    }
    socket
        .set_nonblocking(true)
        .map_err(TransportError::Configure)?;
    Ok(socket)
}

#[async_trait]
impl DatagramTransport for MulticastTransport {
    async fn recv(&self, buf: &mut [u8]) -> Result<(usize, SocketAddr), TransportError> {
        self.socket.recv_from(buf).await.map_err(TransportError::Recv)
    }

    async fn send(&self, packet: &[u8]) -> Result<usize, TransportError> {
        self.send_to(packet, self.group).await
    }

    async fn send_to(&self, packet: &[u8], addr: SocketAddr) -> Result<usize, TransportError> {
        let sent = self
            .socket
            .send_to(packet, addr)
            .await
            .map_err(|source| TransportError::Send { addr, source })?;
        debug!(dest = %addr, bytes_sent = sent, "mDNS packet sent");
        Ok(sent)
    }

    fn local_addr(&self) -> Option<SocketAddr> {
        self.socket.local_addr().ok()
    }

    fn protocol_name(&self) -> &'static str {
        "mDNS"
    }
}
