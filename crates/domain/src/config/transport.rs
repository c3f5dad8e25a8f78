use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddrV4};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TransportConfig {
    #[serde(default = "default_multicast_group")]
    pub multicast_group: Ipv4Addr,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Local interface address used to join the group; unspecified lets the OS pick.
    #[serde(default = "default_interface")]
    pub interface: Ipv4Addr,

    #[serde(default = "default_multicast_ttl")]
    pub multicast_ttl: u32,

    /// Deliver our own multicast datagrams back to local listeners.
    #[serde(default = "default_true")]
    pub multicast_loop: bool,
}

impl TransportConfig {
    pub fn group_addr(&self) -> SocketAddrV4 {
        SocketAddrV4::new(self.multicast_group, self.port)
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            multicast_group: default_multicast_group(),
            port: default_port(),
            interface: default_interface(),
            multicast_ttl: default_multicast_ttl(),
            multicast_loop: true,
        }
    }
}

fn default_multicast_group() -> Ipv4Addr {
    Ipv4Addr::new(224, 0, 0, 251)
}

fn default_port() -> u16 {
    5353
}

fn default_interface() -> Ipv4Addr {
    Ipv4Addr::UNSPECIFIED
}

fn default_multicast_ttl() -> u32 {
    255
}

fn default_true() -> bool {
    true
}
