//! mDNS wire infrastructure: the packet codec and the UDP transports that
//! carry its bytes.
pub mod codec;
pub mod transport;
