//! Sending encoded queries to a server.
//!
//! [`TransportSelector`] decides how a buffer travels: anything longer than
//! its threshold goes over TCP, everything else over UDP on the socket family
//! the server address implies. The default threshold is 64 bytes, well below
//! the 512-byte UDP limit standard resolvers use; pass 512 to
//! [`TransportSelector::new`] for standard behavior.
//!
//! There is no timeout: a server that never answers suspends the send forever.

use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;

use crate::DnsError;

pub mod tcp;
pub mod udp;

pub use tcp::TcpTransport;
pub use udp::{IpFamily, UdpTransport};

pub const DEFAULT_SERVER: &str = "1.1.1.1";
pub const DEFAULT_PORT: u16 = 53;
pub const DEFAULT_TCP_THRESHOLD: usize = 64;

#[async_trait]
pub trait DnsTransport: Send + Sync {
    /// Send one message and return the payload of the reply.
    async fn send(&self, message: &[u8], address: &str, port: u16) -> Result<Bytes, DnsError>;

    fn protocol_name(&self) -> &'static str;
}

pub enum Transport {
    Udp(UdpTransport),
    Tcp(TcpTransport),
}

impl Transport {
    pub async fn send(
        &self,
        message: &[u8],
        address: &str,
        port: u16,
    ) -> Result<Bytes, DnsError> {
        match self {
            Self::Udp(t) => DnsTransport::send(t, message, address, port).await,
            Self::Tcp(t) => DnsTransport::send(t, message, address, port).await,
        }
    }

    pub fn protocol_name(&self) -> &'static str {
        match self {
            Self::Udp(t) => t.protocol_name(),
            Self::Tcp(t) => t.protocol_name(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Udp(IpFamily),
    Tcp,
}

#[derive(Debug, Clone, Copy)]
pub struct TransportSelector {
    tcp_threshold: usize,
}

impl Default for TransportSelector {
    fn default() -> Self {
        Self::new(DEFAULT_TCP_THRESHOLD)
    }
}

impl TransportSelector {
    pub fn new(tcp_threshold: usize) -> Self {
        Self { tcp_threshold }
    }

    pub fn tcp_threshold(&self) -> usize {
        self.tcp_threshold
    }

    pub fn route(&self, message_len: usize, address: &str) -> Route {
        if message_len > self.tcp_threshold {
            Route::Tcp
        } else if address.contains(':') {
            Route::Udp(IpFamily::V6)
        } else {
            Route::Udp(IpFamily::V4)
        }
    }

    pub fn transport(route: Route) -> Transport {
        match route {
            Route::Udp(family) => Transport::Udp(UdpTransport::new(family)),
            Route::Tcp => Transport::Tcp(TcpTransport::new()),
        }
    }

    pub async fn send(
        &self,
        message: &[u8],
        address: &str,
        port: u16,
    ) -> Result<Bytes, DnsError> {
        let transport = Self::transport(self.route(message.len(), address));
        debug!(
            protocol = transport.protocol_name(),
            len = message.len(),
            threshold = self.tcp_threshold,
            "selected transport"
        );

        transport.send(message, address, port).await
    }
}
