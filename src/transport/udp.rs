use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::net::UdpSocket;
use tracing::debug;

use super::DnsTransport;
use crate::DnsError;

const MAX_UDP_RESPONSE_SIZE: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpFamily {
    V4,
    V6,
}

/// Plain datagrams, no framing. A fresh socket is bound for every send.
pub struct UdpTransport {
    family: IpFamily,
}

impl UdpTransport {
    pub fn new(family: IpFamily) -> Self {
        Self { family }
    }

    fn bind_addr(&self) -> SocketAddr {
        match self.family {
            IpFamily::V4 => (Ipv4Addr::UNSPECIFIED, 0).into(),
            IpFamily::V6 => (Ipv6Addr::UNSPECIFIED, 0).into(),
        }
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(&self, message: &[u8], address: &str, port: u16) -> Result<Bytes, DnsError> {
        let socket = UdpSocket::bind(self.bind_addr()).await?;

        let bytes_sent = socket.send_to(message, (address, port)).await?;
        debug!(
            server = address,
            port,
            bytes_sent,
            family = ?self.family,
            "UDP query sent"
        );

        // The first datagram to arrive is taken as the reply
        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
        let (bytes_received, from) = socket.recv_from(&mut recv_buf).await?;
        recv_buf.truncate(bytes_received);

        debug!(%from, bytes_received, "UDP response received");

        Ok(recv_buf.into())
    }

    fn protocol_name(&self) -> &'static str {
        match self.family {
            IpFamily::V4 => "UDP4",
            IpFamily::V6 => "UDP6",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binds_matching_family() {
        assert!(UdpTransport::new(IpFamily::V4).bind_addr().is_ipv4());
        assert!(UdpTransport::new(IpFamily::V6).bind_addr().is_ipv6());
        assert_eq!(UdpTransport::new(IpFamily::V6).protocol_name(), "UDP6");
    }
}
