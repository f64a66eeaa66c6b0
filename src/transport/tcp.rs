use async_trait::async_trait;
use bytes::Bytes;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

use super::DnsTransport;
use crate::DnsError;

/// DNS over TCP: every message is preceded by its length as a big-endian
/// `u16`. One connection per query, closed once the reply is read.
#[derive(Default)]
pub struct TcpTransport;

impl TcpTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DnsTransport for TcpTransport {
    async fn send(&self, message: &[u8], address: &str, port: u16) -> Result<Bytes, DnsError> {
        let mut stream = TcpStream::connect((address, port)).await?;
        debug!(server = address, port, "TCP connection established");

        send_with_length_prefix(&mut stream, message).await?;
        debug!(message_len = message.len(), "TCP query sent");

        let response = read_with_length_prefix(&mut stream).await?;
        debug!(response_len = response.len(), "TCP response received");

        stream.shutdown().await.ok();

        Ok(response.into())
    }

    fn protocol_name(&self) -> &'static str {
        "TCP"
    }
}

pub(crate) async fn send_with_length_prefix<S>(
    stream: &mut S,
    message: &[u8],
) -> Result<(), DnsError>
where
    S: AsyncWriteExt + Unpin,
{
    let length = u16::try_from(message.len()).map_err(|_| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("message of {} bytes exceeds the TCP frame limit", message.len()),
        )
    })?;

    stream.write_u16(length).await?;
    stream.write_all(message).await?;
    stream.flush().await?;

    Ok(())
}

/// Read one frame and return it without the length prefix.
pub(crate) async fn read_with_length_prefix<S>(stream: &mut S) -> Result<Vec<u8>, DnsError>
where
    S: AsyncReadExt + Unpin,
{
    let response_len = stream.read_u16().await? as usize;

    let mut response = vec![0u8; response_len];
    stream.read_exact(&mut response).await?;

    Ok(response)
}
