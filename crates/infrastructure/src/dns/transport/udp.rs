use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};
use uberdns_domain::DomainError;

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP to one upstream. A fresh ephemeral socket is used per query.
#[derive(Debug, Clone)]
pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    /// Send `message_bytes` and wait for one datagram back from the server.
    /// `timeout` bounds the whole exchange.
    pub async fn exchange(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<Vec<u8>, DomainError> {
        let timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        tokio::time::timeout(timeout, self.send_and_receive(message_bytes))
            .await
            .map_err(|_| DomainError::QueryTimeout(timeout_ms))?
    }

    async fn send_and_receive(&self, message_bytes: &[u8]) -> Result<Vec<u8>, DomainError> {
        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr: SocketAddr = if self.server_addr.is_ipv4() {
            SocketAddr::from(([0, 0, 0, 0], 0))
        } else {
            SocketAddr::from(([0u16; 8], 0))
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to bind UDP socket: {}", e)))?;

        let bytes_sent = socket
            .send_to(message_bytes, self.server_addr)
            .await
            .map_err(|e| self.failed(format!("send failed: {}", e)))?;

        debug!(server = %self.server_addr, bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
        loop {
            let (bytes_received, from_addr) = socket
                .recv_from(&mut recv_buf)
                .await
                .map_err(|e| self.failed(format!("receive failed: {}", e)))?;

            // Validate response came from expected server
            if from_addr != self.server_addr {
                warn!(
                    expected = %self.server_addr,
                    received_from = %from_addr,
                    "UDP response from unexpected source"
                );
                continue;
            }

            recv_buf.truncate(bytes_received);
            debug!(server = %self.server_addr, bytes_received, "UDP response received");
            return Ok(recv_buf);
        }
    }

    fn failed(&self, reason: String) -> DomainError {
        DomainError::UpstreamFailed {
            server: self.server_addr.to_string(),
            reason,
        }
    }
}
