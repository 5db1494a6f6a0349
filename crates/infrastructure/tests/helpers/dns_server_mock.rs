use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// How the mock upstream reacts to a query.
#[derive(Debug, Clone, Copy)]
pub enum MockBehavior {
    /// One A record for the question name.
    Answer { ip: Ipv4Addr, ttl: u32 },
    /// NXDOMAIN with an empty answer section.
    NxDomain,
    /// Never reply, so the client times out.
    Silent,
}

/// Minimal UDP DNS server answering every query the same way.
pub struct MockDnsServer {
    addr: SocketAddr,
    queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// Bind on an ephemeral localhost port.
    pub async fn start(behavior: MockBehavior) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;
        let queries = Arc::new(AtomicUsize::new(0));
        let counter = queries.clone();

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            counter.fetch_add(1, Ordering::SeqCst);
                            if let Some(response) = Self::build_response(&buf[..len], behavior) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    fn build_response(query: &[u8], behavior: MockBehavior) -> Option<Vec<u8>> {
        if query.len() < 12 {
            return None;
        }

        let (rcode, answer) = match behavior {
            MockBehavior::Silent => return None,
            MockBehavior::NxDomain => (0x03, None),
            MockBehavior::Answer { ip, ttl } => (0x00, Some((ip, ttl))),
        };

        let mut response = Vec::with_capacity(512);

        // Transaction ID
        response.extend_from_slice(&query[0..2]);

        // QR=1, RD=1 / RA=1, RCODE
        response.push(0x81);
        response.push(0x80 | rcode);

        // Questions count (from query)
        response.extend_from_slice(&query[4..6]);

        // Answers count
        response.extend_from_slice(&[0x00, u8::from(answer.is_some())]);

        // Authority / additional
        response.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);

        // Question section (rest of query)
        response.extend_from_slice(&query[12..]);

        if let Some((ip, ttl)) = answer {
            response.extend_from_slice(&[
                0xc0, 0x0c, // Name pointer to question
                0x00, 0x01, // Type A
                0x00, 0x01, // Class IN
            ]);
            response.extend_from_slice(&ttl.to_be_bytes());
            response.extend_from_slice(&[0x00, 0x04]);
            response.extend_from_slice(&ip.octets());
        }

        Some(response)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
