use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio_util::sync::CancellationToken;

/// Upstream resolver stand-in: either answers every question with one A
/// record or never answers at all.
pub struct MockUpstream {
    addr: SocketAddr,
    queries: Arc<AtomicUsize>,
    shutdown: CancellationToken,
}

impl MockUpstream {
    pub async fn answering(ip: Ipv4Addr, ttl: u32) -> Self {
        Self::start(Some((ip, ttl))).await
    }

    pub async fn silent() -> Self {
        Self::start(None).await
    }

    async fn start(answer: Option<(Ipv4Addr, u32)>) -> Self {
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let addr = socket.local_addr().unwrap();
        let queries = Arc::new(AtomicUsize::new(0));
        let shutdown = CancellationToken::new();

        let counter = queries.clone();
        let token = shutdown.clone();
        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    result = socket.recv_from(&mut buf) => {
                        let Ok((len, peer)) = result else { continue };
                        counter.fetch_add(1, Ordering::SeqCst);
                        if let Some(response) = answer.and_then(|a| reply(&buf[..len], a)) {
                            let _ = socket.send_to(&response, peer).await;
                        }
                    }
                }
            }
        });

        Self {
            addr,
            queries,
            shutdown,
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

impl Drop for MockUpstream {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// Echo the question and append one A record pointing back at it.
fn reply(query: &[u8], (ip, ttl): (Ipv4Addr, u32)) -> Option<Vec<u8>> {
    if query.len() < 12 {
        return None;
    }

    let mut response = Vec::with_capacity(query.len() + 16);
    response.extend_from_slice(&query[0..2]);
    response.extend_from_slice(&[0x81, 0x80]);
    response.extend_from_slice(&query[4..6]);
    response.extend_from_slice(&[0x00, 0x01, 0x00, 0x00, 0x00, 0x00]);
    response.extend_from_slice(&query[12..]);

    response.extend_from_slice(&[0xc0, 0x0c, 0x00, 0x01, 0x00, 0x01]);
    response.extend_from_slice(&ttl.to_be_bytes());
    response.extend_from_slice(&[0x00, 0x04]);
    response.extend_from_slice(&ip.octets());

    Some(response)
}
