use super::CountingRepository;
use hickory_proto::op::Message;
use hickory_proto::rr::RData;
use hickory_server::ServerFuture;
use sqlx::SqlitePool;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio_util::sync::CancellationToken;
use uberdns_application::cache::CacheStore;
use uberdns_application::ports::{AuthoritativeRepository, NoopResolutionMetrics};
use uberdns_application::use_cases::{ApplyCacheControlUseCase, ResolveQueryUseCase};
use uberdns_domain::RecordType;
use uberdns_infrastructure::dns::forwarding::MessageBuilder;
use uberdns_infrastructure::dns::transport::UdpTransport;
use uberdns_infrastructure::dns::{DnsServerHandler, FailoverUpstreamResolver};

/// A DNS server on an ephemeral UDP port wired the same way as the binary,
/// minus the invalidation bus and jobs.
pub struct TestServer {
    addr: SocketAddr,
    pub cache: Arc<CacheStore>,
    pub repository: Arc<CountingRepository>,
    pub apply_cache_control: Arc<ApplyCacheControlUseCase>,
    shutdown: CancellationToken,
}

impl TestServer {
    pub async fn start(pool: SqlitePool, upstreams: Vec<SocketAddr>, timeout: Duration) -> Self {
        let repository = Arc::new(CountingRepository::new(pool));
        let domains = repository.load_domains().await.unwrap();
        let cache = Arc::new(CacheStore::spawn(domains));

        let upstream = Arc::new(
            FailoverUpstreamResolver::new(upstreams, timeout, Arc::new(NoopResolutionMetrics))
                .unwrap(),
        );
        let resolve_query = Arc::new(ResolveQueryUseCase::new(
            cache.clone(),
            repository.clone(),
            upstream,
            Arc::new(NoopResolutionMetrics),
        ));
        let apply_cache_control = Arc::new(ApplyCacheControlUseCase::new(cache.clone()));

        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let addr = socket.local_addr().unwrap();
        let mut server = ServerFuture::new(DnsServerHandler::new(resolve_query));
        server.register_socket(socket);

        let shutdown = CancellationToken::new();
        let token = shutdown.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = server.block_until_done() => {}
                _ = token.cancelled() => {}
            }
        });

        Self {
            addr,
            cache,
            repository,
            apply_cache_control,
            shutdown,
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn client(&self) -> TestClient {
        TestClient::new(self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

pub struct TestClient {
    transport: UdpTransport,
}

impl TestClient {
    pub fn new(addr: SocketAddr) -> Self {
        Self {
            transport: UdpTransport::new(addr),
        }
    }

    pub async fn query(&self, name: &str, record_type: RecordType) -> Message {
        let (id, bytes) = MessageBuilder::build_query(name, record_type).unwrap();
        let reply = self
            .transport
            .exchange(&bytes, Duration::from_secs(3))
            .await
            .unwrap();
        let message = Message::from_vec(&reply).unwrap();
        assert_eq!(message.id(), id);
        message
    }
}

/// IPv4 addresses in the answer section, in order.
pub fn a_addresses(message: &Message) -> Vec<Ipv4Addr> {
    message
        .answers()
        .iter()
        .filter_map(|record| match record.data() {
            Some(RData::A(a)) => Some(a.0),
            _ => None,
        })
        .collect()
}
