use hickory_server::ServerFuture;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::{TcpListener, UdpSocket};
use tokio_util::sync::CancellationToken;
use tracing::info;
use uberdns_infrastructure::dns::DnsServerHandler;

const TCP_IDLE_TIMEOUT: Duration = Duration::from_secs(10);

pub async fn start_dns_server(
    socket_addr: SocketAddr,
    handler: DnsServerHandler,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    info!(bind_address = %socket_addr, "Starting DNS server");

    let udp_socket = UdpSocket::bind(socket_addr).await?;
    info!(protocol = "UDP", "DNS server listening");

    let tcp_listener = TcpListener::bind(socket_addr).await?;
    info!(protocol = "TCP", "DNS server listening");

    let mut server = ServerFuture::new(handler);
    server.register_socket(udp_socket);
    server.register_listener(tcp_listener, TCP_IDLE_TIMEOUT);

    info!("DNS server ready to accept queries");

    tokio::select! {
        result = server.block_until_done() => result?,
        _ = shutdown.cancelled() => info!("DNS server shutting down"),
    }

    Ok(())
}
