use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::info;

pub async fn start_web_server(
    socket_addr: SocketAddr,
    routes: Router,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let listener = TcpListener::bind(socket_addr).await?;
    info!(bind_address = %socket_addr, "Metrics and debug endpoint listening");

    let app = routes.layer(TraceLayer::new_for_http());

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    info!("Web server stopped");
    Ok(())
}
