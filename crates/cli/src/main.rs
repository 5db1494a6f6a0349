//! # uberdns
//!
//! Authoritative DNS for the domains in the database, forwarding resolver for
//! everything else.

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use tokio::signal;
use tokio::task::JoinError;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use uberdns_api::create_api_routes;
use uberdns_domain::{CliOverrides, Config};

#[derive(Parser)]
#[command(name = "uberdns")]
#[command(version)]
#[command(about = "Authoritative and recursive DNS server")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short = 'c', long, default_value = "uberdns.toml")]
    config: String,

    /// Force debug logging
    #[arg(long)]
    debug: bool,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Metrics/debug web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Database URL
    #[arg(long)]
    database_url: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            dns_port: self.dns_port,
            web_port: self.web_port,
            bind_address: self.bind.clone(),
            database_url: self.database_url.clone(),
            debug: self.debug,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(Some(&cli.config), cli.overrides())?;
    bootstrap::init_logging(&config)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        config_file = %cli.config,
        dns_port = config.server.dns_port,
        web_port = config.server.web_port,
        bind = %config.server.bind_address,
        "Starting uberdns"
    );

    let pool = bootstrap::init_database(&config.database).await?;
    let services = di::Services::build(&config, pool).await?;

    let shutdown = CancellationToken::new();
    services.start_background(&config, shutdown.clone()).await?;

    let dns_addr = socket_addr(&config, config.server.dns_port)?;
    let web_addr = socket_addr(&config, config.server.web_port)?;

    let mut dns_task = tokio::spawn(server::start_dns_server(
        dns_addr,
        services.dns_handler(),
        shutdown.clone(),
    ));
    let mut web_task = tokio::spawn(server::start_web_server(
        web_addr,
        create_api_routes(services.api_state()),
        shutdown.clone(),
    ));

    let outcome = tokio::select! {
        _ = shutdown_signal() => Ok(()),
        result = &mut dns_task => task_outcome("DNS server", result),
        result = &mut web_task => task_outcome("Web server", result),
    };

    shutdown.cancel();
    if !dns_task.is_finished() {
        let _ = dns_task.await;
    }
    if !web_task.is_finished() {
        let _ = web_task.await;
    }

    info!("uberdns stopped");
    outcome
}

fn socket_addr(config: &Config, port: u16) -> anyhow::Result<SocketAddr> {
    let ip: IpAddr = config.server.bind_address.parse().map_err(|e| {
        anyhow::anyhow!("Invalid bind address '{}': {}", config.server.bind_address, e)
    })?;
    Ok(SocketAddr::new(ip, port))
}

/// A server task only returns early when it failed.
fn task_outcome(
    name: &str,
    result: Result<anyhow::Result<()>, JoinError>,
) -> anyhow::Result<()> {
    match result {
        Ok(Ok(())) => {
            info!(task = name, "Task finished");
            Ok(())
        }
        Ok(Err(e)) => {
            error!(task = name, error = %e, "Task failed");
            Err(e)
        }
        Err(e) => {
            error!(task = name, error = %e, "Task panicked");
            Err(e.into())
        }
    }
}

/// Wait for SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
