use tracing::info;
use tracing_subscriber::EnvFilter;
use uberdns_domain::Config;

/// Crates whose debug output drowns ours.
const QUIET_CRATES: &str = ",hickory_server=warn,hickory_proto=warn,sqlx=warn";

pub fn init_logging(config: &Config) -> anyhow::Result<()> {
    let level = config.logging.level.to_ascii_lowercase();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{level}{QUIET_CRATES}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_ansi(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    info!("Logging initialized at level: {}", level);
    Ok(())
}
