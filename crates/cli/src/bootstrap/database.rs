use sqlx::SqlitePool;
use tracing::{error, info};
use uberdns_domain::config::DatabaseConfig;
use uberdns_infrastructure::database::create_pool;

pub async fn init_database(cfg: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    info!(url = %cfg.url, "Initializing database");

    let pool = create_pool(cfg).await.map_err(|e| {
        error!(error = %e, "Failed to open database");
        anyhow::anyhow!(e)
    })?;

    info!(
        max_connections = cfg.max_connections,
        migrations = cfg.run_migrations,
        "Database initialized"
    );

    Ok(pool)
}
