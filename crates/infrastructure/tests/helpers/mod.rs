#![allow(dead_code)]

mod dns_server_mock;

pub use dns_server_mock::{MockBehavior, MockDnsServer};

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Single-connection in-memory database with the schema applied.
pub async fn create_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    uberdns_infrastructure::database::run_migrations(&pool)
        .await
        .unwrap();

    pool
}
