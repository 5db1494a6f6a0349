#![allow(dead_code)]

mod mock_ports;

pub use mock_ports::*;

use std::time::Duration;

/// Give spawned jobs and cache writers a chance to run.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(10)).await;
}
