#![allow(dead_code)]

mod test_server;
mod upstream_mock;

pub use fixtures::{memory_pool, seed_domain, seed_record, settle, CountingRepository};
pub use test_server::{a_addresses, TestClient, TestServer};
pub use upstream_mock::MockUpstream;
