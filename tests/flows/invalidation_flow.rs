#[path = "../common/mod.rs"]
mod common;

use common::{a_addresses, memory_pool, seed_domain, seed_record, settle, MockUpstream, TestServer};
use std::net::Ipv4Addr;
use std::time::Duration;
use uberdns_domain::{CacheControlMessage, DnsRecord, RecordType};

async fn server() -> (TestServer, MockUpstream) {
    let pool = memory_pool().await;
    seed_domain(&pool, 1, "example.com").await;
    seed_record(&pool, 10, "www", "10.0.0.5", 300, 1).await;
    let upstream = MockUpstream::silent().await;
    let server = TestServer::start(pool, vec![upstream.addr()], Duration::from_millis(200)).await;
    (server, upstream)
}

fn payload(action: &str, record: &DnsRecord) -> String {
    let message = CacheControlMessage::for_record(action, record).unwrap();
    serde_json::to_string(&message).unwrap()
}

#[tokio::test]
async fn test_purge_removes_cached_record_before_its_ttl() {
    let (server, _upstream) = server().await;
    let client = server.client();

    client.query("www.example.com.", RecordType::A).await;
    settle().await;
    assert!(server.cache.authoritative_records.get(10).is_some());

    let purge = payload("purge", &DnsRecord::new(10, "www", "10.0.0.5", 300, 1));
    server.apply_cache_control.execute(&purge).unwrap();
    settle().await;

    assert!(server.cache.authoritative_records.get(10).is_none());

    // Next query goes back to the database
    client.query("www.example.com.", RecordType::A).await;
    assert_eq!(server.repository.find_calls(), 2);
}

#[tokio::test]
async fn test_create_message_is_served_without_database() {
    let (server, _upstream) = server().await;

    let create = payload("create", &DnsRecord::new(20, "api", "10.0.0.20", 300, 1));
    server.apply_cache_control.execute(&create).unwrap();
    settle().await;

    let response = server.client().query("api.example.com.", RecordType::A).await;

    assert_eq!(a_addresses(&response), vec![Ipv4Addr::new(10, 0, 0, 20)]);
    assert_eq!(server.repository.find_calls(), 0);
}

#[tokio::test]
async fn test_purge_of_uncached_record_is_a_no_op() {
    let (server, _upstream) = server().await;

    let purge = payload("purge", &DnsRecord::new(99, "gone", "10.0.0.99", 300, 1));
    server.apply_cache_control.execute(&purge).unwrap();
    settle().await;

    assert!(server.cache.authoritative_records.is_empty());
}
