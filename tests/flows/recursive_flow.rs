#[path = "../common/mod.rs"]
mod common;

use common::{a_addresses, memory_pool, seed_domain, settle, MockUpstream, TestServer};
use std::net::Ipv4Addr;
use std::time::Duration;
use uberdns_domain::RecordType;

#[tokio::test]
async fn test_failover_answer_is_cached_under_top_level_domain() {
    let pool = memory_pool().await;
    seed_domain(&pool, 1, "example.com").await;
    let dead = MockUpstream::silent().await;
    let alive = MockUpstream::answering(Ipv4Addr::new(93, 184, 216, 34), 300).await;
    let server = TestServer::start(
        pool,
        vec![dead.addr(), alive.addr()],
        Duration::from_millis(200),
    )
    .await;
    let client = server.client();

    let response = client.query("www.unknown.org.", RecordType::A).await;
    assert_eq!(a_addresses(&response), vec![Ipv4Addr::new(93, 184, 216, 34)]);
    assert_eq!(response.answers()[0].ttl(), 300);
    assert!(response.header().authoritative());
    settle().await;

    let domain = server
        .cache
        .recursive_domains
        .find_by_name("unknown.org")
        .unwrap();
    let record = server
        .cache
        .recursive_records
        .lookup("www", domain.id)
        .unwrap();
    assert_eq!(record.ip, "93.184.216.34");
    assert_eq!(record.ttl, 300);

    // Second query comes from the recursive cache
    let again = client.query("www.unknown.org.", RecordType::A).await;
    assert_eq!(a_addresses(&again), vec![Ipv4Addr::new(93, 184, 216, 34)]);
    assert_eq!(dead.query_count(), 1);
    assert_eq!(alive.query_count(), 1);
    assert_eq!(server.repository.find_calls(), 0);
}

#[tokio::test]
async fn test_all_upstreams_failing_gives_empty_authoritative_answer() {
    let pool = memory_pool().await;
    let dead_a = MockUpstream::silent().await;
    let dead_b = MockUpstream::silent().await;
    let server = TestServer::start(
        pool,
        vec![dead_a.addr(), dead_b.addr()],
        Duration::from_millis(100),
    )
    .await;

    let response = server.client().query("www.unknown.org.", RecordType::A).await;
    settle().await;

    assert!(response.answers().is_empty());
    assert!(response.header().authoritative());
    assert!(server.cache.recursive_domains.is_empty());
}

#[tokio::test]
async fn test_authoritative_zone_never_reaches_upstream() {
    let pool = memory_pool().await;
    seed_domain(&pool, 1, "example.com").await;
    let upstream = MockUpstream::answering(Ipv4Addr::new(203, 0, 113, 1), 60).await;
    let server = TestServer::start(pool, vec![upstream.addr()], Duration::from_millis(200)).await;

    let response = server.client().query("www.example.com.", RecordType::A).await;

    assert!(response.answers().is_empty());
    assert_eq!(upstream.query_count(), 0);
}
