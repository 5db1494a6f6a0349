#[path = "../common/mod.rs"]
mod common;

use common::{a_addresses, memory_pool, seed_domain, seed_record, settle, MockUpstream, TestServer};
use hickory_proto::op::ResponseCode;
use std::net::Ipv4Addr;
use std::time::Duration;
use uberdns_domain::RecordType;

async fn example_com_server(ttl: u32) -> (TestServer, MockUpstream) {
    let pool = memory_pool().await;
    seed_domain(&pool, 1, "example.com").await;
    seed_record(&pool, 10, "www", "10.0.0.5", ttl, 1).await;
    seed_record(&pool, 11, "", "10.0.0.1", ttl, 1).await;

    let upstream = MockUpstream::answering(Ipv4Addr::new(203, 0, 113, 9), 300).await;
    let server = TestServer::start(pool, vec![upstream.addr()], Duration::from_millis(500)).await;
    (server, upstream)
}

// ============================================================================
// Cache before database
// ============================================================================

#[tokio::test]
async fn test_repeat_query_is_served_from_cache() {
    let (server, upstream) = example_com_server(60).await;
    let client = server.client();

    let first = client.query("www.example.com.", RecordType::A).await;
    assert_eq!(a_addresses(&first), vec![Ipv4Addr::new(10, 0, 0, 5)]);
    assert!(first.header().authoritative());
    assert_eq!(first.answers()[0].ttl(), 60);
    settle().await;

    let second = client.query("www.example.com.", RecordType::A).await;
    assert_eq!(a_addresses(&second), vec![Ipv4Addr::new(10, 0, 0, 5)]);
    assert!(second.answers()[0].ttl() <= 60);

    assert_eq!(server.repository.find_calls(), 1);
    assert_eq!(upstream.query_count(), 0);
}

#[tokio::test]
async fn test_expired_record_is_looked_up_again() {
    let (server, _upstream) = example_com_server(1).await;
    let client = server.client();

    client.query("www.example.com.", RecordType::A).await;
    settle().await;
    assert_eq!(server.cache.authoritative_records.len(), 1);

    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert!(server.cache.authoritative_records.get(10).is_none());

    let again = client.query("www.example.com.", RecordType::A).await;
    assert_eq!(a_addresses(&again), vec![Ipv4Addr::new(10, 0, 0, 5)]);
    assert_eq!(server.repository.find_calls(), 2);
}

#[tokio::test]
async fn test_apex_and_case_preserving_lookup() {
    let (server, _upstream) = example_com_server(60).await;
    let client = server.client();

    let apex = client.query("example.com.", RecordType::A).await;
    assert_eq!(a_addresses(&apex), vec![Ipv4Addr::new(10, 0, 0, 1)]);

    // Names are matched exactly as received
    let upper = client.query("WWW.example.com.", RecordType::A).await;
    assert!(upper.answers().is_empty());
}

// ============================================================================
// No answer
// ============================================================================

#[tokio::test]
async fn test_unknown_host_in_authoritative_zone_is_nodata() {
    let (server, upstream) = example_com_server(60).await;

    let response = server.client().query("mail.example.com.", RecordType::A).await;

    assert_eq!(response.response_code(), ResponseCode::NoError);
    assert!(response.header().authoritative());
    assert!(response.answers().is_empty());
    assert_eq!(upstream.query_count(), 0);
}

#[tokio::test]
async fn test_record_without_address_is_nodata() {
    let pool = memory_pool().await;
    seed_domain(&pool, 1, "example.com").await;
    seed_record(&pool, 10, "www", "", 60, 1).await;
    let upstream = MockUpstream::silent().await;
    let server = TestServer::start(pool, vec![upstream.addr()], Duration::from_millis(200)).await;

    let response = server.client().query("www.example.com.", RecordType::A).await;
    settle().await;

    assert!(response.answers().is_empty());
    assert!(server.cache.authoritative_records.is_empty());
}

// ============================================================================
// Forwarded types
// ============================================================================

#[tokio::test]
async fn test_non_a_question_for_authoritative_zone_is_forwarded() {
    let (server, upstream) = example_com_server(60).await;

    let response = server.client().query("example.com.", RecordType::MX).await;

    assert_eq!(upstream.query_count(), 1);
    assert!(response.header().authoritative());
    assert_eq!(server.repository.find_calls(), 0);
}
