use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::Client;
use tokio::sync::Mutex;
use tracing::debug;
use uberdns_application::ports::InvalidationBus;
use uberdns_domain::DomainError;

/// Shared Redis client plus a lazily opened connection for health pings.
pub struct RedisInvalidationBus {
    client: Client,
    connection: Mutex<Option<MultiplexedConnection>>,
}

impl RedisInvalidationBus {
    /// Validates the URL; no connection is made until first use.
    pub fn new(url: &str) -> Result<Self, DomainError> {
        let client = Client::open(url)
            .map_err(|e| DomainError::InvalidationBus(format!("Invalid Redis URL: {}", e)))?;
        Ok(Self {
            client,
            connection: Mutex::new(None),
        })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl InvalidationBus for RedisInvalidationBus {
    async fn ping(&self) -> Result<(), DomainError> {
        let mut guard = self.connection.lock().await;

        let mut connection = match guard.as_ref() {
            Some(connection) => connection.clone(),
            None => {
                let connection = self
                    .client
                    .get_multiplexed_async_connection()
                    .await
                    .map_err(|e| DomainError::InvalidationBus(e.to_string()))?;
                *guard = Some(connection.clone());
                connection
            }
        };

        let result: redis::RedisResult<String> =
            redis::cmd("PING").query_async(&mut connection).await;
        match result {
            Ok(pong) => {
                debug!(reply = %pong, "Invalidation bus ping");
                Ok(())
            }
            Err(e) => {
                // Reconnect on the next ping.
                *guard = None;
                Err(DomainError::InvalidationBus(e.to_string()))
            }
        }
    }
}
