use futures::StreamExt;
use redis::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use uberdns_application::use_cases::ApplyCacheControlUseCase;

/// Long-lived subscriber on the cache-control channel.
///
/// Each message is applied on its own; a message that fails to decode is
/// logged and dropped. When the subscription drops the subscriber waits
/// `reconnect_delay` and subscribes again.
pub struct CacheInvalidationSubscriber {
    client: Client,
    channel: String,
    reconnect_delay: Duration,
    apply: Arc<ApplyCacheControlUseCase>,
    shutdown: CancellationToken,
}

impl CacheInvalidationSubscriber {
    pub fn new(
        client: Client,
        channel: impl Into<String>,
        apply: Arc<ApplyCacheControlUseCase>,
    ) -> Self {
        Self {
            client,
            channel: channel.into(),
            reconnect_delay: Duration::from_secs(1),
            apply,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_reconnect_delay(mut self, delay: Duration) -> Self {
        self.reconnect_delay = delay;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self) {
        info!(channel = %self.channel, "Starting cache invalidation subscriber");

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("CacheInvalidationSubscriber: shutting down");
                        break;
                    }
                    result = self.consume() => {
                        match result {
                            Ok(()) => warn!(channel = %self.channel, "Invalidation subscription closed"),
                            Err(e) => warn!(channel = %self.channel, error = %e, "Invalidation subscription failed"),
                        }
                    }
                }

                tokio::select! {
                    _ = self.shutdown.cancelled() => break,
                    _ = tokio::time::sleep(self.reconnect_delay) => {}
                }
            }
        });
    }

    async fn consume(&self) -> redis::RedisResult<()> {
        let mut pubsub = self.client.get_async_pubsub().await?;
        pubsub.subscribe(&self.channel).await?;
        info!(channel = %self.channel, "Subscribed to cache invalidation channel");

        let mut messages = pubsub.on_message();
        while let Some(message) = messages.next().await {
            match message.get_payload::<String>() {
                Ok(payload) => self.handle_payload(&payload),
                Err(e) => warn!(error = %e, "Dropping non-text invalidation message"),
            }
        }
        Ok(())
    }

    fn handle_payload(&self, payload: &str) {
        match self.apply.execute(payload) {
            Ok(command) => debug!(action = command.as_str(), "Cache control applied"),
            Err(e) => warn!(error = %e, "Dropping invalid cache control message"),
        }
    }
}
