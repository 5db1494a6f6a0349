//! Redis pub/sub transport for cache-control messages.
pub mod redis_bus;
pub mod subscriber;

pub use redis_bus::RedisInvalidationBus;
pub use subscriber::CacheInvalidationSubscriber;
