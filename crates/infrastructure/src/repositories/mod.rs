pub mod authoritative_repository;

pub use authoritative_repository::SqliteAuthoritativeRepository;
