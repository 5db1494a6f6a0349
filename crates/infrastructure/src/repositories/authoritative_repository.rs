use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::{error, instrument, warn};
use uberdns_application::ports::AuthoritativeRepository;
use uberdns_domain::{DnsRecord, Domain, DomainError};

type DomainRow = (i64, String);
type RecordRow = (i64, String, String, i64, i64);

pub struct SqliteAuthoritativeRepository {
    pool: SqlitePool,
}

impl SqliteAuthoritativeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: RecordRow) -> DnsRecord {
        let (id, name, ip_address, ttl, domain_id) = row;

        let ttl = u32::try_from(ttl).unwrap_or_else(|_| {
            warn!(record_id = id, ttl, "Record TTL out of range, clamping");
            if ttl < 0 {
                0
            } else {
                u32::MAX
            }
        });

        DnsRecord::new(id, name, ip_address, ttl, domain_id)
    }
}

#[async_trait]
impl AuthoritativeRepository for SqliteAuthoritativeRepository {
    #[instrument(skip(self))]
    async fn load_domains(&self) -> Result<Vec<Domain>, DomainError> {
        let rows = sqlx::query_as::<_, DomainRow>("SELECT id, name FROM dns_domain")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to load domains");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(rows
            .into_iter()
            .map(|(id, name)| Domain::new(id, name))
            .collect())
    }

    #[instrument(skip(self))]
    async fn find_record(
        &self,
        name: &str,
        domain_id: i64,
    ) -> Result<Option<DnsRecord>, DomainError> {
        let row = sqlx::query_as::<_, RecordRow>(
            "SELECT id, name, ip_address, ttl, domain_id FROM dns_record
             WHERE name = ? AND domain_id = ?",
        )
        .bind(name)
        .bind(domain_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query record");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Self::row_to_record))
    }
}
