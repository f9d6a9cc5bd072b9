use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::store::filter::Filter;
use deadpool_postgres::{Config as PoolConfig, Pool, Runtime};
use serde_json::Value;
use std::time::Duration;
use tokio_postgres::types::ToSql;
use tokio_postgres::NoTls;
use tracing::{debug, info};

/// A raw record leaving the store: the store-assigned identifier already in
/// its string form, plus the document body.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: String,
    pub doc: Value,
}

/// Thin adapter over the backing document store. Each collection is a JSONB
/// document table; records are written and read as whole JSON documents.
pub struct StoreClient {
    pool: Pool,
}

impl StoreClient {
    /// Build the connection pool and verify the store is reachable.
    pub async fn connect(config: &Config) -> Result<Self> {
        let pool = create_pool(&config.database_url, config.pool_max_size)?;

        let client = pool.get().await.map_err(|e| ApiError::ConnectionFailed {
            cause: e.to_string(),
        })?;

        // Simple ping query
        client
            .execute("SELECT 1", &[])
            .await
            .map_err(|e| ApiError::ConnectionFailed {
                cause: format!("Ping failed: {}", e),
            })?;

        info!("Connected to document store");

        Ok(Self { pool })
    }

    /// Verify the store still answers.
    pub async fn ping(&self) -> Result<()> {
        let client = self.pool.get().await.map_err(|e| ApiError::ConnectionFailed {
            cause: e.to_string(),
        })?;

        client
            .execute("SELECT 1", &[])
            .await
            .map_err(|e| ApiError::ConnectionFailed {
                cause: e.to_string(),
            })?;

        Ok(())
    }

    /// Create the document table for each named collection if missing.
    pub async fn ensure_collections(&self, collections: &[&str]) -> Result<()> {
        let client = self.pool.get().await?;

        for collection in collections {
            check_collection(collection)?;
            let sql = format!(
                "CREATE TABLE IF NOT EXISTS {} (id BIGSERIAL PRIMARY KEY, doc JSONB NOT NULL)",
                collection
            );
            client.batch_execute(&sql).await?;
        }

        info!("Ensured {} collections", collections.len());
        Ok(())
    }

    /// Insert a document and return the store-assigned identifier as an
    /// opaque string.
    pub async fn insert(&self, collection: &str, doc: &Value) -> Result<String> {
        check_collection(collection)?;
        let client = self.pool.get().await?;

        let sql = format!("INSERT INTO {} (doc) VALUES ($1) RETURNING id", collection);
        let row = client.query_one(&sql, &[doc]).await?;
        let id: i64 = row.get(0);

        debug!("Inserted document {} into {}", id, collection);
        Ok(id.to_string())
    }

    /// Query a collection. Results follow store iteration order, which is not
    /// guaranteed to be insertion order.
    pub async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        limit: Option<i64>,
    ) -> Result<Vec<Document>> {
        check_collection(collection)?;
        let client = self.pool.get().await?;

        let (where_sql, values) = filter.to_sql();
        let mut sql = format!("SELECT id, doc FROM {}{}", collection, where_sql);

        let limit_value;
        let mut params: Vec<&(dyn ToSql + Sync)> = values
            .iter()
            .map(|v| v as &(dyn ToSql + Sync))
            .collect();

        if let Some(n) = limit {
            limit_value = n;
            sql.push_str(&format!(" LIMIT ${}", params.len() + 1));
            params.push(&limit_value);
        }

        let rows = client.query(&sql, &params).await?;

        debug!("Query on {} returned {} rows", collection, rows.len());

        Ok(rows
            .iter()
            .map(|row| Document {
                id: row.get::<_, i64>(0).to_string(),
                doc: row.get(1),
            })
            .collect())
    }

    /// List collection names present in the store.
    pub async fn list_collections(&self) -> Result<Vec<String>> {
        let client = self.pool.get().await?;

        let rows = client
            .query(
                "SELECT tablename FROM pg_tables WHERE schemaname = 'public' ORDER BY tablename",
                &[],
            )
            .await?;

        Ok(rows.iter().map(|row| row.get(0)).collect())
    }
}

fn create_pool(database_url: &str, max_size: u32) -> Result<Pool> {
    let mut cfg = PoolConfig::new();
    cfg.url = Some(database_url.to_string());

    cfg.pool = Some(deadpool_postgres::PoolConfig {
        max_size: max_size as usize,
        timeouts: deadpool_postgres::Timeouts {
            wait: Some(Duration::from_secs(5)),
            create: Some(Duration::from_secs(5)),
            recycle: Some(Duration::from_secs(5)),
        },
        ..Default::default()
    });

    cfg.create_pool(Some(Runtime::Tokio1), NoTls)
        .map_err(|e| ApiError::Internal(format!("Failed to create pool: {}", e)))
}

fn check_collection(name: &str) -> Result<()> {
    if !is_valid_collection(name) {
        return Err(ApiError::Internal(format!(
            "Invalid collection name: {}",
            name
        )));
    }
    Ok(())
}

/// Collection names are spliced into SQL, so they must be plain lowercase
/// identifiers.
fn is_valid_collection(name: &str) -> bool {
    if name.is_empty() || name.len() > 63 {
        return false;
    }

    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c == '_' => {}
        _ => return false,
    }

    name.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_collection() {
        assert!(is_valid_collection("vehicle"));
        assert!(is_valid_collection("booking"));
        assert!(is_valid_collection("_scratch"));

        assert!(!is_valid_collection("")); // Empty
        assert!(!is_valid_collection("DROP TABLE vehicle; --")); // SQL injection attempt
        assert!(!is_valid_collection("1vehicle")); // Starts with number
        assert!(!is_valid_collection("Vehicle")); // Contains uppercase
    }

    #[test]
    fn test_check_collection_rejects_bad_names() {
        assert!(check_collection("vehicle").is_ok());
        assert!(check_collection("vehicle; DROP TABLE lead").is_err());
    }
}
