use async_trait::async_trait;
use configs::Settings;
use models::record::Record;
use tracing::debug;

use crate::errors::ServiceError;

/// Table-level access to the remote store. The server constructs one
/// implementation at startup and injects it into every handler, so tests can
/// swap in [`crate::test_support::MemoryStore`].
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Read every row of `table`.
    async fn select_all(&self, table: &str) -> Result<Vec<Record>, ServiceError>;

    /// Insert one row into `table`, returning the created row(s) as the
    /// store reports them.
    async fn insert(&self, table: &str, record: Record) -> Result<Vec<Record>, ServiceError>;
}

/// Supabase client speaking to the PostgREST endpoint of a project. One
/// shared `reqwest::Client` handles connection reuse; no retries or timeouts
/// beyond the client defaults.
pub struct SupabaseStore {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseStore {
    pub fn new(settings: &Settings) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: settings.supabase_url.trim_end_matches('/').to_string(),
            anon_key: settings.supabase_anon_key.clone(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }
}

#[async_trait]
impl TableStore for SupabaseStore {
    async fn select_all(&self, table: &str) -> Result<Vec<Record>, ServiceError> {
        debug!(table, "select all rows");
        let resp = self
            .http
            .get(self.table_url(table))
            .query(&[("select", "*")])
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .send()
            .await
            .map_err(|e| ServiceError::Store(e.to_string()))?
            .error_for_status()
            .map_err(|e| ServiceError::Store(e.to_string()))?;
        resp.json::<Vec<Record>>()
            .await
            .map_err(|e| ServiceError::Store(e.to_string()))
    }

    async fn insert(&self, table: &str, record: Record) -> Result<Vec<Record>, ServiceError> {
        debug!(table, "insert row");
        let resp = self
            .http
            .post(self.table_url(table))
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            // PostgREST omits the created row unless representation is asked for
            .header("Prefer", "return=representation")
            .json(&record)
            .send()
            .await
            .map_err(|e| ServiceError::Store(e.to_string()))?
            .error_for_status()
            .map_err(|e| ServiceError::Store(e.to_string()))?;
        resp.json::<Vec<Record>>()
            .await
            .map_err(|e| ServiceError::Store(e.to_string()))
    }
}
