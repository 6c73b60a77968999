//! In-memory [`TableStore`] used by unit and integration tests in place of a
//! live Supabase project.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use models::record::Record;

use crate::errors::ServiceError;
use crate::store::TableStore;

pub struct MemoryStore {
    tables: RwLock<HashMap<String, Vec<Record>>>,
    next_id: AtomicI64,
    calls: AtomicUsize,
    swallow_inserts: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
            calls: AtomicUsize::new(0),
            swallow_inserts: AtomicBool::new(false),
        }
    }

    /// Place a raw record in a table without store bookkeeping, e.g. a
    /// malformed row for translation-failure tests.
    pub async fn seed(&self, table: &str, record: Record) {
        let mut tables = self.tables.write().await;
        tables.entry(table.to_string()).or_default().push(record);
    }

    /// Number of store operations performed so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Make every subsequent insert report zero created rows.
    pub fn swallow_inserts(&self) {
        self.swallow_inserts.store(true, Ordering::SeqCst);
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TableStore for MemoryStore {
    async fn select_all(&self, table: &str) -> Result<Vec<Record>, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let tables = self.tables.read().await;
        Ok(tables.get(table).cloned().unwrap_or_default())
    }

    async fn insert(&self, table: &str, mut record: Record) -> Result<Vec<Record>, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.swallow_inserts.load(Ordering::SeqCst) {
            return Ok(Vec::new());
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        record.insert("id".into(), Value::from(id));
        let mut tables = self.tables.write().await;
        tables.entry(table.to_string()).or_default().push(record.clone());
        Ok(vec![record])
    }
}
