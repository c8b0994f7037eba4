use std::collections::HashMap;

use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::Document;
use mongodb::{Collection, Database};
use thiserror::Error;
use tokio::sync::RwLock;

use crate::structs::resume::ResumeRecord;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),
    #[cfg(test)]
    #[error("record store unavailable: {0}")]
    Unavailable(String),
}

/// The single-table record store the handlers persist resumes into.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn put(&self, table: &str, record: &ResumeRecord) -> Result<(), StoreError>;

    async fn query_by_key(
        &self,
        table: &str,
        key_name: &str,
        key_value: &str,
    ) -> Result<Vec<ResumeRecord>, StoreError>;

    async fn scan_all(&self, table: &str) -> Result<Vec<ResumeRecord>, StoreError>;
}

/// One collection per table.
#[derive(Clone, Debug)]
pub struct MongoRecordStore {
    database: Database,
}

impl MongoRecordStore {
    pub fn new(database: Database) -> Self {
        MongoRecordStore { database }
    }

    fn collection(&self, table: &str) -> Collection<ResumeRecord> {
        self.database.collection(table)
    }
}

#[async_trait]
impl RecordStore for MongoRecordStore {
    async fn put(&self, table: &str, record: &ResumeRecord) -> Result<(), StoreError> {
        self.collection(table).insert_one(record, None).await?;
        Ok(())
    }

    async fn query_by_key(
        &self,
        table: &str,
        key_name: &str,
        key_value: &str,
    ) -> Result<Vec<ResumeRecord>, StoreError> {
        let mut filter = Document::new();
        filter.insert(key_name, key_value);
        let cursor = self.collection(table).find(filter, None).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn scan_all(&self, table: &str) -> Result<Vec<ResumeRecord>, StoreError> {
        let cursor = self.collection(table).find(None, None).await?;
        Ok(cursor.try_collect().await?)
    }
}

/// In-process tables, kept in insertion order.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    tables: RwLock<HashMap<String, Vec<ResumeRecord>>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self, table: &str) -> usize {
        self.tables.read().await.get(table).map_or(0, Vec::len)
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn put(&self, table: &str, record: &ResumeRecord) -> Result<(), StoreError> {
        self.tables
            .write()
            .await
            .entry(table.to_owned())
            .or_default()
            .push(record.clone());
        Ok(())
    }

    async fn query_by_key(
        &self,
        table: &str,
        key_name: &str,
        key_value: &str,
    ) -> Result<Vec<ResumeRecord>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .get(table)
            .map(|records| {
                records
                    .iter()
                    .filter(|record| record.get(key_name) == Some(key_value))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn scan_all(&self, table: &str) -> Result<Vec<ResumeRecord>, StoreError> {
        Ok(self.tables.read().await.get(table).cloned().unwrap_or_default())
    }
}
