//! In-memory local repository implementation.
//!
//! This module provides a local implementation of the repository trait
//! suitable for unit testing and local development. All data is stored in
//! memory using HashMap structures, providing fast, deterministic, and
//! isolated execution.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::api::{RecordId, StoredRecord, UserId};
use crate::db::repository::{CollectionRepository, RepositoryError, RepositoryResult};
use crate::models::OwnedRecord;

/// In-memory local repository.
///
/// Collections live in a `HashMap` keyed by user, behind an `RwLock`, making
/// this implementation ideal for tests that need isolation and speed.
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    collections: HashMap<UserId, Vec<StoredRecord>>,

    // ID counter
    next_record_id: i64,

    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            collections: HashMap::new(),
            next_record_id: 1,
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        let mut data = self.data.write().unwrap();
        data.is_healthy = healthy;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        let mut data = self.data.write().unwrap();
        *data = LocalData {
            is_healthy: data.is_healthy,
            ..Default::default()
        };
    }

    /// Number of records stored for a user.
    pub fn record_count(&self, user_id: &UserId) -> usize {
        self.data
            .read()
            .unwrap()
            .collections
            .get(user_id)
            .map(|records| records.len())
            .unwrap_or(0)
    }

    fn check_health(&self) -> RepositoryResult<()> {
        if self.data.read().unwrap().is_healthy {
            Ok(())
        } else {
            Err(RepositoryError::connection("local repository marked unhealthy"))
        }
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CollectionRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().unwrap().is_healthy)
    }

    async fn fetch_owned_records(&self, user_id: &UserId) -> RepositoryResult<Vec<OwnedRecord>> {
        self.check_health()?;
        let data = self.data.read().unwrap();
        Ok(data
            .collections
            .get(user_id)
            .map(|records| records.iter().map(|s| s.record.clone()).collect())
            .unwrap_or_default())
    }

    async fn fetch_collection(&self, user_id: &UserId) -> RepositoryResult<Vec<StoredRecord>> {
        self.check_health()?;
        let data = self.data.read().unwrap();
        Ok(data.collections.get(user_id).cloned().unwrap_or_default())
    }

    async fn store_record(
        &self,
        user_id: &UserId,
        record: OwnedRecord,
    ) -> RepositoryResult<RecordId> {
        self.check_health()?;
        let mut data = self.data.write().unwrap();
        let record_id = RecordId::new(data.next_record_id);
        data.next_record_id += 1;

        data.collections
            .entry(user_id.clone())
            .or_default()
            .push(StoredRecord { record_id, record });

        Ok(record_id)
    }

    async fn delete_record(&self, user_id: &UserId, record_id: RecordId) -> RepositoryResult<()> {
        self.check_health()?;
        let mut data = self.data.write().unwrap();
        let records = data
            .collections
            .get_mut(user_id)
            .ok_or_else(|| RepositoryError::not_found(format!("No collection for user {}", user_id)))?;

        let before = records.len();
        records.retain(|s| s.record_id != record_id);
        if records.len() == before {
            return Err(RepositoryError::not_found(format!(
                "Record {} not found for user {}",
                record_id, user_id
            )));
        }
        if records.is_empty() {
            data.collections.remove(user_id);
        }
        Ok(())
    }

    async fn list_users(&self) -> RepositoryResult<Vec<UserId>> {
        self.check_health()?;
        let data = self.data.read().unwrap();
        let mut users: Vec<UserId> = data.collections.keys().cloned().collect();
        users.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        Ok(users)
    }
}
