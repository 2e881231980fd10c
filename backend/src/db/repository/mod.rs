//! Repository trait for abstracting collection storage.
//!
//! The trait is the seam where the hosted document database plugs in. The
//! in-memory implementation backs tests and local development; a remote
//! implementation would live alongside it without touching callers.

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use async_trait::async_trait;

use crate::api::{RecordId, StoredRecord, UserId};
use crate::models::OwnedRecord;

/// Repository trait for per-user shiny collections.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust and allow
/// sharing across threads.
///
/// # Error Handling
/// All methods return `RepositoryResult<T>` which wraps either the expected
/// return type or a `RepositoryError` describing what went wrong.
#[async_trait]
pub trait CollectionRepository: Send + Sync {
    // ==================== Health & Connection ====================

    /// Check if the storage backend is reachable.
    ///
    /// # Returns
    /// - `Ok(true)` if the backend is healthy
    /// - `Ok(false)` if unhealthy but no error occurred
    /// - `Err(RepositoryError)` if the check itself failed
    async fn health_check(&self) -> RepositoryResult<bool>;

    // ==================== Record Operations ====================

    /// Fetch all owned-creature records for a user.
    ///
    /// A user with no collection yields an empty list, not an error.
    async fn fetch_owned_records(&self, user_id: &UserId) -> RepositoryResult<Vec<OwnedRecord>>;

    /// Fetch a user's collection with repository-assigned record ids.
    async fn fetch_collection(&self, user_id: &UserId) -> RepositoryResult<Vec<StoredRecord>>;

    /// Store a new record in a user's collection.
    ///
    /// # Returns
    /// * `Ok(RecordId)` - The id assigned to the stored record
    /// * `Err(RepositoryError)` - If the operation fails
    async fn store_record(
        &self,
        user_id: &UserId,
        record: OwnedRecord,
    ) -> RepositoryResult<RecordId>;

    /// Delete a record from a user's collection.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If the record doesn't exist
    async fn delete_record(&self, user_id: &UserId, record_id: RecordId) -> RepositoryResult<()>;

    // ==================== User Operations ====================

    /// List users that currently have at least one record.
    async fn list_users(&self) -> RepositoryResult<Vec<UserId>>;
}
