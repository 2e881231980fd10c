//! High-level database service layer.
//!
//! Repository-agnostic collection operations that work with any
//! implementation of [`CollectionRepository`]. Business validation (record
//! shape rules) lives here so it stays consistent regardless of the storage
//! backend.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API, analytics services)       │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs) - Business Logic           │
//! │  - Record validation                                     │
//! │  - Cross-cutting concerns                                │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository/) - Abstract Interface     │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌──────────────────────────────────────────────┐
//!     │             Local Repository                  │
//!     │               (in-memory)                     │
//!     └──────────────────────────────────────────────┘
//! ```

use log::info;

use crate::api::{RecordId, StoredRecord, UserId};
use crate::models::{OwnedRecord, MAX_MOVESET_LEN};

use super::repository::{
    CollectionRepository, ErrorContext, RepositoryError, RepositoryResult,
};

// ==================== Health & Connection ====================

/// Check if the storage backend is healthy.
///
/// This is a simple pass-through to the repository's health check.
pub async fn health_check<R: CollectionRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

// ==================== Record Operations ====================

/// Validate a record before storage.
///
/// Rules: a positive dex number, a non-empty species name, and at most four
/// moves. Level and tags are free-form by design.
fn validate_record(record: &OwnedRecord) -> RepositoryResult<()> {
    if record.pokedex_number == 0 {
        return Err(RepositoryError::validation_with_context(
            "pokedex_number must be positive",
            ErrorContext::new("store_record").with_entity("record"),
        ));
    }
    if record.species_name.trim().is_empty() {
        return Err(RepositoryError::validation_with_context(
            "species_name must not be empty",
            ErrorContext::new("store_record").with_entity("record"),
        ));
    }
    if record.moveset.len() > MAX_MOVESET_LEN {
        return Err(RepositoryError::validation_with_context(
            format!(
                "moveset holds {} moves, maximum is {}",
                record.moveset.len(),
                MAX_MOVESET_LEN
            ),
            ErrorContext::new("store_record").with_entity("record"),
        ));
    }
    Ok(())
}

/// Fetch all owned-creature records for a user.
///
/// A user with no collection yields an empty list, never an error.
pub async fn fetch_owned_records<R: CollectionRepository + ?Sized>(
    repo: &R,
    user_id: &UserId,
) -> RepositoryResult<Vec<OwnedRecord>> {
    repo.fetch_owned_records(user_id).await
}

/// Fetch a user's collection with record ids.
pub async fn fetch_collection<R: CollectionRepository + ?Sized>(
    repo: &R,
    user_id: &UserId,
) -> RepositoryResult<Vec<StoredRecord>> {
    repo.fetch_collection(user_id).await
}

/// Validate and store a new record in a user's collection.
pub async fn store_record<R: CollectionRepository + ?Sized>(
    repo: &R,
    user_id: &UserId,
    record: OwnedRecord,
) -> RepositoryResult<RecordId> {
    validate_record(&record)?;
    let record_id = repo.store_record(user_id, record).await?;
    info!("stored record {} for user {}", record_id, user_id);
    Ok(record_id)
}

/// Delete a record from a user's collection.
pub async fn delete_record<R: CollectionRepository + ?Sized>(
    repo: &R,
    user_id: &UserId,
    record_id: RecordId,
) -> RepositoryResult<()> {
    repo.delete_record(user_id, record_id).await?;
    info!("deleted record {} for user {}", record_id, user_id);
    Ok(())
}

// ==================== User Operations ====================

/// List users that currently have at least one record.
pub async fn list_users<R: CollectionRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<Vec<UserId>> {
    repo.list_users().await
}
