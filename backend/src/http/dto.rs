//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! Most payload types are re-exported from the routes module since they
//! already derive Serialize/Deserialize. The POST body for a new record is
//! [`crate::models::OwnedRecord`] itself: its Serde impl is the ingestion
//! boundary that coerces the loosely-typed wire fields.

use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    // Analytics
    CollectionAnalytics, GenerationCompletion, TypeFrequencyEntry,
    // Collection
    CollectionSummary, StoredRecord, UserList,
};

/// Response for record creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRecordResponse {
    /// Repository-assigned id of the new record
    pub record_id: crate::api::RecordId,
    /// Message about the operation
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Storage backend connection status
    pub database: String,
}
