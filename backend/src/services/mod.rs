//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer that sits between the database
//! operations and the HTTP handlers. Services orchestrate repository calls
//! and implement business logic and data processing.

pub mod analytics;

pub use analytics::{compute_collection_analytics, get_collection_analytics};
