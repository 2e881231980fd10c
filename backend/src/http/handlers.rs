//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! existing service layer for business logic.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{CreateRecordResponse, HealthResponse};
use super::error::AppError;
use super::state::AppState;
use crate::api::{RecordId, UserId};
use crate::db::services as db_services;
use crate::models::OwnedRecord;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the storage
/// backend is accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Users
// =============================================================================

/// GET /v1/users
///
/// List users that currently have records.
pub async fn list_users(State(state): State<AppState>) -> HandlerResult<crate::api::UserList> {
    let users = db_services::list_users(state.repository.as_ref()).await?;
    let total = users.len();

    Ok(Json(crate::api::UserList { users, total }))
}

// =============================================================================
// Collection CRUD
// =============================================================================

/// GET /v1/users/{user_id}/records
///
/// List a user's full collection. An unknown user yields an empty list.
pub async fn list_records(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> HandlerResult<crate::api::CollectionSummary> {
    let user_id = UserId::new(user_id);
    let records = db_services::fetch_collection(state.repository.as_ref(), &user_id).await?;
    let total = records.len();

    Ok(Json(crate::api::CollectionSummary {
        user_id,
        records,
        total,
    }))
}

/// POST /v1/users/{user_id}/records
///
/// Add a caught shiny to a user's collection.
pub async fn create_record(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(record): Json<OwnedRecord>,
) -> Result<(StatusCode, Json<CreateRecordResponse>), AppError> {
    let user_id = UserId::new(user_id);
    let record_id =
        db_services::store_record(state.repository.as_ref(), &user_id, record).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateRecordResponse {
            record_id,
            message: format!("Record {} stored for user {}", record_id, user_id),
        }),
    ))
}

/// DELETE /v1/users/{user_id}/records/{record_id}
///
/// Remove a record from a user's collection.
pub async fn delete_record(
    State(state): State<AppState>,
    Path((user_id, record_id)): Path<(String, i64)>,
) -> Result<StatusCode, AppError> {
    let user_id = UserId::new(user_id);
    db_services::delete_record(state.repository.as_ref(), &user_id, RecordId::new(record_id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Analytics
// =============================================================================

/// GET /v1/users/{user_id}/analytics
///
/// Get the dashboard statistics for a user's collection. A brand-new or
/// empty collection yields the zero/sentinel result, never an error.
pub async fn get_analytics(
    State(_state): State<AppState>,
    Path(user_id): Path<String>,
) -> HandlerResult<crate::api::CollectionAnalytics> {
    let user_id = UserId::new(user_id);

    let data = crate::services::get_collection_analytics(&user_id)
        .await
        .map_err(AppError::Internal)?;

    Ok(Json(data))
}
