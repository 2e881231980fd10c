use crate::api::{RecordId, UserId};
use crate::models::OwnedRecord;
use serde::{Deserialize, Serialize};

// =========================================================
// Collection types
// =========================================================

/// A record together with its repository-assigned identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredRecord {
    pub record_id: RecordId,
    #[serde(flatten)]
    pub record: OwnedRecord,
}

/// A user's collection as returned by the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionSummary {
    pub user_id: UserId,
    pub records: Vec<StoredRecord>,
    pub total: usize,
}

/// Users known to the repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserList {
    pub users: Vec<UserId>,
    pub total: usize,
}

pub const LIST_RECORDS: &str = "list_records";
pub const POST_RECORD: &str = "store_record";
pub const DELETE_RECORD: &str = "delete_record";
pub const LIST_USERS: &str = "list_users";
