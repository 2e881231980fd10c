//! Tests for the database service layer against the in-memory repository.

use crate::api::UserId;
use crate::db::repositories::LocalRepository;
use crate::db::repository::RepositoryError;
use crate::db::services;
use crate::models::OwnedRecord;

fn sample_record(number: u32, name: &str, moves: usize) -> OwnedRecord {
    OwnedRecord {
        pokedex_number: number,
        species_name: name.to_string(),
        types: vec!["electric".to_string()],
        tags: vec!["PoGo".to_string()],
        level: Some(31),
        moveset: (0..moves).map(|i| format!("Move {}", i)).collect(),
        caught_at: None,
    }
}

#[tokio::test]
async fn test_store_and_fetch_round_trip() {
    let repo = LocalRepository::new();
    let user = UserId::new("trainer-1");

    services::store_record(&repo, &user, sample_record(25, "Pikachu", 2))
        .await
        .unwrap();
    services::store_record(&repo, &user, sample_record(26, "Raichu", 4))
        .await
        .unwrap();

    let records = services::fetch_owned_records(&repo, &user).await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].species_name, "Pikachu");

    let collection = services::fetch_collection(&repo, &user).await.unwrap();
    assert_eq!(collection.len(), 2);
    assert!(collection[1].record_id.value() > collection[0].record_id.value());
}

#[tokio::test]
async fn test_store_rejects_oversized_moveset() {
    let repo = LocalRepository::new();
    let user = UserId::new("trainer-1");

    let err = services::store_record(&repo, &user, sample_record(25, "Pikachu", 5))
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::ValidationError { .. }));
    assert_eq!(repo.record_count(&user), 0);
}

#[tokio::test]
async fn test_store_rejects_zero_dex_number() {
    let repo = LocalRepository::new();
    let user = UserId::new("trainer-1");

    let err = services::store_record(&repo, &user, sample_record(0, "MissingNo", 0))
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::ValidationError { .. }));
}

#[tokio::test]
async fn test_store_rejects_blank_species_name() {
    let repo = LocalRepository::new();
    let user = UserId::new("trainer-1");

    let err = services::store_record(&repo, &user, sample_record(25, "   ", 0))
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::ValidationError { .. }));
}

#[tokio::test]
async fn test_delete_and_list_users() {
    let repo = LocalRepository::new();
    let user = UserId::new("trainer-1");

    let id = services::store_record(&repo, &user, sample_record(25, "Pikachu", 0))
        .await
        .unwrap();
    assert_eq!(services::list_users(&repo).await.unwrap().len(), 1);

    services::delete_record(&repo, &user, id).await.unwrap();
    assert!(services::list_users(&repo).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_health_check_passthrough() {
    let repo = LocalRepository::new();
    assert!(services::health_check(&repo).await.unwrap());
    repo.set_healthy(false);
    assert!(!services::health_check(&repo).await.unwrap());
}
