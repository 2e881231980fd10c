//! End-to-end tests: store records through the service layer, fetch them
//! back, and run the analytics aggregation over the result.

use shinydex_rust::api::UserId;
use shinydex_rust::db::{services, LocalRepository};
use shinydex_rust::models::{OwnedRecord, PokedexLayout};
use shinydex_rust::services::compute_collection_analytics;

fn record(number: u32, name: &str, types: &[&str], tags: &[&str]) -> OwnedRecord {
    OwnedRecord {
        pokedex_number: number,
        species_name: name.to_string(),
        types: types.iter().map(|t| t.to_string()).collect(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        level: None,
        moveset: vec![],
        caught_at: None,
    }
}

#[tokio::test]
async fn test_stored_collection_feeds_the_aggregator() {
    let repo = LocalRepository::new();
    let user = UserId::new("trainer-1");

    for rec in [
        record(25, "Pikachu", &["electric"], &["PoGo"]),
        record(25, "Pikachu", &["electric"], &["SwSh"]),
        record(1, "Bulbasaur", &["grass", "poison"], &["SwSh"]),
        record(152, "Chikorita", &["grass"], &["SwSh"]),
    ] {
        services::store_record(&repo, &user, rec).await.unwrap();
    }

    let records = services::fetch_owned_records(&repo, &user).await.unwrap();
    let layout = PokedexLayout::default();
    let analytics =
        compute_collection_analytics(&records, &layout.generations, layout.national_dex_size);

    assert_eq!(analytics.total_records, 4);
    // electric and grass tie at 2; electric was encountered first.
    assert_eq!(analytics.most_common_type, "electric");
    assert_eq!(analytics.rarest_type, "poison");
    assert_eq!(analytics.rarest_origin_game, "PoGo");
    assert_eq!(analytics.duplicate_species_count, 1);
    assert_eq!(analytics.most_common_duplicate, "Pikachu");
    // 25, 1 in Gen 1; 152 in Gen 2.
    assert_eq!(analytics.generation_completion[0].caught, 2);
    assert_eq!(analytics.generation_completion[1].caught, 1);
    assert_eq!(analytics.remaining_species, 987 - 3);
}

#[tokio::test]
async fn test_empty_collection_renders_a_dashboard() {
    let repo = LocalRepository::new();
    let user = UserId::new("brand-new-user");

    let records = services::fetch_owned_records(&repo, &user).await.unwrap();
    let layout = PokedexLayout::default();
    let analytics =
        compute_collection_analytics(&records, &layout.generations, layout.national_dex_size);

    assert_eq!(analytics.total_records, 0);
    assert_eq!(analytics.most_common_type, "N/A");
    assert_eq!(analytics.national_dex_completion_pct, 0.0);
    assert_eq!(analytics.average_move_count, 0.0);
    for gen in &analytics.generation_completion {
        assert_eq!(gen.caught, 0);
        assert_eq!(gen.percentage, 0.0);
    }
}
