//! Property tests for the analytics aggregation.

use proptest::prelude::*;

use shinydex_rust::models::{OwnedRecord, PokedexLayout};
use shinydex_rust::services::compute_collection_analytics;

fn arb_record() -> impl Strategy<Value = OwnedRecord> {
    let names = prop::sample::select(vec![
        "Pikachu", "Eevee", "Bulbasaur", "Charmander", "Squirtle", "Mew", "Wyrdeer",
    ]);
    let types = prop::collection::vec(
        prop::sample::select(vec!["grass", "fire", "water", "electric", "psychic", "unknown"]),
        0..3,
    );
    let tags = prop::collection::vec(
        prop::sample::select(vec![
            "SV", "PLA", "SwSh", "PoGo", "LGPE", "alpha", "legendary", "mythical", "favorite",
        ]),
        0..4,
    );

    (
        0u32..1200,
        names,
        types,
        tags,
        prop::option::of(1u32..=100),
        prop::collection::vec("[a-z]{3,8}", 0..=4),
    )
        .prop_map(|(number, name, types, tags, level, moveset)| OwnedRecord {
            pokedex_number: number,
            species_name: name.to_string(),
            types: types.into_iter().map(String::from).collect(),
            tags: tags.into_iter().map(String::from).collect(),
            level,
            moveset,
            caught_at: None,
        })
}

proptest! {
    /// Recomputing over an unmodified record list is bit-identical.
    #[test]
    fn recomputation_is_pure(records in prop::collection::vec(arb_record(), 0..64)) {
        let layout = PokedexLayout::default();
        let first =
            compute_collection_analytics(&records, &layout.generations, layout.national_dex_size);
        let second =
            compute_collection_analytics(&records, &layout.generations, layout.national_dex_size);
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    /// Per-generation caught counts sum to the number of distinct dex
    /// numbers that fall inside any generation's range.
    #[test]
    fn generation_caught_sums_to_distinct_in_range(
        records in prop::collection::vec(arb_record(), 0..64)
    ) {
        let layout = PokedexLayout::default();
        let analytics =
            compute_collection_analytics(&records, &layout.generations, layout.national_dex_size);

        let mut distinct: Vec<u32> = records.iter().map(|r| r.pokedex_number).collect();
        distinct.sort_unstable();
        distinct.dedup();
        let in_range = distinct
            .iter()
            .filter(|n| layout.generation_of(**n).is_some())
            .count();

        let caught_sum: usize = analytics.generation_completion.iter().map(|g| g.caught).sum();
        prop_assert_eq!(caught_sum, in_range);
    }

    /// The remaining-species counter never underflows and always complements
    /// the distinct species count up to the dex total.
    #[test]
    fn remaining_species_complements_unique_count(
        records in prop::collection::vec(arb_record(), 0..64)
    ) {
        let layout = PokedexLayout::default();
        let analytics =
            compute_collection_analytics(&records, &layout.generations, layout.national_dex_size);

        let mut distinct: Vec<u32> = records.iter().map(|r| r.pokedex_number).collect();
        distinct.sort_unstable();
        distinct.dedup();
        let unique = distinct.len() as u32;

        let expected = layout.national_dex_size.saturating_sub(unique);
        prop_assert_eq!(analytics.remaining_species, expected);
    }

    /// Aggregation never panics and the averages stay finite.
    #[test]
    fn averages_are_finite(records in prop::collection::vec(arb_record(), 0..64)) {
        let layout = PokedexLayout::default();
        let analytics =
            compute_collection_analytics(&records, &layout.generations, layout.national_dex_size);
        prop_assert!(analytics.average_level.is_finite());
        prop_assert!(analytics.average_move_count.is_finite());
        prop_assert!(analytics.national_dex_completion_pct.is_finite());
    }
}
