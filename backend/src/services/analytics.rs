//! Collection analytics aggregation.
//!
//! [`compute_collection_analytics`] is a pure projection from a user's record
//! list (plus the injected dex layout) to the dashboard statistics. It never
//! fails: every degenerate input maps to a zero or "N/A" sentinel so the
//! dashboard renders even for a brand-new, empty collection.
//!
//! Tie-breaks for "most common" / "rarest" selections follow first-encountered
//! order in the flattened record iteration. All sorts in this module are
//! stable, which is what preserves that order; replacing them with an unstable
//! sort would change results on ties.

use std::collections::HashSet;

use log::warn;

use crate::api::UserId;
use crate::db::get_repository;
use crate::models::{GenerationRange, OriginGame, OwnedRecord, PokedexLayout, UNKNOWN_TYPE};
use crate::routes::analytics::{
    CollectionAnalytics, GenerationCompletion, TypeFrequencyEntry, NOT_AVAILABLE, TYPE_CHART_LIMIT,
};

/// Count type-label occurrences across all records, in first-encountered
/// order. The "unknown" sentinel is excluded.
pub(crate) fn count_type_frequency(records: &[OwnedRecord]) -> Vec<TypeFrequencyEntry> {
    let mut frequency: Vec<TypeFrequencyEntry> = Vec::new();

    for record in records {
        for label in &record.types {
            if label == UNKNOWN_TYPE {
                continue;
            }
            match frequency.iter_mut().find(|e| e.type_name == *label) {
                Some(entry) => entry.count += 1,
                None => frequency.push(TypeFrequencyEntry {
                    type_name: label.clone(),
                    count: 1,
                }),
            }
        }
    }

    frequency
}

/// Count origin-game tag occurrences, keyed by the games actually
/// encountered (a game no record was caught in does not participate).
pub(crate) fn count_origin_games(records: &[OwnedRecord]) -> Vec<(OriginGame, usize)> {
    let mut counts: Vec<(OriginGame, usize)> = Vec::new();

    for record in records {
        for tag in &record.tags {
            if let Some(game) = OriginGame::from_tag(tag) {
                match counts.iter_mut().find(|(g, _)| *g == game) {
                    Some(entry) => entry.1 += 1,
                    None => counts.push((game, 1)),
                }
            }
        }
    }

    counts
}

/// Per-generation completion over records deduplicated by dex number.
///
/// Deduplication (first occurrence wins) applies to this calculation only;
/// the full record list is untouched elsewhere.
pub(crate) fn generation_completion(
    records: &[OwnedRecord],
    generations: &[GenerationRange],
) -> Vec<GenerationCompletion> {
    let mut seen = HashSet::new();
    let deduplicated: Vec<u32> = records
        .iter()
        .map(|r| r.pokedex_number)
        .filter(|n| seen.insert(*n))
        .collect();

    generations
        .iter()
        .map(|gen| {
            let caught = deduplicated.iter().filter(|n| gen.contains(**n)).count();
            let percentage = if gen.total_species > 0 {
                caught as f64 / gen.total_species as f64 * 100.0
            } else {
                0.0
            };
            GenerationCompletion {
                name: gen.name.clone(),
                caught,
                total: gen.total_species,
                percentage,
            }
        })
        .collect()
}

/// Duplicate contribution and the most duplicated species name.
///
/// Records are grouped by exact species name; a group of size n contributes
/// n - 1 duplicates.
pub(crate) fn duplicate_stats(records: &[OwnedRecord]) -> (usize, String) {
    let mut groups: Vec<(&str, usize)> = Vec::new();

    for record in records {
        match groups
            .iter_mut()
            .find(|(name, _)| *name == record.species_name.as_str())
        {
            Some(entry) => entry.1 += 1,
            None => groups.push((record.species_name.as_str(), 1)),
        }
    }

    let mut duplicates: Vec<(&str, usize)> =
        groups.into_iter().filter(|(_, n)| *n > 1).collect();
    let duplicate_count: usize = duplicates.iter().map(|(_, n)| n - 1).sum();

    // Stable sort keeps first-encountered order among equal group sizes.
    duplicates.sort_by(|a, b| b.1.cmp(&a.1));
    let most_common = duplicates
        .first()
        .map(|(name, _)| name.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    (duplicate_count, most_common)
}

/// Mean level across records with a known level. Records without one are
/// excluded from numerator and denominator.
pub(crate) fn average_level(records: &[OwnedRecord]) -> f64 {
    let levels: Vec<u32> = records.iter().filter_map(|r| r.level).collect();
    if levels.is_empty() {
        return 0.0;
    }
    levels.iter().map(|l| *l as f64).sum::<f64>() / levels.len() as f64
}

/// Mean moveset length across all records (an absent moveset counts as 0).
pub(crate) fn average_move_count(records: &[OwnedRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    records.iter().map(|r| r.moveset.len()).sum::<usize>() as f64 / records.len() as f64
}

/// Compute the complete dashboard statistics from raw records.
///
/// Pure and deterministic; safe to call concurrently. The generation table
/// and dex total are injected so tests can supply reduced layouts.
pub fn compute_collection_analytics(
    records: &[OwnedRecord],
    generations: &[GenerationRange],
    national_dex_size: u32,
) -> CollectionAnalytics {
    // Type frequency: stable descending sort over first-encountered counts.
    let frequency = count_type_frequency(records);
    let mut descending = frequency.clone();
    descending.sort_by(|a, b| b.count.cmp(&a.count));
    let mut ascending = frequency;
    ascending.sort_by(|a, b| a.count.cmp(&b.count));

    let most_common_type = descending
        .first()
        .map(|e| e.type_name.clone())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let rarest_type = ascending
        .first()
        .map(|e| e.type_name.clone())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let type_frequency: Vec<TypeFrequencyEntry> =
        descending.into_iter().take(TYPE_CHART_LIMIT).collect();

    // Origin-game rarity, minimum count with stable tie-break.
    let mut origin_counts = count_origin_games(records);
    origin_counts.sort_by(|a, b| a.1.cmp(&b.1));
    let rarest_origin_game = origin_counts
        .first()
        .map(|(game, _)| game.tag().to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    let alpha_count = records.iter().filter(|r| r.is_alpha()).count();
    let legendary_or_mythical_count = records
        .iter()
        .filter(|r| r.is_legendary_or_mythical())
        .count();

    // National dex completion over distinct dex numbers.
    let unique_species: HashSet<u32> = records.iter().map(|r| r.pokedex_number).collect();
    let unique_count = unique_species.len() as u32;
    let national_dex_completion_pct = if national_dex_size > 0 {
        unique_count as f64 / national_dex_size as f64 * 100.0
    } else {
        0.0
    };
    let remaining_species = if unique_count > national_dex_size {
        warn!(
            "collection holds {} distinct species but the dex total is {}; clamping remainder to 0",
            unique_count, national_dex_size
        );
        0
    } else {
        national_dex_size - unique_count
    };

    let (duplicate_species_count, most_common_duplicate) = duplicate_stats(records);

    CollectionAnalytics {
        total_records: records.len(),
        most_common_type,
        rarest_type,
        type_frequency,
        rarest_origin_game,
        alpha_count,
        generation_completion: generation_completion(records, generations),
        legendary_or_mythical_count,
        national_dex_completion_pct,
        remaining_species,
        duplicate_species_count,
        most_common_duplicate,
        average_level: average_level(records),
        average_move_count: average_move_count(records),
    }
}

/// Get complete analytics for a user's collection.
///
/// Fetches the record list through the global repository and runs the
/// aggregation. An empty collection is not an error: the empty-result
/// sentinels flow through so the dashboard can render for a new user.
pub async fn get_collection_analytics(user_id: &UserId) -> Result<CollectionAnalytics, String> {
    // Get the initialized repository
    let repo = get_repository().map_err(|e| format!("Failed to get repository: {}", e))?;

    let records = repo
        .fetch_owned_records(user_id)
        .await
        .map_err(|e| format!("Failed to fetch owned records: {}", e))?;

    let layout = PokedexLayout::default();
    Ok(compute_collection_analytics(
        &records,
        &layout.generations,
        layout.national_dex_size,
    ))
}
