//! Static national-dex reference data.
//!
//! The generation table and the dex size are injected into the aggregator as
//! plain data rather than read from module-level state, so the aggregation
//! stays a pure function and tests can supply reduced layouts.

use serde::{Deserialize, Serialize};

/// Total species count in the national dex for the reference deployment.
pub const NATIONAL_DEX_SIZE: u32 = 987;

/// One generation's slice of the national dex numbering.
///
/// Invariant: across a layout, ranges are contiguous and non-overlapping,
/// with both bounds inclusive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRange {
    /// Display name ("Gen 1", ...).
    pub name: String,
    /// First dex number of the generation (inclusive).
    pub start: u32,
    /// Last dex number of the generation (inclusive).
    pub end: u32,
    /// Species count in the generation, the completion denominator.
    pub total_species: u32,
}

impl GenerationRange {
    pub fn new(name: impl Into<String>, start: u32, end: u32) -> Self {
        Self {
            name: name.into(),
            start,
            end,
            total_species: end - start + 1,
        }
    }

    /// Whether a dex number falls inside this generation (inclusive bounds).
    pub fn contains(&self, pokedex_number: u32) -> bool {
        (self.start..=self.end).contains(&pokedex_number)
    }
}

/// The generation table plus the dex total, bundled for injection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokedexLayout {
    pub generations: Vec<GenerationRange>,
    pub national_dex_size: u32,
}

impl Default for PokedexLayout {
    fn default() -> Self {
        Self {
            generations: vec![
                GenerationRange::new("Gen 1", 1, 151),
                GenerationRange::new("Gen 2", 152, 251),
                GenerationRange::new("Gen 3", 252, 386),
                GenerationRange::new("Gen 4", 387, 493),
                GenerationRange::new("Gen 5", 494, 649),
                GenerationRange::new("Gen 6", 650, 721),
                GenerationRange::new("Gen 7", 722, 809),
                GenerationRange::new("Gen 8", 810, 905),
                GenerationRange::new("Gen 9", 906, NATIONAL_DEX_SIZE),
            ],
            national_dex_size: NATIONAL_DEX_SIZE,
        }
    }
}

impl PokedexLayout {
    /// Find the generation a dex number belongs to, if any.
    pub fn generation_of(&self, pokedex_number: u32) -> Option<&GenerationRange> {
        self.generations.iter().find(|g| g.contains(pokedex_number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_is_contiguous_and_non_overlapping() {
        let layout = PokedexLayout::default();
        let mut expected_start = 1;
        for gen in &layout.generations {
            assert_eq!(gen.start, expected_start, "{} is not contiguous", gen.name);
            assert!(gen.end >= gen.start);
            expected_start = gen.end + 1;
        }
        assert_eq!(expected_start - 1, layout.national_dex_size);
    }

    #[test]
    fn test_generation_totals_sum_to_dex_size() {
        let layout = PokedexLayout::default();
        let total: u32 = layout.generations.iter().map(|g| g.total_species).sum();
        assert_eq!(total, layout.national_dex_size);
    }

    #[test]
    fn test_boundary_numbers_belong_to_exactly_one_generation() {
        let layout = PokedexLayout::default();
        for n in [1, 151, 152, 251, 252, 905, 906, NATIONAL_DEX_SIZE] {
            let owners: Vec<_> = layout
                .generations
                .iter()
                .filter(|g| g.contains(n))
                .collect();
            assert_eq!(owners.len(), 1, "dex number {} should have one owner", n);
        }
    }

    #[test]
    fn test_generation_of_boundaries() {
        let layout = PokedexLayout::default();
        assert_eq!(layout.generation_of(151).unwrap().name, "Gen 1");
        assert_eq!(layout.generation_of(152).unwrap().name, "Gen 2");
        assert!(layout.generation_of(0).is_none());
        assert!(layout.generation_of(NATIONAL_DEX_SIZE + 1).is_none());
    }
}
