use serde::{Deserialize, Serialize};

// =========================================================
// Analytics types
// =========================================================

/// Sentinel shown when an aggregate has no meaningful value.
pub const NOT_AVAILABLE: &str = "N/A";

/// Number of entries exposed in the type-frequency chart series.
pub const TYPE_CHART_LIMIT: usize = 8;

/// One bar of the type-frequency chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeFrequencyEntry {
    pub type_name: String,
    pub count: usize,
}

/// Completion of one generation's dex slice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationCompletion {
    pub name: String,
    /// Distinct species caught within the generation's range.
    pub caught: usize,
    /// Species count of the generation.
    pub total: u32,
    /// caught / total * 100, fractional precision retained.
    pub percentage: f64,
}

/// Complete dashboard statistics derived from a user's collection.
///
/// Recomputed from scratch on every call; never cached or persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionAnalytics {
    pub total_records: usize,
    pub most_common_type: String,
    pub rarest_type: String,
    /// Top eight types by occurrence, stable descending order.
    pub type_frequency: Vec<TypeFrequencyEntry>,
    pub rarest_origin_game: String,
    pub alpha_count: usize,
    pub generation_completion: Vec<GenerationCompletion>,
    pub legendary_or_mythical_count: usize,
    pub national_dex_completion_pct: f64,
    /// Species still missing for a full national dex, clamped at zero.
    pub remaining_species: u32,
    pub duplicate_species_count: usize,
    pub most_common_duplicate: String,
    pub average_level: f64,
    pub average_move_count: f64,
}

/// Route function name constant for analytics
pub const GET_COLLECTION_ANALYTICS: &str = "get_collection_analytics";
