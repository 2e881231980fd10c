//! Owned-creature records and the ingestion boundary.
//!
//! A record represents one caught shiny. Records arrive from the frontend in
//! a loosely-typed wire form (the `level` field in particular may be an
//! integer, a numeric string, or a placeholder such as `"?"`). All coercion
//! happens here in Serde deserializers so downstream code only ever sees a
//! typed `Option<u32>`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Sentinel type label excluded from type-frequency counts.
pub const UNKNOWN_TYPE: &str = "unknown";

/// Reserved tag marking an alpha Pokémon (Legends: Arceus).
pub const TAG_ALPHA: &str = "alpha";

/// Reserved tag marking a legendary Pokémon.
pub const TAG_LEGENDARY: &str = "legendary";

/// Reserved tag marking a mythical Pokémon.
pub const TAG_MYTHICAL: &str = "mythical";

/// Maximum number of moves a record may carry.
pub const MAX_MOVESET_LEN: usize = 4;

/// Source game a shiny was obtained in, denoted by a fixed set of tags.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OriginGame {
    /// Scarlet / Violet
    ScarletViolet,
    /// Legends: Arceus
    LegendsArceus,
    /// Sword / Shield
    SwordShield,
    /// Pokémon GO
    Go,
    /// Let's Go Pikachu / Eevee
    LetsGo,
}

impl OriginGame {
    /// All origin games, in canonical order.
    pub const ALL: [OriginGame; 5] = [
        OriginGame::ScarletViolet,
        OriginGame::LegendsArceus,
        OriginGame::SwordShield,
        OriginGame::Go,
        OriginGame::LetsGo,
    ];

    /// The canonical tag string for this origin game.
    pub fn tag(&self) -> &'static str {
        match self {
            OriginGame::ScarletViolet => "SV",
            OriginGame::LegendsArceus => "PLA",
            OriginGame::SwordShield => "SwSh",
            OriginGame::Go => "PoGo",
            OriginGame::LetsGo => "LGPE",
        }
    }

    /// Parse an origin game from a tag, case-insensitively.
    ///
    /// Returns `None` for tags outside the fixed origin set.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|game| game.tag().eq_ignore_ascii_case(tag))
    }
}

impl std::fmt::Display for OriginGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// One caught shiny in a user's collection.
///
/// Duplicates are allowed: the same species may be caught any number of
/// times, and each catch is its own record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnedRecord {
    /// National dex number of the species (not unique across records).
    #[serde(default)]
    pub pokedex_number: u32,
    /// Species display name as stored.
    #[serde(default)]
    pub species_name: String,
    /// Elemental type labels in order; may contain the "unknown" sentinel.
    #[serde(default)]
    pub types: Vec<String>,
    /// Free-form labels; origin tags and reserved category tags live here.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Level, resolved from the wire form at deserialization time.
    #[serde(default, deserialize_with = "deserialize_level")]
    pub level: Option<u32>,
    /// Up to four move names.
    #[serde(default)]
    pub moveset: Vec<String>,
    /// When the shiny was caught, if recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caught_at: Option<DateTime<Utc>>,
}

impl OwnedRecord {
    /// Check whether the record carries a tag, case-insensitively.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// The first origin-game tag on the record, if any.
    pub fn origin_game(&self) -> Option<OriginGame> {
        self.tags.iter().find_map(|t| OriginGame::from_tag(t))
    }

    /// Whether the record is tagged as an alpha.
    pub fn is_alpha(&self) -> bool {
        self.has_tag(TAG_ALPHA)
    }

    /// Whether the record is tagged legendary or mythical (or both).
    pub fn is_legendary_or_mythical(&self) -> bool {
        self.has_tag(TAG_LEGENDARY) || self.has_tag(TAG_MYTHICAL)
    }
}

/// Resolve the loosely-typed wire `level` field.
///
/// Accepts an integer, a numeric string, or nothing. Placeholder strings
/// ("?", "unknown", ...) and negative values resolve to `None` rather than
/// an error so a single odd record cannot fail a whole collection fetch.
fn deserialize_level<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawLevel {
        Num(i64),
        Text(String),
    }

    let raw = Option::<RawLevel>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawLevel::Num(n)) if n >= 0 => Some(n as u32),
        Some(RawLevel::Num(_)) => None,
        Some(RawLevel::Text(s)) => s.trim().parse::<u32>().ok(),
        None => None,
    })
}
