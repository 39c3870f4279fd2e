//! Storage Risk Knowledge Base
//!
//! Immutable crop → storage method → risk entry table.
//!
//! ## Architecture
//! - `builtin_table.rs` - Embedded rule table (six tracked crops)
//! - `loader.rs` - JSON loading and validation for alternative tables
//!
//! The table is only reachable through the query methods on
//! [`KnowledgeBase`]; there is no mutable access once it is built.

pub mod builtin_table;
pub mod loader;

use std::fmt;
use std::sync::{Arc, LazyLock};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

// ============================================================================
// Core Types
// ============================================================================

/// Tracked crop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Crop {
    Tomato,
    Cassava,
    Yam,
    Plantain,
    Onion,
    Maize,
}

impl Crop {
    /// All tracked crops in table order
    pub const ALL: [Crop; 6] = [
        Crop::Tomato,
        Crop::Cassava,
        Crop::Yam,
        Crop::Plantain,
        Crop::Onion,
        Crop::Maize,
    ];

    /// Table key for this crop (lowercase)
    pub fn key(&self) -> &'static str {
        match self {
            Crop::Tomato => "tomato",
            Crop::Cassava => "cassava",
            Crop::Yam => "yam",
            Crop::Plantain => "plantain",
            Crop::Onion => "onion",
            Crop::Maize => "maize",
        }
    }

    /// Exact, case-sensitive match against the table keys.
    ///
    /// `"Tomato"` and `" tomato"` are not crops.
    pub fn from_key(key: &str) -> Option<Crop> {
        Crop::ALL.into_iter().find(|c| c.key() == key)
    }
}

impl fmt::Display for Crop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Stored spoilage risk level.
///
/// Only three levels can be stored; the query-time `Unknown` lives on
/// [`crate::advisor::AssessedRisk`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One (crop, storage method) rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskEntry {
    pub risk: RiskLevel,
    pub justification: String,
    /// Absent when no extra action is advised
    #[serde(default)]
    pub recommendation: Option<String>,
}

/// Storage method label paired with its rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageRule {
    pub method: String,
    pub entry: RiskEntry,
}

/// All rules for one crop
#[derive(Debug, Clone)]
pub struct CropProfile {
    pub crop: Crop,
    /// Intrinsic perishability, independent of storage
    pub sensitivity: RiskLevel,
    /// Rules in table order (a crop has at most a handful)
    pub rules: SmallVec<[StorageRule; 4]>,
}

impl CropProfile {
    fn rule(&self, method: &str) -> Option<&RiskEntry> {
        self.rules
            .iter()
            .find(|r| r.method == method)
            .map(|r| &r.entry)
    }
}

/// Why a lookup produced no entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissReason {
    UnknownCrop,
    UnknownMethod,
}

/// Outcome of a two-level lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    Hit(&'a RiskEntry),
    Miss(MissReason),
}

// ============================================================================
// Knowledge Base
// ============================================================================

static BUILTIN: LazyLock<Arc<KnowledgeBase>> = LazyLock::new(|| Arc::new(builtin_table::build()));

/// Read-only crop → method → entry table
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    profiles: Vec<CropProfile>,
    /// Crop key → position in `profiles`
    index: FxHashMap<&'static str, usize>,
}

impl KnowledgeBase {
    /// Process-wide built-in table, constructed on first use.
    pub fn builtin() -> &'static KnowledgeBase {
        &BUILTIN
    }

    /// Shared handle to the built-in table
    pub fn builtin_shared() -> Arc<KnowledgeBase> {
        Arc::clone(&BUILTIN)
    }

    /// Assemble from profiles that have already been validated.
    ///
    /// Profiles keep the order they are given in; that order is the
    /// table order seen by `profiles`, `crops` and `entries_for_method`.
    pub(crate) fn assemble(profiles: Vec<CropProfile>) -> Self {
        let index = profiles
            .iter()
            .enumerate()
            .map(|(i, p)| (p.crop.key(), i))
            .collect();
        Self { profiles, index }
    }

    /// Two-level exact-match lookup: `table[crop][method]`.
    ///
    /// No trimming or case folding is applied to either key.
    pub fn lookup(&self, crop: &str, method: &str) -> Lookup<'_> {
        match self.profile(crop) {
            None => Lookup::Miss(MissReason::UnknownCrop),
            Some(profile) => match profile.rule(method) {
                Some(entry) => Lookup::Hit(entry),
                None => Lookup::Miss(MissReason::UnknownMethod),
            },
        }
    }

    fn profile(&self, crop: &str) -> Option<&CropProfile> {
        self.index.get(crop).map(|&i| &self.profiles[i])
    }

    /// Crop profiles in table order
    pub fn profiles(&self) -> impl Iterator<Item = &CropProfile> + '_ {
        self.profiles.iter()
    }

    /// Crops in table order
    pub fn crops(&self) -> impl Iterator<Item = Crop> + '_ {
        self.profiles.iter().map(|p| p.crop)
    }

    /// Storage methods defined for a crop, in table order
    pub fn storage_methods(&self, crop: &str) -> Option<Vec<&str>> {
        self.profile(crop)
            .map(|p| p.rules.iter().map(|r| r.method.as_str()).collect())
    }

    /// Intrinsic sensitivity of a crop
    pub fn sensitivity(&self, crop: &str) -> Option<RiskLevel> {
        self.profile(crop).map(|p| p.sensitivity)
    }

    /// Every crop that defines `method`, with its entry, in table order
    pub fn entries_for_method<'a>(
        &'a self,
        method: &'a str,
    ) -> impl Iterator<Item = (Crop, &'a RiskEntry)> + 'a {
        self.profiles
            .iter()
            .filter_map(move |p| p.rule(method).map(|entry| (p.crop, entry)))
    }

    /// Every stored (crop, method, entry) triple
    pub fn entries(&self) -> impl Iterator<Item = (Crop, &str, &RiskEntry)> + '_ {
        self.profiles.iter().flat_map(|p| {
            p.rules
                .iter()
                .map(move |r| (p.crop, r.method.as_str(), &r.entry))
        })
    }

    /// Number of crops in the table
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
