//! JSON loading for alternative rule tables
//!
//! File layout:
//! ```json
//! { "crops": [
//!     { "crop": "tomato", "sensitivity": "High",
//!       "storage": [
//!         { "method": "sack", "risk": "High",
//!           "justification": "...", "recommendation": "..." } ] } ] }
//! ```
//! `recommendation` may be omitted or null. Loaded tables are validated
//! against the same invariants as the built-in table.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Crop, CropProfile, KnowledgeBase, RiskEntry, RiskLevel, StorageRule};
use crate::error::{KnowledgeBaseError, Result};

#[derive(Debug, Serialize, Deserialize)]
struct TableFile {
    crops: Vec<CropRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct CropRecord {
    crop: String,
    sensitivity: RiskLevel,
    storage: Vec<RuleRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RuleRecord {
    method: String,
    risk: RiskLevel,
    justification: String,
    #[serde(default)]
    recommendation: Option<String>,
}

impl KnowledgeBase {
    /// Parse and validate a rule table from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: TableFile = serde_json::from_str(json)?;
        let profiles = validate(file)?;
        Ok(Self::assemble(profiles))
    }

    /// Read, parse and validate a rule table from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| KnowledgeBaseError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let kb = Self::from_json_str(&contents)?;
        tracing::info!(
            "Loaded knowledge base from {} ({} crops)",
            path.display(),
            kb.len()
        );
        Ok(kb)
    }

    /// Serialize the table in the loader's file layout.
    pub fn to_json_pretty(&self) -> Result<String> {
        let file = TableFile {
            crops: self
                .profiles
                .iter()
                .map(|p| CropRecord {
                    crop: p.crop.key().to_string(),
                    sensitivity: p.sensitivity,
                    storage: p
                        .rules
                        .iter()
                        .map(|r| RuleRecord {
                            method: r.method.clone(),
                            risk: r.entry.risk,
                            justification: r.entry.justification.clone(),
                            recommendation: r.entry.recommendation.clone(),
                        })
                        .collect(),
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }
}

fn validate(file: TableFile) -> Result<Vec<CropProfile>> {
    let mut seen_crops = HashSet::new();
    let mut profiles = Vec::with_capacity(file.crops.len());

    for record in file.crops {
        let crop = Crop::from_key(&record.crop)
            .ok_or_else(|| KnowledgeBaseError::UnknownCrop(record.crop.clone()))?;
        if !seen_crops.insert(crop) {
            return Err(KnowledgeBaseError::DuplicateCrop(record.crop));
        }
        if record.storage.is_empty() {
            return Err(KnowledgeBaseError::EmptyCrop(record.crop));
        }

        let mut seen_methods = HashSet::new();
        let mut rules = smallvec::SmallVec::new();
        for rule in record.storage {
            if !seen_methods.insert(rule.method.clone()) {
                return Err(KnowledgeBaseError::DuplicateMethod {
                    crop: record.crop,
                    method: rule.method,
                });
            }
            rules.push(StorageRule {
                method: rule.method,
                entry: RiskEntry {
                    risk: rule.risk,
                    justification: rule.justification,
                    recommendation: rule.recommendation,
                },
            });
        }

        profiles.push(CropProfile {
            crop,
            sensitivity: record.sensitivity,
            rules,
        });
    }

    Ok(profiles)
}
