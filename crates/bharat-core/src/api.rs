// crates/bharat-core/src/api.rs

//! JSON views of the static API.
//!
//! One type per output file. They serialize with the camelCase names the
//! browse UI expects and deserialize back for [`crate::search::StaticApi`].
use crate::common::LocationCounts;
use crate::record::FlattenedLocationRecord;
use serde::{Deserialize, Serialize};

/// `states.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatesDocument {
    pub states: Vec<StateSummary>,
}

/// One row of `states.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSummary {
    pub name: String,
    pub code: String,
    pub districts: usize,
    pub talukas: usize,
    pub villages: usize,
}

impl StateSummary {
    pub fn counts(&self) -> LocationCounts {
        LocationCounts {
            states: 1,
            districts: self.districts,
            talukas: self.talukas,
            villages: self.villages,
        }
    }
}

/// `states/<slug>.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateShardDocument {
    pub state: String,
    pub code: String,
    pub districts: Vec<DistrictEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistrictEntry {
    pub name: String,
    pub code: String,
    pub talukas: Vec<TalukaEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalukaEntry {
    pub name: String,
    pub code: String,
    pub villages: Vec<VillageEntry>,
}

/// The trimmed village projection stored in state shards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VillageEntry {
    pub name: String,
    pub code: String,
    pub unique_code: String,
}

impl StateShardDocument {
    pub fn village_count(&self) -> usize {
        self.districts
            .iter()
            .flat_map(|d| &d.talukas)
            .map(|t| t.villages.len())
            .sum()
    }

    pub fn villages(&self) -> impl Iterator<Item = &VillageEntry> {
        self.districts
            .iter()
            .flat_map(|d| &d.talukas)
            .flat_map(|t| &t.villages)
    }
}

/// `search/<letter>.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchBucketDocument {
    /// Uppercase letter, e.g. `"B"`.
    pub letter: String,
    pub locations: Vec<FlattenedLocationRecord>,
}

/// `stats.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsDocument {
    pub total_states: usize,
    pub total_districts: usize,
    pub total_talukas: usize,
    pub total_villages: usize,
    /// RFC 3339 time of the build run.
    pub last_updated: String,
    pub api_endpoints: Vec<String>,
}

impl StatsDocument {
    pub fn counts(&self) -> LocationCounts {
        LocationCounts {
            states: self.total_states,
            districts: self.total_districts,
            talukas: self.total_talukas,
            villages: self.total_villages,
        }
    }
}

/// `index.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestDocument {
    pub name: String,
    pub version: String,
    pub description: String,
    pub endpoints: ManifestEndpoints,
    pub examples: ManifestExamples,
    pub stats: StatsDocument,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEndpoints {
    pub states: String,
    pub search: String,
    pub stats: String,
    pub state_details: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestExamples {
    pub get_all_states: String,
    pub search_by_letter: String,
    pub get_stats: String,
    pub get_maharashtra: String,
}
