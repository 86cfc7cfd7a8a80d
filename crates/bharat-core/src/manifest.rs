// crates/bharat-core/src/manifest.rs

//! Stats and manifest documents. Both are pure functions of the counts, the
//! build time and the URL prefix the output is served under.
use crate::api::{ManifestDocument, ManifestEndpoints, ManifestExamples, StatsDocument};
use crate::common::LocationCounts;

pub const API_NAME: &str = "Bharat Location Hub API";
pub const API_VERSION: &str = "1.0.0";

/// `stats.json` for the given counts.
pub fn stats_document(counts: &LocationCounts, last_updated: &str, api_base: &str) -> StatsDocument {
    StatsDocument {
        total_states: counts.states,
        total_districts: counts.districts,
        total_talukas: counts.talukas,
        total_villages: counts.villages,
        last_updated: last_updated.to_owned(),
        api_endpoints: vec![
            format!("GET {api_base}/states.json"),
            format!("GET {api_base}/states/{{state-name}}.json"),
            format!("GET {api_base}/search/{{letter}}.json"),
            format!("GET {api_base}/stats.json"),
        ],
    }
}

/// `index.json`, embedding a copy of `stats`.
pub fn manifest_document(stats: StatsDocument, api_base: &str) -> ManifestDocument {
    ManifestDocument {
        name: API_NAME.to_owned(),
        version: API_VERSION.to_owned(),
        description: format!(
            "Indian location database with {} villages across {} states",
            stats.total_villages, stats.total_states
        ),
        endpoints: ManifestEndpoints {
            states: format!("{api_base}/states.json"),
            search: format!("{api_base}/search/{{letter}}.json"),
            stats: format!("{api_base}/stats.json"),
            state_details: format!("{api_base}/states/{{state-name}}.json"),
        },
        examples: ManifestExamples {
            get_all_states: format!("fetch('{api_base}/states.json')"),
            search_by_letter: format!("fetch('{api_base}/search/m.json')"),
            get_stats: format!("fetch('{api_base}/stats.json')"),
            get_maharashtra: format!("fetch('{api_base}/states/maharashtra.json')"),
        },
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts() -> LocationCounts {
        LocationCounts {
            states: 2,
            districts: 3,
            talukas: 5,
            villages: 8,
        }
    }

    #[test]
    fn stats_lists_endpoints_under_base() {
        let s = stats_document(&counts(), "2024-01-01T00:00:00.000Z", "/api");
        assert_eq!(s.total_villages, 8);
        assert_eq!(s.api_endpoints[1], "GET /api/states/{state-name}.json");
        assert_eq!(s.counts(), counts());
    }

    #[test]
    fn manifest_embeds_stats_and_camel_case_keys() {
        let s = stats_document(&counts(), "2024-01-01T00:00:00.000Z", "/api");
        let m = manifest_document(s.clone(), "/api");
        assert_eq!(m.stats, s);
        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(v["endpoints"]["stateDetails"], "/api/states/{state-name}.json");
        assert_eq!(v["examples"]["searchByLetter"], "fetch('/api/search/m.json')");
        assert_eq!(v["stats"]["totalTalukas"], 5);
        assert_eq!(v["version"], API_VERSION);
    }
}
