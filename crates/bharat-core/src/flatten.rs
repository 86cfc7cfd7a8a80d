// crates/bharat-core/src/flatten.rs

//! # Denormalizer / Sharder
//!
//! One depth-first pass over the tree produces everything the static API
//! needs: the per-state roll-up, one shard document per state and the
//! first-letter search index. Nothing is kept between calls; the index is
//! part of the returned [`Flattened`] value.
use crate::api::{DistrictEntry, StateShardDocument, StateSummary, TalukaEntry, VillageEntry};
use crate::code::CodeStrategy;
use crate::common::LocationCounts;
use crate::error::{GeoError, Result};
use crate::model::{IndiaLocations, State};
use crate::record::{FlattenedLocationRecord, LocationPath};
use crate::text::{index_letter, slugify};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Letter -> records whose village name starts with that letter.
pub type SearchIndex = BTreeMap<char, Vec<FlattenedLocationRecord>>;

/// What to do when two states end up with the same shard file name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlugPolicy {
    /// Abort before anything is written.
    #[default]
    Fail,
    /// Keep the first state's slug, suffix later ones with their code.
    AppendCode,
}

/// One state's sub-tree, ready to be written to `states/<slug>.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateShard {
    pub slug: String,
    pub document: StateShardDocument,
}

impl StateShard {
    pub fn file_name(&self) -> String {
        format!("{}.json", self.slug)
    }
}

/// Result of [`flatten`].
#[derive(Debug, Clone, Default)]
pub struct Flattened {
    pub summaries: Vec<StateSummary>,
    pub shards: Vec<StateShard>,
    pub search_index: SearchIndex,
    pub counts: LocationCounts,
    /// Villages left out of the search index (non-letter first character).
    pub unindexed: usize,
}

/// Flattens the whole tree. Codes are always [`CodeStrategy::Deterministic`].
pub fn flatten(tree: &IndiaLocations) -> Flattened {
    let mut out = Flattened::default();
    for state in &tree.states {
        let (summary, shard) = flatten_state(state, &mut out.search_index, &mut out.unindexed);
        out.counts += summary.counts();
        out.summaries.push(summary);
        out.shards.push(shard);
    }
    out
}

fn flatten_state(
    state: &State,
    index: &mut SearchIndex,
    unindexed: &mut usize,
) -> (StateSummary, StateShard) {
    let strategy = CodeStrategy::Deterministic;
    let mut talukas = 0;
    let mut villages = 0;

    let districts = state
        .districts
        .iter()
        .map(|district| DistrictEntry {
            name: district.name.clone(),
            code: district.code.clone(),
            talukas: district
                .talukas
                .iter()
                .map(|taluka| {
                    talukas += 1;
                    let entries = taluka
                        .villages
                        .iter()
                        .map(|village| {
                            villages += 1;
                            let path = LocationPath::from((village, taluka, district, state));
                            let unique_code = strategy.unique_code(&path);
                            match index_letter(&village.name) {
                                Some(letter) => index.entry(letter).or_default().push(
                                    FlattenedLocationRecord::with_code(&path, unique_code.clone()),
                                ),
                                None => *unindexed += 1,
                            }
                            VillageEntry {
                                name: village.name.clone(),
                                code: village.code.clone(),
                                unique_code,
                            }
                        })
                        .collect();
                    TalukaEntry {
                        name: taluka.name.clone(),
                        code: taluka.code.clone(),
                        villages: entries,
                    }
                })
                .collect(),
        })
        .collect();

    debug!(state = %state.name, talukas, villages, "flattened state");

    let summary = StateSummary {
        name: state.name.clone(),
        code: state.code.clone(),
        districts: state.districts.len(),
        talukas,
        villages,
    };
    let shard = StateShard {
        slug: slugify(&state.name),
        document: StateShardDocument {
            state: state.name.clone(),
            code: state.code.clone(),
            districts,
        },
    };
    (summary, shard)
}

impl Flattened {
    /// Total number of records across all search buckets.
    pub fn indexed(&self) -> usize {
        self.search_index.values().map(Vec::len).sum()
    }

    /// Makes every shard slug unique and non-empty according to `policy`.
    ///
    /// Runs before any file is written, so a failing policy leaves the
    /// output directory untouched.
    pub fn resolve_slugs(&mut self, policy: SlugPolicy) -> Result<()> {
        let mut seen: HashMap<String, String> = HashMap::new();
        for shard in &mut self.shards {
            let name = &shard.document.state;
            let code_slug = slugify(&shard.document.code);

            if shard.slug.is_empty() {
                if policy == SlugPolicy::Fail || code_slug.is_empty() {
                    return Err(GeoError::EmptySlug {
                        name: name.clone(),
                        code: shard.document.code.clone(),
                    });
                }
                shard.slug = code_slug.clone();
            }

            if let Some(first) = seen.get(&shard.slug) {
                let candidate = format!("{}-{}", shard.slug, code_slug);
                if policy == SlugPolicy::Fail || code_slug.is_empty() || seen.contains_key(&candidate) {
                    return Err(GeoError::SlugCollision {
                        slug: shard.slug.clone(),
                        first: first.clone(),
                        second: name.clone(),
                    });
                }
                debug!(from = %shard.slug, to = %candidate, "disambiguated state slug");
                shard.slug = candidate;
            }

            seen.insert(shard.slug.clone(), name.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{District, Taluka, Village};

    fn state(code: &str, name: &str, villages: &[&str]) -> State {
        State {
            code: code.into(),
            name: name.into(),
            districts: vec![District {
                code: "D1".into(),
                name: "District One".into(),
                talukas: vec![Taluka {
                    code: "T1".into(),
                    name: "Taluka One".into(),
                    villages: villages
                        .iter()
                        .enumerate()
                        .map(|(i, v)| Village {
                            code: format!("{:03}", i + 1),
                            name: (*v).into(),
                        })
                        .collect(),
                }],
            }],
        }
    }

    #[test]
    fn scenario_single_village() {
        let tree = IndiaLocations {
            states: vec![State {
                code: "MH".into(),
                name: "Maharashtra".into(),
                districts: vec![District {
                    code: "MUM".into(),
                    name: "Mumbai".into(),
                    talukas: vec![Taluka {
                        code: "AND".into(),
                        name: "Andheri".into(),
                        villages: vec![Village {
                            code: "001".into(),
                            name: "Bandra".into(),
                        }],
                    }],
                }],
            }],
        };
        let f = flatten(&tree);
        assert_eq!(
            f.summaries,
            vec![StateSummary {
                name: "Maharashtra".into(),
                code: "MH".into(),
                districts: 1,
                talukas: 1,
                villages: 1,
            }]
        );
        assert_eq!(f.shards[0].file_name(), "maharashtra.json");
        let v = f.shards[0].document.villages().next().unwrap();
        assert_eq!(v.unique_code, "MH-MUM-AND-001");
        let bucket = &f.search_index[&'b'];
        assert_eq!(bucket.len(), 1);
        assert_eq!(bucket[0].full_path, "Maharashtra > Mumbai > Andheri > Bandra");
    }

    #[test]
    fn non_letter_villages_stay_in_shard_but_not_in_index() {
        let tree = IndiaLocations {
            states: vec![state("KA", "Karnataka", &["7 Mile Post", "Hampi", "ಮೈಸೂರು", "hubli"])],
        };
        let f = flatten(&tree);
        assert_eq!(f.counts.villages, 4);
        assert_eq!(f.shards[0].document.village_count(), 4);
        assert_eq!(f.indexed(), 2);
        assert_eq!(f.unindexed, 2);
        assert_eq!(f.search_index.keys().copied().collect::<Vec<_>>(), vec!['h']);
        assert!(f
            .search_index
            .values()
            .flatten()
            .all(|r| r.village_name != "7 Mile Post"));
        // insertion order inside a bucket
        let names: Vec<_> = f.search_index[&'h'].iter().map(|r| r.village_name.as_str()).collect();
        assert_eq!(names, vec!["Hampi", "hubli"]);
    }

    #[test]
    fn repeated_runs_do_not_share_index_state() {
        let tree = IndiaLocations {
            states: vec![state("GA", "Goa", &["Anjuna"])],
        };
        let a = flatten(&tree);
        let b = flatten(&tree);
        assert_eq!(a.search_index, b.search_index);
        assert_eq!(b.indexed(), 1);
    }

    #[test]
    fn colliding_slugs_fail_by_default() {
        let tree = IndiaLocations {
            states: vec![state("DN", "Dadra & Nagar", &[]), state("DG", "Dadra @ Nagar", &[])],
        };
        let mut f = flatten(&tree);
        let err = f.resolve_slugs(SlugPolicy::Fail).unwrap_err();
        assert!(matches!(err, GeoError::SlugCollision { ref slug, .. } if slug == "dadra--nagar"), "{err}");
    }

    #[test]
    fn colliding_slugs_can_append_code() {
        let tree = IndiaLocations {
            states: vec![state("DN", "Dadra & Nagar", &[]), state("DG", "Dadra @ Nagar", &[])],
        };
        let mut f = flatten(&tree);
        f.resolve_slugs(SlugPolicy::AppendCode).unwrap();
        let slugs: Vec<_> = f.shards.iter().map(|s| s.slug.as_str()).collect();
        assert_eq!(slugs, vec!["dadra--nagar", "dadra--nagar-dg"]);
    }

    #[test]
    fn empty_slug_falls_back_to_code_only_when_allowed() {
        let tree = IndiaLocations {
            states: vec![state("TN", "தமிழ்நாடு", &[])],
        };
        let mut f = flatten(&tree);
        assert!(matches!(
            f.clone().resolve_slugs(SlugPolicy::Fail),
            Err(GeoError::EmptySlug { .. })
        ));
        f.resolve_slugs(SlugPolicy::AppendCode).unwrap();
        assert_eq!(f.shards[0].slug, "tn");
    }
}
