// crates/bharat-core/src/search.rs

//! Read side of the static API.
//!
//! [`StaticApi`] answers the same questions the browse UI asks over HTTP,
//! straight from a generated directory: the state list, one state's
//! sub-tree, the stats and a first-letter search.
use crate::api::{
    ManifestDocument, SearchBucketDocument, StateShardDocument, StateSummary, StatesDocument,
    StatsDocument,
};
use crate::builder::{INDEX_FILE, SEARCH_DIR, STATES_DIR, STATES_FILE, STATS_FILE};
use crate::error::{GeoError, Result};
use crate::record::FlattenedLocationRecord;
use crate::text::{fold_key, slugify};
use crate::traits::LocationSearch;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct StaticApi {
    root: PathBuf,
}

impl StaticApi {
    /// Opens a generated API directory. Only checks that it exists.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(GeoError::NotFound(format!(
                "static API directory {}",
                root.display()
            )));
        }
        Ok(StaticApi { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn states(&self) -> Result<Vec<StateSummary>> {
        let doc: StatesDocument = self.read(&self.root.join(STATES_FILE))?;
        Ok(doc.states)
    }

    /// Sub-tree of a state, looked up by display name (`"Tamil Nadu"`)
    /// through the same slug rule the builder uses.
    pub fn state_details(&self, state_name: &str) -> Result<StateShardDocument> {
        let slug = slugify(state_name.trim());
        if slug.is_empty() {
            return Err(GeoError::NotFound(format!("state {state_name:?}")));
        }
        let path = self.root.join(STATES_DIR).join(format!("{slug}.json"));
        self.read_optional(&path)?
            .ok_or_else(|| GeoError::NotFound(format!("state {state_name:?}")))
    }

    pub fn stats(&self) -> Result<StatsDocument> {
        self.read(&self.root.join(STATS_FILE))
    }

    pub fn manifest(&self) -> Result<ManifestDocument> {
        self.read(&self.root.join(INDEX_FILE))
    }

    /// The bucket for `letter`, or `None` when no village starts with it.
    pub fn bucket(&self, letter: char) -> Result<Option<SearchBucketDocument>> {
        let letter = letter.to_ascii_lowercase();
        if !letter.is_ascii_alphanumeric() {
            return Ok(None);
        }
        self.read_optional(&self.root.join(SEARCH_DIR).join(format!("{letter}.json")))
    }

    fn read<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        self.read_optional(path)?
            .ok_or_else(|| GeoError::NotFound(path.display().to_string()))
    }

    fn read_optional<T: DeserializeOwned>(&self, path: &Path) -> Result<Option<T>> {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(GeoError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        debug!(path = %path.display(), "reading");
        serde_json::from_reader(BufReader::new(file))
            .map(Some)
            .map_err(|source| GeoError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }
}

impl LocationSearch for StaticApi {
    /// Loads only the bucket of the query's first character, then keeps
    /// records whose search text, village name or unique code contains the
    /// query. Queries starting with anything but `[a-z0-9]` find nothing.
    fn search(&self, query: &str, limit: usize) -> Result<Vec<FlattenedLocationRecord>> {
        let q = query.trim().to_lowercase();
        let Some(first) = q.chars().next() else {
            return Ok(Vec::new());
        };
        if !(first.is_ascii_lowercase() || first.is_ascii_digit()) {
            return Ok(Vec::new());
        }
        let Some(bucket) = self.bucket(first)? else {
            return Ok(Vec::new());
        };
        Ok(bucket
            .locations
            .into_iter()
            .filter(|r| {
                r.search_text.contains(&q)
                    || r.village_name.to_lowercase().contains(&q)
                    || r.unique_code.to_lowercase().contains(&q)
            })
            .take(limit)
            .collect())
    }
}

impl LocationSearch for [FlattenedLocationRecord] {
    /// Full scan over every name level and the unique code, folded.
    fn search(&self, query: &str, limit: usize) -> Result<Vec<FlattenedLocationRecord>> {
        let q = fold_key(query.trim());
        if q.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self
            .iter()
            .filter(|r| {
                [
                    r.village_name.as_str(),
                    r.district_name.as_str(),
                    r.taluka_name.as_str(),
                    r.state_name.as_str(),
                    r.unique_code.as_str(),
                ]
                .iter()
                .any(|field| fold_key(field).contains(&q))
            })
            .take(limit)
            .cloned()
            .collect())
    }
}
