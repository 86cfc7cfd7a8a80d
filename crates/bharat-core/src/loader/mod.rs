// crates/bharat-core/src/loader/mod.rs

//! # Tree Reader
//!
//! Handles the physical layer (file access, optional gzip) and hands the
//! parsed document to shape validation. The result is always a fully
//! validated [`IndiaLocations`]; traversal code never sees a missing field.

use crate::error::{GeoError, Result};
use crate::model::IndiaLocations;
use crate::raw::IndiaRaw;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

pub mod common_io;

#[cfg(feature = "cache")]
mod cache;

/// Default location of the source document, relative to the working directory.
pub const DEFAULT_SOURCE: &str = "public/india_locations.json";

/// Reads, parses and validates the source tree at `path`.
///
/// Fails with [`GeoError::Read`] if the file cannot be opened,
/// [`GeoError::Parse`] if it is not valid JSON, and [`GeoError::Shape`] if a
/// node lacks a field the traversal needs.
pub fn load_tree(path: impl AsRef<Path>) -> Result<IndiaLocations> {
    let path = path.as_ref();
    info!(source = %path.display(), "reading location tree");
    let reader = common_io::open_stream(path)?;
    let tree = parse_tree(reader, path)?;
    debug!(states = tree.states.len(), "location tree validated");
    Ok(tree)
}

/// Parses and validates a tree from any reader; `origin` is only used in errors.
pub fn parse_tree<R: Read>(reader: R, origin: &Path) -> Result<IndiaLocations> {
    let raw: IndiaRaw = serde_json::from_reader(reader).map_err(|source| GeoError::Parse {
        path: origin.to_path_buf(),
        source,
    })?;
    IndiaLocations::from_raw(raw)
}

/// Like [`load_tree`], but reuses a bincode snapshot of the validated tree
/// when one exists next to the source and is not older than it.
///
/// Writing the snapshot is best-effort: a read-only data directory only
/// costs the speed-up, never the run.
#[cfg(feature = "cache")]
pub fn load_tree_cached(path: impl AsRef<Path>) -> Result<IndiaLocations> {
    cache::load_via_cache(path.as_ref())
}

/// Without the `cache` feature this is plain [`load_tree`].
#[cfg(not(feature = "cache"))]
pub fn load_tree_cached(path: impl AsRef<Path>) -> Result<IndiaLocations> {
    load_tree(path)
}
