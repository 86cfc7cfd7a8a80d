// crates/bharat-core/src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Every way a build or a static-API query can fail.
///
/// The first four variants are the taxonomy of the batch job: the source
/// could not be read, was not JSON, was JSON of the wrong shape, or the
/// output could not be written. Everything else is policy (slug handling,
/// job lifecycle) or lookup failures on the reader side.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A node is missing a field the traversal needs, e.g. a taluka without `villages`.
    #[error("invalid location tree at {path}: missing `{field}`")]
    Shape { path: String, field: &'static str },

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("states {first:?} and {second:?} both map to file name {slug:?}")]
    SlugCollision {
        slug: String,
        first: String,
        second: String,
    },

    #[error("state {name:?} ({code}) has no usable characters for a file name")]
    EmptySlug { name: String, code: String },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("build job has already run")]
    AlreadyRun,

    #[cfg(feature = "cache")]
    #[error("tree cache error: {0}")]
    Cache(#[from] bincode::Error),
}

impl From<figment::Error> for GeoError {
    fn from(e: figment::Error) -> Self {
        GeoError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GeoError>;
