// crates/bharat-core/src/lib.rs

//! # bharat-core
//!
//! Turns the nested India location tree (state → district → taluka →
//! village) into a sharded, static JSON API, and reads that API back.
//!
//! ```no_run
//! use bharat_core::{BuildJob, BuildOptions, LocationSearch, StaticApi};
//!
//! # fn main() -> bharat_core::Result<()> {
//! let report = BuildJob::new(BuildOptions::default()).run()?;
//! println!("{} villages", report.counts.villages);
//!
//! let api = StaticApi::open("public/api")?;
//! for hit in api.search("band", 10)? {
//!     println!("{} ({})", hit.full_path, hit.unique_code);
//! }
//! # Ok(())
//! # }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod api; // JSON views of the output files
pub mod builder;
pub mod code;
pub mod common;
pub mod config;
pub mod error;
pub mod flatten;
pub mod loader;
pub mod manifest;
pub mod model;
pub mod record;
pub mod search;
pub mod text;
pub mod traits;
// Raw input, only consumed by the loader
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::builder::{build_from_tree, BuildJob, BuildOptions, BuildReport, JobState};
pub use crate::code::CodeStrategy;
pub use crate::common::LocationCounts;
pub use crate::config::Config;
pub use crate::error::{GeoError, Result};
pub use crate::flatten::{flatten, Flattened, SlugPolicy};
pub use crate::loader::{load_tree, load_tree_cached};
pub use crate::model::{District, IndiaLocations, State, Taluka, Village};
pub use crate::record::{FlattenedLocationRecord, LocationDraft, LocationPath};
pub use crate::search::StaticApi;
pub use crate::traits::{LocationSearch, NameMatch, DEFAULT_SEARCH_LIMIT};
