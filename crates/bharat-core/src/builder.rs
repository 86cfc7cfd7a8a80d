// crates/bharat-core/src/builder.rs

//! # Static API Builder
//!
//! Drives one run of the batch job: load the tree, flatten it, then write
//! the file set below the output root:
//!
//! ```text
//! states.json
//! states/<slug>.json
//! search/<letter>.json
//! stats.json
//! index.json
//! ```
//!
//! A run either completes or fails as a whole; there are no retries. Without
//! `atomic`, files written before a failure stay on disk and the directory
//! must be treated as untrustworthy until the next successful run.

use crate::api::{SearchBucketDocument, StatesDocument};
use crate::common::LocationCounts;
use crate::config::{DEFAULT_API_BASE, DEFAULT_OUTPUT};
use crate::error::{GeoError, Result};
use crate::flatten::{flatten, Flattened, SlugPolicy};
use crate::loader::{self, DEFAULT_SOURCE};
use crate::manifest::{manifest_document, stats_document};
use crate::model::IndiaLocations;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

pub const STATES_FILE: &str = "states.json";
pub const STATES_DIR: &str = "states";
pub const SEARCH_DIR: &str = "search";
pub const STATS_FILE: &str = "stats.json";
pub const INDEX_FILE: &str = "index.json";

// -----------------------------------------------------------------------------
// CONFIGURATION
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    /// URL prefix without trailing slash, e.g. `/api`.
    pub api_base: String,
    pub pretty: bool,
    pub atomic: bool,
    pub slug_policy: SlugPolicy,
    /// Fixed build time; `None` means the wall clock.
    pub timestamp: Option<DateTime<Utc>>,
    pub use_cache: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        BuildOptions {
            input: PathBuf::from(DEFAULT_SOURCE),
            output: PathBuf::from(DEFAULT_OUTPUT),
            api_base: DEFAULT_API_BASE.to_owned(),
            pretty: true,
            atomic: false,
            slug_policy: SlugPolicy::Fail,
            timestamp: None,
            use_cache: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    NotStarted,
    Running,
    Completed,
    Failed,
}

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub counts: LocationCounts,
    /// Villages that made it into a search bucket.
    pub indexed: usize,
    /// Villages whose name does not start with a letter.
    pub unindexed: usize,
    /// Letters with a bucket file, in order.
    pub letters: Vec<char>,
    pub files_written: usize,
    pub output_dir: PathBuf,
    pub last_updated: String,
}

// -----------------------------------------------------------------------------
// JOB
// -----------------------------------------------------------------------------

/// One invocation of the generator. `NotStarted -> Running -> Completed | Failed`.
#[derive(Debug)]
pub struct BuildJob {
    options: BuildOptions,
    state: JobState,
}

impl BuildJob {
    pub fn new(options: BuildOptions) -> Self {
        BuildJob {
            options,
            state: JobState::NotStarted,
        }
    }

    pub fn state(&self) -> JobState {
        self.state
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Runs the job once. A second call fails with [`GeoError::AlreadyRun`].
    pub fn run(&mut self) -> Result<BuildReport> {
        if self.state != JobState::NotStarted {
            return Err(GeoError::AlreadyRun);
        }
        self.state = JobState::Running;
        info!(
            input = %self.options.input.display(),
            output = %self.options.output.display(),
            "building static API"
        );

        let result = self.load().and_then(|tree| build_from_tree(&tree, &self.options));
        match &result {
            Ok(report) => {
                self.state = JobState::Completed;
                info!(
                    files = report.files_written,
                    villages = report.counts.villages,
                    "static API build completed"
                );
            }
            Err(e) => {
                self.state = JobState::Failed;
                error!(error = %e, "static API build failed");
            }
        }
        result
    }

    fn load(&self) -> Result<IndiaLocations> {
        if self.options.use_cache {
            loader::load_tree_cached(&self.options.input)
        } else {
            loader::load_tree(&self.options.input)
        }
    }
}

/// Flattens `tree` and writes the complete file set described by `options`.
///
/// Slugs are checked before the first write, so a collision never leaves
/// partial output behind.
pub fn build_from_tree(tree: &IndiaLocations, options: &BuildOptions) -> Result<BuildReport> {
    let mut flat = flatten(tree);
    flat.resolve_slugs(options.slug_policy)?;
    info!(
        states = flat.counts.states,
        districts = flat.counts.districts,
        talukas = flat.counts.talukas,
        villages = flat.counts.villages,
        letters = flat.search_index.len(),
        "tree flattened"
    );
    if flat.unindexed > 0 {
        warn!(
            count = flat.unindexed,
            "villages not starting with a letter are left out of the search index"
        );
    }

    let generated_at = options.timestamp.unwrap_or_else(Utc::now);
    let last_updated = generated_at.to_rfc3339_opts(SecondsFormat::Millis, true);

    let report = BuildReport {
        counts: flat.counts,
        indexed: flat.indexed(),
        unindexed: flat.unindexed,
        letters: flat.search_index.keys().copied().collect(),
        files_written: 3 + flat.shards.len() + flat.search_index.len(),
        output_dir: options.output.clone(),
        last_updated: last_updated.clone(),
    };

    let writer = JsonWriter {
        pretty: options.pretty,
    };
    if options.atomic {
        publish_atomically(&options.output, |staging| {
            write_file_set(staging, flat, &last_updated, &options.api_base, writer)
        })?;
    } else {
        write_file_set(&options.output, flat, &last_updated, &options.api_base, writer)?;
    }

    Ok(report)
}

// -----------------------------------------------------------------------------
// OUTPUT
// -----------------------------------------------------------------------------

fn write_file_set(
    root: &Path,
    flat: Flattened,
    last_updated: &str,
    api_base: &str,
    writer: JsonWriter,
) -> Result<()> {
    let states_dir = root.join(STATES_DIR);
    let search_dir = root.join(SEARCH_DIR);
    for dir in [root, states_dir.as_path(), search_dir.as_path()] {
        fs::create_dir_all(dir).map_err(|source| GeoError::Write {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let Flattened {
        summaries,
        shards,
        search_index,
        counts,
        ..
    } = flat;

    writer.write(&root.join(STATES_FILE), &StatesDocument { states: summaries })?;

    for shard in &shards {
        writer.write(&states_dir.join(shard.file_name()), &shard.document)?;
    }
    info!(count = shards.len(), "wrote state shards");

    let buckets = search_index.len();
    for (letter, locations) in search_index {
        let doc = SearchBucketDocument {
            letter: letter.to_ascii_uppercase().to_string(),
            locations,
        };
        writer.write(&search_dir.join(format!("{letter}.json")), &doc)?;
    }
    info!(count = buckets, "wrote search buckets");

    let stats = stats_document(&counts, last_updated, api_base);
    writer.write(&root.join(STATS_FILE), &stats)?;
    writer.write(&root.join(INDEX_FILE), &manifest_document(stats, api_base))?;
    Ok(())
}

#[derive(Debug, Clone, Copy)]
struct JsonWriter {
    pretty: bool,
}

impl JsonWriter {
    /// Writes ANY serializable document to `path`, replacing existing content.
    fn write<T: Serialize>(&self, path: &Path, doc: &T) -> Result<()> {
        let write_err = |source| GeoError::Write {
            path: path.to_path_buf(),
            source,
        };
        let file = File::create(path).map_err(write_err)?;
        let mut out = BufWriter::new(file);
        let encoded = if self.pretty {
            serde_json::to_writer_pretty(&mut out, doc)
        } else {
            serde_json::to_writer(&mut out, doc)
        };
        encoded.map_err(|e| write_err(e.into()))?;
        out.flush().map_err(write_err)?;
        debug!(path = %path.display(), "wrote");
        Ok(())
    }
}

/// Builds into a sibling staging directory, then swaps it into `output`.
///
/// Readers of `output` see either the old or the new file set, except for
/// the short window between the two renames.
fn publish_atomically<F>(output: &Path, write: F) -> Result<()>
where
    F: FnOnce(&Path) -> Result<()>,
{
    let name = output
        .file_name()
        .ok_or_else(|| GeoError::Config(format!("output {} has no directory name", output.display())))?
        .to_string_lossy()
        .into_owned();
    let parent = output
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let staging = parent.join(format!(".{name}.staging"));
    let previous = parent.join(format!(".{name}.previous"));

    remove_if_exists(&staging)?;
    if let Err(e) = write(&staging) {
        if let Err(cleanup) = fs::remove_dir_all(&staging) {
            warn!(path = %staging.display(), error = %cleanup, "could not remove staging directory");
        }
        return Err(e);
    }

    let had_previous = output.exists();
    if had_previous {
        remove_if_exists(&previous)?;
        rename(output, &previous)?;
    }
    if let Err(e) = rename(&staging, output) {
        if had_previous {
            // put the old set back so readers keep a complete directory
            if let Err(restore) = fs::rename(&previous, output) {
                error!(error = %restore, "could not restore previous output");
            }
        }
        return Err(e);
    }
    if had_previous {
        if let Err(e) = fs::remove_dir_all(&previous) {
            warn!(path = %previous.display(), error = %e, "could not remove previous output");
        }
    }
    info!(output = %output.display(), "published new file set");
    Ok(())
}

fn remove_if_exists(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_dir_all(path).map_err(|source| GeoError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

fn rename(from: &Path, to: &Path) -> Result<()> {
    fs::rename(from, to).map_err(|source| GeoError::Write {
        path: to.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_runs_only_once_and_records_failure() {
        let dir = tempfile::tempdir().unwrap();
        let mut job = BuildJob::new(BuildOptions {
            input: dir.path().join("missing.json"),
            output: dir.path().join("api"),
            ..Default::default()
        });
        assert_eq!(job.state(), JobState::NotStarted);
        assert!(matches!(job.run(), Err(GeoError::Read { .. })));
        assert_eq!(job.state(), JobState::Failed);
        assert!(matches!(job.run(), Err(GeoError::AlreadyRun)));
        assert!(!dir.path().join("api").exists());
    }

    #[test]
    fn failed_staging_write_keeps_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("api");
        fs::create_dir_all(&out).unwrap();
        fs::write(out.join(STATS_FILE), "old").unwrap();

        let res = publish_atomically(&out, |staging| {
            fs::create_dir_all(staging).unwrap();
            Err(GeoError::NotFound("boom".into()))
        });
        assert!(res.is_err());
        assert_eq!(fs::read_to_string(out.join(STATS_FILE)).unwrap(), "old");
        assert!(!dir.path().join(".api.staging").exists());
    }

    #[test]
    fn atomic_publish_replaces_whole_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("api");
        fs::create_dir_all(out.join(STATES_DIR)).unwrap();
        fs::write(out.join(STATES_DIR).join("gone.json"), "{}").unwrap();

        publish_atomically(&out, |staging| {
            fs::create_dir_all(staging).unwrap();
            fs::write(staging.join(STATS_FILE), "new").unwrap();
            Ok(())
        })
        .unwrap();
        assert_eq!(fs::read_to_string(out.join(STATS_FILE)).unwrap(), "new");
        assert!(!out.join(STATES_DIR).join("gone.json").exists());
        assert!(!dir.path().join(".api.previous").exists());
    }
}
