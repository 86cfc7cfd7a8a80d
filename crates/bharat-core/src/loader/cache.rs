// crates/bharat-core/src/loader/cache.rs
use super::{common_io, load_tree};
use crate::error::{GeoError, Result};
use crate::model::IndiaLocations;

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, warn};

pub const CACHE_SUFFIX: &str = "tree.bin";

/// **Smart Load:** Checks cache, loads binary or builds from source.
pub(super) fn load_via_cache(path: &Path) -> Result<IndiaLocations> {
    let cache_path = common_io::get_cache_path(path, CACHE_SUFFIX);

    // 1. Check Cache
    if is_cache_fresh(path, &cache_path) {
        match read_snapshot(&cache_path) {
            Ok(tree) => {
                debug!(cache = %cache_path.display(), "using cached location tree");
                return Ok(tree);
            }
            Err(e) => warn!(cache = %cache_path.display(), error = %e, "ignoring unreadable tree cache"),
        }
    }

    // 2. Build
    let tree = load_tree(path)?;

    // 3. Cache
    if let Err(e) = write_snapshot(&cache_path, &tree) {
        warn!(cache = %cache_path.display(), error = %e, "could not write tree cache");
    }

    Ok(tree)
}

fn is_cache_fresh(json_path: &Path, cache_path: &Path) -> bool {
    let cache_time = match fs::metadata(cache_path).and_then(|m| m.modified()) {
        Ok(m) => m,
        Err(_) => return false,
    };
    match fs::metadata(json_path).and_then(|m| m.modified()) {
        Ok(json_time) => json_time <= cache_time,
        Err(_) => false,
    }
}

fn read_snapshot(cache_path: &Path) -> Result<IndiaLocations> {
    let file = File::open(cache_path).map_err(|source| GeoError::Read {
        path: cache_path.to_path_buf(),
        source,
    })?;
    Ok(bincode::deserialize_from(BufReader::new(file))?)
}

fn write_snapshot(cache_path: &Path, tree: &IndiaLocations) -> Result<()> {
    let write_err = |source| GeoError::Write {
        path: cache_path.to_path_buf(),
        source,
    };
    let file = File::create(cache_path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    bincode::serialize_into(&mut writer, tree)?;
    writer.flush().map_err(write_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = r#"{"states":[{"code":"GA","name":"Goa","districts":[
        {"code":"NG","name":"North Goa","talukas":[
            {"code":"BAR","name":"Bardez","villages":[{"code":"001","name":"Anjuna"}]}
        ]}
    ]}]}"#;

    #[test]
    fn second_load_comes_from_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("india.json");
        fs::write(&src, SOURCE).unwrap();

        let first = load_via_cache(&src).unwrap();
        let cache_path = common_io::get_cache_path(&src, CACHE_SUFFIX);
        assert!(cache_path.exists());
        assert!(is_cache_fresh(&src, &cache_path));

        let second = load_via_cache(&src).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn corrupt_snapshot_falls_back_to_source() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("india.json");
        fs::write(&src, SOURCE).unwrap();
        let cache_path = common_io::get_cache_path(&src, CACHE_SUFFIX);
        fs::write(&cache_path, b"not bincode").unwrap();

        let tree = load_via_cache(&src).unwrap();
        assert_eq!(tree.states[0].code, "GA");
    }
}
