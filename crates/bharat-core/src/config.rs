// crates/bharat-core/src/config.rs

//! Layered configuration.
//!
//! Figment merges, lowest priority first: built-in defaults, `bharat.toml`
//! (or an explicit file), then `BHARAT_*` environment variables. The CLI
//! applies its own flags on top of the extracted value.
use crate::builder::BuildOptions;
use crate::error::{GeoError, Result};
use crate::flatten::SlugPolicy;
use crate::loader::DEFAULT_SOURCE;
use chrono::{DateTime, TimeZone, Utc};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "bharat.toml";
pub const ENV_PREFIX: &str = "BHARAT_";
pub const DEFAULT_OUTPUT: &str = "public/api";
pub const DEFAULT_API_BASE: &str = "/api";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Source tree, `.json` or `.json.gz`.
    pub input: PathBuf,
    /// Root directory of the generated static API.
    pub output: PathBuf,
    /// URL prefix the output is served under; used in the manifest.
    pub api_base: String,
    pub pretty: bool,
    /// Write into a staging directory and swap it in when complete.
    pub atomic: bool,
    pub slug_policy: SlugPolicy,
    /// Fixed RFC 3339 build time, for reproducible `stats.json`.
    pub timestamp: Option<String>,
    /// Reuse a bincode snapshot of the parsed source.
    pub cache: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: PathBuf::from(DEFAULT_SOURCE),
            output: PathBuf::from(DEFAULT_OUTPUT),
            api_base: DEFAULT_API_BASE.to_owned(),
            pretty: true,
            atomic: false,
            slug_policy: SlugPolicy::Fail,
            timestamp: None,
            cache: false,
        }
    }
}

impl Config {
    /// The provider stack; `file` replaces `bharat.toml` when given.
    pub fn figment(file: Option<&Path>) -> Figment {
        let toml = match file {
            Some(path) => Toml::file_exact(path),
            None => Toml::file(CONFIG_FILE),
        };
        Figment::from(Serialized::defaults(Config::default()))
            .merge(toml)
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn load(file: Option<&Path>) -> Result<Self> {
        if let Some(path) = file {
            if !path.exists() {
                return Err(GeoError::Config(format!(
                    "config file {} does not exist",
                    path.display()
                )));
            }
        }
        let config: Config = Self::figment(file).extract()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !self.api_base.starts_with('/') && !self.api_base.contains("://") {
            return Err(GeoError::Config(format!(
                "api_base must be an absolute path or URL, got {:?}",
                self.api_base
            )));
        }
        if let Some(ts) = &self.timestamp {
            parse_timestamp(ts)?;
        }
        Ok(())
    }

    /// Build time to stamp into the output: `timestamp`, else
    /// `SOURCE_DATE_EPOCH`, else `None` (the wall clock at run time).
    pub fn resolved_timestamp(&self) -> Result<Option<DateTime<Utc>>> {
        if let Some(ts) = &self.timestamp {
            return parse_timestamp(ts).map(Some);
        }
        match std::env::var("SOURCE_DATE_EPOCH") {
            Ok(secs) => parse_epoch(&secs).map(Some),
            Err(_) => Ok(None),
        }
    }

    pub fn build_options(&self) -> Result<BuildOptions> {
        Ok(BuildOptions {
            input: self.input.clone(),
            output: self.output.clone(),
            api_base: self.api_base.trim_end_matches('/').to_owned(),
            pretty: self.pretty,
            atomic: self.atomic,
            slug_policy: self.slug_policy,
            timestamp: self.resolved_timestamp()?,
            use_cache: self.cache,
        })
    }
}

pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| GeoError::Config(format!("invalid timestamp {s:?}: {e}")))
}

fn parse_epoch(s: &str) -> Result<DateTime<Utc>> {
    s.trim()
        .parse::<i64>()
        .ok()
        .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
        .ok_or_else(|| GeoError::Config(format!("invalid SOURCE_DATE_EPOCH {s:?}")))
}
