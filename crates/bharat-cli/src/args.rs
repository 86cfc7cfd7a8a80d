use bharat_core::{SlugPolicy, DEFAULT_SEARCH_LIMIT};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for bharat-cli
#[derive(Debug, Parser)]
#[command(
    name = "bharat",
    version,
    about = "Build and query the static JSON API of Indian states, districts, talukas and villages"
)]
pub struct CliArgs {
    /// TOML config file (default: ./bharat.toml when present)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Root of a generated static API for the query commands (default: the configured output)
    #[arg(short = 'a', long = "api", global = true)]
    pub api: Option<PathBuf>,

    /// More log output (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate states.json, state shards, search buckets, stats.json and index.json
    Build(BuildArgs),

    /// Read and validate the source tree without writing anything
    Validate {
        /// Source tree (.json or .json.gz)
        #[arg(short = 'i', long = "input")]
        input: Option<PathBuf>,
    },

    /// Show the totals from stats.json
    Stats,

    /// List all states with their counts
    States,

    /// Show the districts, talukas and villages of one state
    State {
        /// State name as displayed, e.g. "Tamil Nadu"
        name: String,
    },

    /// Search villages by name, path or unique code
    Search {
        /// Text to look for (case-insensitive); the first letter selects the bucket
        query: String,

        /// Maximum number of hits
        #[arg(short = 'n', long = "limit", default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: usize,
    },

    /// Turn a hand-entered location into a record with a random-suffix code
    Draft {
        state: String,
        district: String,
        taluka: String,
        village: String,
    },
}

#[derive(Debug, clap::Args)]
pub struct BuildArgs {
    /// Source tree (.json or .json.gz)
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output directory
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// URL prefix the output is served under, e.g. /api
    #[arg(long = "api-base")]
    pub api_base: Option<String>,

    /// Write single-line JSON instead of indented JSON
    #[arg(long = "compact")]
    pub compact: bool,

    /// Build into a staging directory and swap it in when complete
    #[arg(long = "atomic")]
    pub atomic: bool,

    /// What to do when two states map to the same file name
    #[arg(long = "slug-policy", value_enum)]
    pub slug_policy: Option<SlugPolicyArg>,

    /// Fixed RFC 3339 build time for reproducible stats.json
    #[arg(long = "timestamp")]
    pub timestamp: Option<String>,

    /// Reuse a binary snapshot of the parsed source
    #[arg(long = "cache")]
    pub cache: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SlugPolicyArg {
    Fail,
    AppendCode,
}

impl From<SlugPolicyArg> for SlugPolicy {
    fn from(arg: SlugPolicyArg) -> Self {
        match arg {
            SlugPolicyArg::Fail => SlugPolicy::Fail,
            SlugPolicyArg::AppendCode => SlugPolicy::AppendCode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn build_flags_parse() {
        let args = CliArgs::parse_from([
            "bharat",
            "build",
            "-i",
            "data/india.json.gz",
            "--slug-policy",
            "append-code",
            "--atomic",
        ]);
        match args.command {
            Commands::Build(b) => {
                assert_eq!(b.input, Some(PathBuf::from("data/india.json.gz")));
                assert!(b.atomic);
                assert!(matches!(b.slug_policy, Some(SlugPolicyArg::AppendCode)));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn search_limit_defaults() {
        let args = CliArgs::parse_from(["bharat", "--api", "out", "search", "band"]);
        assert_eq!(args.api, Some(PathBuf::from("out")));
        assert!(matches!(args.command, Commands::Search { limit: 50, .. }));
    }
}
