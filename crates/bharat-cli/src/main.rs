//! bharat: command-line interface for bharat-core
//!
//! Builds the static JSON API from the nested location tree and queries a
//! generated API directory from the terminal.
//!
//! Usage examples
//! --------------
//!
//! - Generate the API (reads ./bharat.toml and BHARAT_* variables if present)
//!   $ bharat build -i public/india_locations.json -o public/api
//!
//! - Reproducible build into a staging directory, swapped in at the end
//!   $ bharat build --atomic --timestamp 2024-01-01T00:00:00Z
//!
//! - Check a source file without writing anything
//!   $ bharat validate -i data/india_locations.json.gz
//!
//! - Query the generated files
//!   $ bharat stats
//!   $ bharat states
//!   $ bharat state "Tamil Nadu"
//!   $ bharat search bandra --limit 10
//!
//! Logging goes to stderr; set RUST_LOG (e.g. `RUST_LOG=bharat_core=debug`)
//! or pass -v / -q.
mod args;

use crate::args::{BuildArgs, CliArgs, Commands};
use anyhow::Context;
use bharat_core::config::parse_timestamp;
use bharat_core::{
    load_tree, BuildJob, Config, LocationDraft, LocationSearch, StaticApi,
};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose, args.quiet);

    let config = Config::load(args.config.as_deref()).context("loading configuration")?;
    let api_root = args.api.clone().unwrap_or_else(|| config.output.clone());

    match args.command {
        Commands::Build(build) => {
            let config = apply_build_flags(config, build)?;
            let options = config.build_options()?;
            let report = BuildJob::new(options).run()?;
            println!("Static API written to {}", report.output_dir.display());
            println!("  States:    {}", report.counts.states);
            println!("  Districts: {}", report.counts.districts);
            println!("  Talukas:   {}", report.counts.talukas);
            println!("  Villages:  {}", report.counts.villages);
            println!(
                "  Searchable: {} ({} without a leading letter)",
                report.indexed, report.unindexed
            );
            let letters: String = report.letters.iter().collect();
            println!("  Buckets:   {letters}");
            println!("  Files:     {}", report.files_written);
        }

        Commands::Validate { input } => {
            let input = input.unwrap_or(config.input);
            let tree = load_tree(&input)
                .with_context(|| format!("validating {}", input.display()))?;
            let counts = tree.counts();
            println!("{} is valid", input.display());
            println!("  States:    {}", counts.states);
            println!("  Districts: {}", counts.districts);
            println!("  Talukas:   {}", counts.talukas);
            println!("  Villages:  {}", counts.villages);
        }

        Commands::Stats => {
            let stats = open_api(api_root)?.stats()?;
            println!("Location statistics (updated {}):", stats.last_updated);
            println!("  States:    {}", stats.total_states);
            println!("  Districts: {}", stats.total_districts);
            println!("  Talukas:   {}", stats.total_talukas);
            println!("  Villages:  {}", stats.total_villages);
        }

        Commands::States => {
            for s in open_api(api_root)?.states()? {
                println!(
                    "{} ({}): {} districts, {} talukas, {} villages",
                    s.name, s.code, s.districts, s.talukas, s.villages
                );
            }
        }

        Commands::State { name } => {
            let shard = open_api(api_root)?.state_details(&name)?;
            println!("{} ({})", shard.state, shard.code);
            for d in &shard.districts {
                println!("- {} ({})", d.name, d.code);
                for t in &d.talukas {
                    println!("  - {} ({}): {} villages", t.name, t.code, t.villages.len());
                }
            }
        }

        Commands::Search { query, limit } => {
            let hits = open_api(api_root)?.search(&query, limit)?;
            if hits.is_empty() {
                println!("No locations found matching: {query}");
            } else {
                for r in hits {
                    println!("{}: {}", r.unique_code, r.full_path);
                }
            }
        }

        Commands::Draft {
            state,
            district,
            taluka,
            village,
        } => {
            let record = LocationDraft {
                state_name: state,
                district_name: district,
                taluka_name: taluka,
                village_name: village,
                ..Default::default()
            }
            .to_record();
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "warn",
        (false, 0) => "info",
        (false, 1) => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("bharat_core={level},bharat={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// CLI flags win over file and environment configuration.
fn apply_build_flags(mut config: Config, flags: BuildArgs) -> anyhow::Result<Config> {
    if let Some(input) = flags.input {
        config.input = input;
    }
    if let Some(output) = flags.output {
        config.output = output;
    }
    if let Some(base) = flags.api_base {
        config.api_base = base;
    }
    if let Some(policy) = flags.slug_policy {
        config.slug_policy = policy.into();
    }
    if let Some(ts) = flags.timestamp {
        parse_timestamp(&ts)?;
        config.timestamp = Some(ts);
    }
    config.pretty &= !flags.compact;
    config.atomic |= flags.atomic;
    config.cache |= flags.cache;
    info!(?config, "effective build configuration");
    Ok(config)
}

fn open_api(root: PathBuf) -> anyhow::Result<StaticApi> {
    StaticApi::open(&root).with_context(|| {
        format!(
            "no static API at {} (run `bharat build` or pass --api)",
            root.display()
        )
    })
}
