//! Basic usage example for bharat-rs
//!
//! This example demonstrates how to:
//! - Load and validate the bundled sample tree
//! - Flatten it in memory and look at the search index
//! - Build the static API into a temporary directory
//! - Query the generated files
//!
//! Run with `cargo run --example basic_usage`.

use bharat_core::{
    build_from_tree, flatten, load_tree, BuildOptions, LocationSearch, NameMatch, Result,
    StaticApi,
};
use std::path::PathBuf;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();
    println!("=== bharat-rs Basic Usage Example ===\n");

    let source: PathBuf = [
        env!("CARGO_MANIFEST_DIR"),
        "crates/bharat-core/tests/data/india_sample.json",
    ]
    .iter()
    .collect();

    // Example 1: Load the tree
    println!("--- Example 1: Load the location tree ---");
    let tree = load_tree(&source)?;
    let counts = tree.counts();
    println!(
        "{} states, {} districts, {} talukas, {} villages\n",
        counts.states, counts.districts, counts.talukas, counts.villages
    );

    // Example 2: Walk down the hierarchy
    println!("--- Example 2: Browse a state ---");
    if let Some(state) = tree.find_state("maharashtra") {
        for district in state.districts() {
            println!("{} ({})", district.name(), district.code());
            for taluka in district.talukas() {
                let names: Vec<&str> = taluka.villages().iter().map(|v| v.name()).collect();
                println!("  {}: {}", taluka.name(), names.join(", "));
            }
        }
    }
    println!();

    // Example 3: Flatten in memory
    println!("--- Example 3: First-letter search index ---");
    let flat = flatten(&tree);
    for (letter, records) in &flat.search_index {
        println!("{}: {} villages", letter.to_ascii_uppercase(), records.len());
    }
    println!("not indexed: {}\n", flat.unindexed);

    // Example 4: Build and query the static API
    println!("--- Example 4: Build and search ---");
    let out = std::env::temp_dir().join("bharat-demo-api");
    let report = build_from_tree(
        &tree,
        &BuildOptions {
            output: out.clone(),
            ..Default::default()
        },
    )?;
    println!("{} files in {}", report.files_written, out.display());

    let api = StaticApi::open(&out)?;
    for hit in api.search("b", 5)? {
        println!("  {}: {}", hit.unique_code, hit.full_path);
    }
    let islands = api
        .states()?
        .into_iter()
        .filter(|s| s.name.contains("Islands"))
        .count();
    println!("island territories: {islands}");

    if let Some(state) = tree.find_state("AN") {
        println!(
            "AN is {} (named 'andaman & nicobar islands': {})",
            state.name(),
            state.is_named("andaman & nicobar islands")
        );
    }

    Ok(())
}
