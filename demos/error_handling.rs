//! Error handling example for bharat-rs
//!
//! This example shows how each failure of the build job surfaces as a
//! distinct `GeoError` variant.

use bharat_core::{build_from_tree, BuildJob, BuildOptions, GeoError, IndiaLocations, StaticApi};
use std::fs;

fn main() -> anyhow::Result<()> {
    println!("=== bharat-rs Error Handling Example ===\n");
    let dir = std::env::temp_dir().join("bharat-demo-errors");
    fs::create_dir_all(&dir)?;

    // Example 1: Missing source file
    println!("--- Example 1: Missing source ---");
    let mut job = BuildJob::new(BuildOptions {
        input: dir.join("does-not-exist.json"),
        output: dir.join("api"),
        ..Default::default()
    });
    report(job.run().map(|_| ()));

    // Example 2: Malformed JSON
    println!("--- Example 2: Malformed JSON ---");
    let broken = dir.join("broken.json");
    fs::write(&broken, "{\"states\": [")?;
    let mut job = BuildJob::new(BuildOptions {
        input: broken,
        output: dir.join("api"),
        ..Default::default()
    });
    report(job.run().map(|_| ()));

    // Example 3: A taluka without villages
    println!("--- Example 3: Wrong shape ---");
    let shapeless = dir.join("shapeless.json");
    fs::write(
        &shapeless,
        r#"{"states":[{"code":"GA","name":"Goa","districts":[
            {"code":"NG","name":"North Goa","talukas":[{"code":"BAR","name":"Bardez"}]}
        ]}]}"#,
    )?;
    let mut job = BuildJob::new(BuildOptions {
        input: shapeless,
        output: dir.join("api"),
        ..Default::default()
    });
    report(job.run().map(|_| ()));
    println!("job state afterwards: {:?}\n", job.state());

    // Example 4: Two states with the same file name
    println!("--- Example 4: Slug collision ---");
    let tree: IndiaLocations = serde_json::from_str(
        r#"{"states":[
            {"code":"DN","name":"Dadra & Nagar","districts":[]},
            {"code":"DG","name":"Dadra @ Nagar","districts":[]}
        ]}"#,
    )?;
    let options = BuildOptions {
        output: dir.join("api"),
        ..Default::default()
    };
    report(build_from_tree(&tree, &options).map(|_| ()));

    // Example 5: Looking up something that is not there
    println!("--- Example 5: Unknown state ---");
    fs::create_dir_all(dir.join("empty"))?;
    let api = StaticApi::open(dir.join("empty"))?;
    report(api.state_details("Atlantis").map(|_| ()));

    Ok(())
}

fn report(result: bharat_core::Result<()>) {
    match result {
        Ok(()) => println!("  ✓ ok\n"),
        Err(e @ GeoError::Read { .. }) => println!("  ✗ read error: {e}\n"),
        Err(e @ GeoError::Parse { .. }) => println!("  ✗ parse error: {e}\n"),
        Err(e @ GeoError::Shape { .. }) => println!("  ✗ shape error: {e}\n"),
        Err(e @ GeoError::SlugCollision { .. }) => println!("  ✗ slug collision: {e}\n"),
        Err(e) => println!("  ✗ {e}\n"),
    }
}
