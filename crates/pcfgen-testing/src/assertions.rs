//! Custom assertions for pcfgen-specific validation.
//!
//! Provides high-level assertions that make tests more readable:
//! - Generated file names from the JSON report
//! - Unresolved placeholder lists
//! - Leftover `|||...|||` tokens in rendered pages

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert that the `generate --format json` report lists exactly these file names, in order.
pub fn assert_file_names(json: &Value, expected: &[&str]) -> Result<()> {
    let files = json["files"]
        .as_array()
        .context("Expected 'files' array in JSON")?;

    let names: Vec<&str> = files
        .iter()
        .filter_map(|f| f["file_name"].as_str())
        .collect();

    if names != expected {
        anyhow::bail!("Expected file names {:?}, got {:?}", expected, names);
    }

    Ok(())
}

/// Assert that the report's `unresolved` list matches.
pub fn assert_unresolved(json: &Value, expected: &[&str]) -> Result<()> {
    let unresolved: Vec<&str> = json["unresolved"]
        .as_array()
        .context("Expected 'unresolved' array in JSON")?
        .iter()
        .filter_map(Value::as_str)
        .collect();

    if unresolved != expected {
        anyhow::bail!("Expected unresolved {:?}, got {:?}", expected, unresolved);
    }

    Ok(())
}

/// Assert that a rendered page has no placeholder tokens left.
pub fn assert_no_placeholders(content: &str) -> Result<()> {
    let leftover = pcfgen_engine::placeholders(content);
    if !leftover.is_empty() {
        anyhow::bail!("Unexpected placeholders left in output: {:?}", leftover);
    }
    Ok(())
}
