//! The aggregation pass: drones directory in, two JSON artifacts out.
//!
//! One synchronous sweep over the drones directory. Files that fail to read,
//! parse, or validate are skipped with a warning on stderr; only a missing
//! input directory or an I/O failure on the outputs aborts the run. Outputs
//! are rewritten wholesale on every invocation, so partial files from an
//! aborted run are simply overwritten by the next successful one.

use anyhow::{Context, Result, bail};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::record::{CategoryDescriptor, DroneRecord, DroneSummary};

/// Counts from one completed aggregation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub accepted: usize,
    pub skipped: usize,
    pub categories: usize,
}

/// Run the whole pass: enumerate, validate, derive, write.
///
/// Fails fast when `drones_dir` is absent; an empty directory is a warning,
/// not an error, and still produces two files each holding an empty array.
pub fn generate(drones_dir: &Path, summary_out: &Path, categories_out: &Path) -> Result<Report> {
    if !drones_dir.exists() {
        bail!("drone data directory not found at {}", drones_dir.display());
    }

    let files = list_record_files(drones_dir)?;
    if files.is_empty() {
        eprintln!(
            "warning: no drone JSON files found under {}; output files will be empty",
            drones_dir.display()
        );
    }

    let mut accepted: Vec<DroneRecord> = Vec::new();
    let mut skipped = 0usize;
    for path in &files {
        match load_record(path) {
            Ok(record) => accepted.push(record),
            Err(err) => {
                skipped += 1;
                eprintln!("warning: skipping {}: {err:#}", path.display());
            }
        }
    }

    let summaries: Vec<DroneSummary> = accepted.iter().map(DroneRecord::summary).collect();
    let categories = derive_categories(&accepted);

    write_pretty_json(summary_out, &summaries)?;
    println!("generated {}", summary_out.display());
    write_pretty_json(categories_out, &categories)?;
    println!("generated {}", categories_out.display());

    Ok(Report {
        accepted: accepted.len(),
        skipped,
        categories: categories.len(),
    })
}

/// Directory entries whose name ends with the exact `.json` suffix, in
/// enumeration order. No sorting: discovery order is the published order.
fn list_record_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("listing directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("listing directory {}", dir.display()))?;
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.ends_with(".json") {
            files.push(path);
        }
    }
    Ok(files)
}

fn load_record(path: &Path) -> Result<DroneRecord> {
    let data = fs::read_to_string(path).context("reading file")?;
    let value: Value = serde_json::from_str(&data).context("parsing JSON")?;
    DroneRecord::from_value(value)
}

/// One descriptor per distinct category key, in first-seen order across the
/// accepted records.
fn derive_categories(accepted: &[DroneRecord]) -> Vec<CategoryDescriptor> {
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    let mut categories = Vec::new();
    for record in accepted {
        if seen.insert(record.category()) {
            categories.push(CategoryDescriptor::for_key(record.category()));
        }
    }
    categories
}

fn write_pretty_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let body = serde_json::to_string_pretty(value)
        .with_context(|| format!("serializing {}", path.display()))?;
    fs::write(path, body).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::DroneRecord;
    use serde_json::json;

    fn record(id: &str, category: &str) -> DroneRecord {
        DroneRecord::from_value(json!({
            "id": id,
            "name": id,
            "brand_id": "acme",
            "category": category,
            "estimated_price_usd": 100
        }))
        .unwrap()
    }

    #[test]
    fn categories_dedupe_in_first_seen_order() {
        let accepted = vec![
            record("a", "racing"),
            record("b", "camera"),
            record("c", "racing"),
            record("d", "fixed-wing"),
        ];
        let categories = derive_categories(&accepted);
        let ids: Vec<&str> = categories.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["racing", "camera", "fixed-wing"]);
    }

    #[test]
    fn no_records_means_no_categories() {
        assert!(derive_categories(&[]).is_empty());
    }
}
