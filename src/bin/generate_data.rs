//! CLI entry point for the drone catalog data generator.
//!
//! Reads every drone record under the drones directory and rewrites the two
//! derived artifacts. Flags default to the repository data layout so a bare
//! `generate-data` run from the project root regenerates `data/` in place.

use anyhow::{Result, bail};
use dronegen::generate;
use std::env;
use std::path::PathBuf;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = CliArgs::parse()?;

    println!("starting drone data generation");
    let report = generate(&args.drones_dir, &args.summary_out, &args.categories_out)?;
    println!(
        "data generation complete: {} drones, {} categories ({} skipped)",
        report.accepted, report.categories, report.skipped
    );
    Ok(())
}

struct CliArgs {
    drones_dir: PathBuf,
    summary_out: PathBuf,
    categories_out: PathBuf,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut drones_dir: Option<PathBuf> = None;
        let mut summary_out: Option<PathBuf> = None;
        let mut categories_out: Option<PathBuf> = None;

        let mut args = env::args_os().skip(1);
        while let Some(arg_os) = args.next() {
            let arg = arg_os
                .into_string()
                .map_err(|_| anyhow::anyhow!("argument is not valid UTF-8"))?;
            match arg.as_str() {
                "--drones-dir" => {
                    drones_dir = Some(PathBuf::from(next_value(&mut args, "--drones-dir")?));
                }
                "--summary-out" => {
                    summary_out = Some(PathBuf::from(next_value(&mut args, "--summary-out")?));
                }
                "--categories-out" => {
                    categories_out =
                        Some(PathBuf::from(next_value(&mut args, "--categories-out")?));
                }
                "--help" | "-h" => {
                    print!("{}", usage());
                    std::process::exit(0);
                }
                other => bail!("unknown flag: {other}"),
            }
        }

        Ok(CliArgs {
            drones_dir: drones_dir.unwrap_or_else(|| PathBuf::from("data/drones")),
            summary_out: summary_out
                .unwrap_or_else(|| PathBuf::from("data/all_drones_summary.json")),
            categories_out: categories_out
                .unwrap_or_else(|| PathBuf::from("data/categories.json")),
        })
    }
}

fn next_value(args: &mut impl Iterator<Item = std::ffi::OsString>, flag: &str) -> Result<String> {
    args.next()
        .map(|os| {
            os.into_string()
                .map_err(|_| anyhow::anyhow!("value for {flag} is not valid UTF-8"))
        })
        .transpose()?
        .ok_or_else(|| anyhow::anyhow!("missing value for {flag}"))
}

fn usage() -> &'static str {
    "Usage: generate-data [--drones-dir DIR] [--summary-out PATH] [--categories-out PATH]\n\
Aggregates per-drone JSON records into the summary and category artifacts.\n\
Defaults: --drones-dir data/drones --summary-out data/all_drones_summary.json --categories-out data/categories.json\n"
}
