use anyhow::{Context, Result};
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Minimal record that passes acceptance validation.
pub fn drone(id: &str, category: &str) -> Value {
    json!({
        "id": id,
        "name": format!("Drone {id}"),
        "brand_id": "acme",
        "category": category,
        "estimated_price_usd": 499
    })
}

pub fn write_json(dir: &Path, name: &str, value: &Value) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_string_pretty(value).unwrap())
        .unwrap_or_else(|err| panic!("failed to write fixture {name}: {err}"));
    path
}

pub fn write_raw(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).unwrap_or_else(|err| panic!("failed to write fixture {name}: {err}"));
    path
}

pub fn read_json_array(path: &Path) -> Vec<Value> {
    let data = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    serde_json::from_str::<Value>(&data)
        .unwrap_or_else(|err| panic!("output {} is not valid JSON: {err}", path.display()))
        .as_array()
        .unwrap_or_else(|| panic!("output {} is not a JSON array", path.display()))
        .clone()
}

/// Command invoking the compiled `generate-data` binary with explicit paths.
pub fn generate_data_cmd(drones_dir: &Path, summary_out: &Path, categories_out: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_generate-data"));
    cmd.arg("--drones-dir")
        .arg(drones_dir)
        .arg("--summary-out")
        .arg(summary_out)
        .arg("--categories-out")
        .arg(categories_out);
    cmd
}

/// Run a command and capture its output without asserting on the exit status;
/// individual tests check success and failure cases explicitly.
pub fn run_command(mut cmd: Command) -> Result<Output> {
    cmd.output()
        .with_context(|| format!("failed to run command: {cmd:?}"))
}
