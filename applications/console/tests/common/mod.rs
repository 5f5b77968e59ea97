//! Common test utilities and fixtures
#![allow(dead_code)]

use codefirst::{AppConfig, DEFAULT_CONNECTION};
use std::collections::HashMap;
use tempfile::TempDir;

/// A config whose default profile points at a database file that does not exist yet
pub fn fresh_config() -> (TempDir, AppConfig) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let url = format!("sqlite://{}", temp_dir.path().join("app.db").display());
    (temp_dir, config_for(&url))
}

pub fn config_for(url: &str) -> AppConfig {
    AppConfig {
        connection_strings: HashMap::from([(DEFAULT_CONNECTION.to_string(), url.to_string())]),
    }
}

/// Run the startup sequence against `config`, returning the summary and stdout
pub async fn run_captured(config: &AppConfig) -> (codefirst::RunSummary, String) {
    let mut out = Vec::new();
    let summary = codefirst::run(config, DEFAULT_CONNECTION, &mut out)
        .await
        .expect("run failed");
    (summary, String::from_utf8(out).expect("stdout is not utf-8"))
}

/// Lines of the form `ID: <id>, Email: <email>`
pub fn user_lines(output: &str) -> Vec<&str> {
    output.lines().filter(|line| line.starts_with("ID: ")).collect()
}
