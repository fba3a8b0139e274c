//! Resolution of the output paths the driver writes icons to.
//!
//! Paths come from the command line, an optional JSON targets file, or, when
//! neither yields anything, the default pair kept in sync for the main
//! application and its installer.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Icon location for the main application folder
pub const DEFAULT_APP_TARGET: &str = "PDFAutomation/icon.ico";
/// Icon location for the installer project folder
pub const DEFAULT_INSTALLER_TARGET: &str = "PDFAutomation.Installer/icon.ico";

/// Contents of a targets file, e.g. `{ "outputs": ["app/icon.ico"] }`
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetsFile {
    pub outputs: Vec<PathBuf>,
}

pub fn default_targets() -> Vec<PathBuf> {
    vec![
        PathBuf::from(DEFAULT_APP_TARGET),
        PathBuf::from(DEFAULT_INSTALLER_TARGET),
    ]
}

/// Read a targets file. Relative entries are resolved against the directory
/// holding the file.
pub fn load_targets(path: &Path) -> Result<Vec<PathBuf>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read targets file {}", path.display()))?;
    let file: TargetsFile = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse targets file {}", path.display()))?;

    if file.outputs.is_empty() {
        anyhow::bail!("Targets file {} lists no outputs", path.display());
    }

    let base = path.parent().unwrap_or_else(|| Path::new(""));
    Ok(file
        .outputs
        .into_iter()
        .map(|output| {
            if output.is_absolute() {
                output
            } else {
                base.join(output)
            }
        })
        .collect())
}

/// Combine command-line outputs with those from an optional targets file,
/// falling back to `default_targets` when both are empty
pub fn resolve_targets(outputs: Vec<PathBuf>, config: Option<&Path>) -> Result<Vec<PathBuf>> {
    let mut targets = outputs;

    if let Some(config) = config {
        targets.extend(load_targets(config)?);
    }

    if targets.is_empty() {
        log::warn!("No output paths given, using default targets");
        targets = default_targets();
    }

    log::info!("Resolved {} icon target(s): {:?}", targets.len(), targets);
    Ok(targets)
}
