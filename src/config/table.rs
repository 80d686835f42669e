use crate::TableParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where to write the JSON report; printed to stdout when absent.
    pub json_out: Option<PathBuf>,
    /// Directory for mask, edge and overlay PNGs.
    pub debug_dir: Option<PathBuf>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TableToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub params: TableParams,
    #[serde(default)]
    pub output: OutputConfig,
}

impl TableToolConfig {
    pub fn from_json_str(data: &str) -> Result<Self, String> {
        let config: TableToolConfig =
            serde_json::from_str(data).map_err(|e| format!("Failed to parse config: {e}"))?;
        config.params.validate()?;
        Ok(config)
    }
}

pub fn load_config(path: &Path) -> Result<TableToolConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    TableToolConfig::from_json_str(&contents)
        .map_err(|e| format!("{e} ({})", path.display()))
}
