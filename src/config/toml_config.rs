use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Optional settings file. All keys are optional; anything left unset falls
/// back to the CLI flag or built-in default.
///
/// ```toml
/// pairs_file = "office_couples.json"
/// output = "draw_result.csv"
/// max_attempts = 10000
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pairs_file: Option<String>,
    pub output: Option<String>,
    pub max_attempts: Option<u64>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config = toml::from_str(&text)?;
        Ok(config)
    }
}
