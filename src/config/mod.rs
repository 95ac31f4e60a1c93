pub mod toml_config;

pub use toml_config::TomlConfig;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extension, validate_path, validate_positive_number, Validate,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "secret-santa")]
#[command(about = "Draws secret gift-givers for a list of couples")]
pub struct CliConfig {
    /// JSON file holding the couple list (a list of two-element arrays)
    #[arg(long)]
    pub pairs_file: Option<String>,

    /// Optional TOML settings file; command-line flags take precedence
    #[arg(long)]
    pub config: Option<String>,

    /// Write the result to this file (.json or .csv by extension)
    #[arg(long)]
    pub output: Option<String>,

    /// Give up after this many attempts instead of retrying forever
    #[arg(long)]
    pub max_attempts: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Effective settings after layering CLI flags over the optional TOML file.
#[derive(Debug, Clone)]
pub struct Settings {
    pub pairs_file: String,
    pub output: Option<String>,
    pub max_attempts: Option<u64>,
    pub verbose: bool,
}

const DEFAULT_PAIRS_FILE: &str = "pair_list.json";

impl Settings {
    pub fn resolve(cli: CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        Ok(Settings {
            pairs_file: cli
                .pairs_file
                .or(file.pairs_file)
                .unwrap_or_else(|| DEFAULT_PAIRS_FILE.to_string()),
            output: cli.output.or(file.output),
            max_attempts: cli.max_attempts.or(file.max_attempts),
            verbose: cli.verbose,
        })
    }
}

impl ConfigProvider for Settings {
    fn pairs_file(&self) -> &str {
        &self.pairs_file
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }

    fn max_attempts(&self) -> Option<u64> {
        self.max_attempts
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("pairs_file", &self.pairs_file)?;
        validate_file_extension("pairs_file", &self.pairs_file, &["json"])?;

        if let Some(output) = &self.output {
            validate_path("output", output)?;
            validate_file_extension("output", output, &["json", "csv"])?;
        }

        if let Some(max_attempts) = self.max_attempts {
            validate_positive_number("max_attempts", max_attempts, 1)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli() -> CliConfig {
        CliConfig {
            pairs_file: None,
            config: None,
            output: None,
            max_attempts: None,
            verbose: false,
        }
    }

    #[test]
    fn test_defaults_match_the_original_tool() {
        let settings = Settings::resolve(bare_cli()).unwrap();
        assert_eq!(settings.pairs_file, "pair_list.json");
        assert!(settings.output.is_none());
        assert!(settings.max_attempts.is_none());
    }

    #[test]
    fn test_cli_flags_override_defaults() {
        let cli = CliConfig {
            pairs_file: Some("office.json".to_string()),
            max_attempts: Some(500),
            ..bare_cli()
        };
        let settings = Settings::resolve(cli).unwrap();
        assert_eq!(settings.pairs_file, "office.json");
        assert_eq!(settings.max_attempts, Some(500));
    }

    #[test]
    fn test_validate_rejects_bad_extensions() {
        let mut settings = Settings::resolve(bare_cli()).unwrap();
        settings.pairs_file = "couples.yaml".to_string();
        assert!(settings.validate().is_err());

        let mut settings = Settings::resolve(bare_cli()).unwrap();
        settings.output = Some("result.txt".to_string());
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_attempt_cap() {
        let mut settings = Settings::resolve(bare_cli()).unwrap();
        settings.max_attempts = Some(0);
        assert!(settings.validate().is_err());
    }
}
