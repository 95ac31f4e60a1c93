use crate::domain::model::Participant;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SantaError {
    /// Every remaining recipient was tried for this giver and none qualified.
    /// Expected and retryable: the next attempt starts from fresh pools.
    #[error("Couldn't find anyone for {giver}")]
    NoRecipientAvailable { giver: Participant },

    #[error("No valid assignment found after {attempts} attempts")]
    AttemptsExhausted { attempts: u64 },

    #[error("Invalid couple list: {message}")]
    InvalidCouples { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration file error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Configuration error: {field}: {reason} (got '{value}')")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl SantaError {
    /// Whether the retry driver may recover by starting a fresh attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, SantaError::NoRecipientAvailable { .. })
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SantaError::NoRecipientAvailable { .. } => {
                "This attempt dead-ended; a fresh attempt will be made automatically"
            }
            SantaError::AttemptsExhausted { .. } => {
                "Check that the couple list has at least two couples, or raise --max-attempts"
            }
            SantaError::InvalidCouples { .. } => {
                "Each couple needs two distinct people, and nobody may appear in two couples"
            }
            SantaError::IoError(_) => "Check that the pairs file exists and is readable",
            SantaError::SerializationError(_) => {
                "The pairs file must be a JSON list of two-element string arrays"
            }
            SantaError::CsvError(_) => "Check that the output path is writable",
            SantaError::ConfigParseError(_) => "Check the TOML settings file syntax",
            SantaError::InvalidConfigValueError { .. } => "Fix the flagged configuration value",
        }
    }
}

pub type Result<T> = std::result::Result<T, SantaError>;
