//! Error types for the `warmup` binary.

use warmup_core::ProblemError;

use crate::config::ConfigError;

/// CLI errors.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Problem(#[from] ProblemError),

    #[error("No problem given (see --list)")]
    MissingProblem,

    #[error("Failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

impl CliError {
    /// 1 when the problem rejected its arguments, 2 for usage and setup errors.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Problem(_) => 1,
            CliError::Config(_) | CliError::MissingProblem | CliError::Encode(_) => 2,
        }
    }
}
