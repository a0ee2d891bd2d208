use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;

/// Everything that can stop an extraction run
#[derive(Debug, Error)]
pub enum EtextError {
    #[error("Usage: {program} <text file>")]
    Usage { program: String },

    #[error("could not read {path:?}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("marker not found: {marker:?}")]
    MarkerNotFound { marker: String },

    #[error("invalid config {path:?}: {reason}")]
    Config { path: PathBuf, reason: String },

    #[error("failed to write output: {0}")]
    Output(io::Error),
}

impl EtextError {
    /// Process exit status for this error. Usage errors follow the
    /// conventional status 2, everything else is 1.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            EtextError::Usage { .. } => ExitCode::from(2),
            _ => ExitCode::FAILURE,
        }
    }
}
