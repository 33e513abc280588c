//! Error types for the run pipeline.

use crate::io::ExitCode;
use crate::sequence::MAX_LENGTH;
use thiserror::Error;

/// Errors from building, summing, or printing a sequence.
#[derive(Error, Debug)]
pub enum Error {
    #[error(
        "Invalid sequence length: {requested} (expected 1..={max})\nSuggestion: Request between 1 and {max} elements",
        max = MAX_LENGTH
    )]
    InvalidLength { requested: usize },

    #[error("{operation} called on an empty sequence\nSuggestion: Build the sequence before using it")]
    EmptyInput { operation: &'static str },

    #[error("Unable to allocate storage for {requested} sequence elements")]
    AllocationFailure { requested: usize },

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Map the error to the process exit code for its failure class.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Error::InvalidLength { .. } => ExitCode::InvalidArgument,
            Error::EmptyInput { .. } => ExitCode::MissingData,
            Error::AllocationFailure { .. } => ExitCode::AllocationError,
            Error::Io(_) => ExitCode::GeneralError,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
