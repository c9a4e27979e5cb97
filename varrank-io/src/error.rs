use std::io;
use thiserror::Error;

use varrank_core::VariantError;

/// Error type for varrank-io readers.
#[derive(Error, Debug)]
pub enum ParseError {
    /// IO error occurred while reading.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input could not be opened or decoded.
    #[error(transparent)]
    Reader(#[from] anyhow::Error),

    /// A line could not be parsed.
    #[error("Malformed line {line} in {path}: {msg}")]
    Malformed {
        path: String,
        line: usize,
        msg: String,
    },

    /// A parsed record violates a variant model invariant.
    #[error(transparent)]
    Variant(#[from] VariantError),

    /// The requested chromosome is not present in the input.
    #[error("Chromosome {0} not found in {1}")]
    ChromosomeNotFound(String, String),

    /// The input holds no records at all.
    #[error("No records found in {0}")]
    NoRecords(String),
}

/// Result type alias for varrank-io operations.
pub type Result<T> = std::result::Result<T, ParseError>;
