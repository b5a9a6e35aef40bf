//! Error type of the archive readers.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while opening or reading taxonomy archives.
///
/// Tree construction and redaction never fail; malformed records are
/// skipped and broken links absorbed below the root.
#[derive(Debug, Error)]
pub enum TaxonomicaError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("could not decode table: {0}")]
    Csv(#[from] csv::Error),

    #[error("required archive file not found: {}", .0.display())]
    MissingFile(PathBuf),
}

/// Result type of the archive readers.
pub type Result<T> = std::result::Result<T, TaxonomicaError>;
