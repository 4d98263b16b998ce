//src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a psmc conversion.
///
/// All variants are fatal: the pipeline never retries and never hands back
/// a partial history.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PsmcError {
    /// The report contains no `RD` line at all.
    #[error("no result section in input")]
    NotFound,
    /// The last section has no `TR` line.
    #[error("scale record absent")]
    MissingScale,
    /// A scaling constant is unusable (e.g. a mutation rate of zero).
    #[error("invalid configuration: {0}")]
    Configuration(String),
    /// A `TR` or `RS` line that cannot be decoded.
    #[error("malformed record on line {line}: {reason}")]
    RecordFormat { line: usize, reason: String },
    /// The input could not be opened.
    #[error("can't read file {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PsmcError {
    pub(crate) fn record_format(line: usize, reason: impl Into<String>) -> Self {
        PsmcError::RecordFormat {
            line,
            reason: reason.into(),
        }
    }
}
