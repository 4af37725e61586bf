//! Error types.
//!
//! Input-data problems are recoverable by design: they are counted and
//! logged by the check flows, never propagated as process failures. The
//! typed errors here carry enough context for the log lines the operator
//! sees.

use std::path::PathBuf;

use hickory_proto::serialize::txt::ParseError;
use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("logger initialization error: {0}")]
    Logger(#[from] SetLoggerError),

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    Resolver(String),
}

/// A syntax violation on one line of an absence list.
///
/// Each variant carries the 1-based line number and the offending line so
/// diagnostics point at the exact input. A bad line never produces a query
/// key; parsing continues with the next line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    /// The line did not split into exactly two whitespace-separated fields.
    #[error("line {line}: not exactly 2 fields in {text:?}")]
    FieldCount {
        /// 1-based line number.
        line: usize,
        /// The offending line, trimmed.
        text: String,
    },

    /// The name field is not a syntactically valid domain name.
    #[error("line {line}: not a valid qname in {text:?}")]
    InvalidName {
        /// 1-based line number.
        line: usize,
        /// The offending line, trimmed.
        text: String,
    },

    /// The name field is relative instead of fully qualified.
    #[error("line {line}: no absolute qname in {text:?}")]
    NotAbsolute {
        /// 1-based line number.
        line: usize,
        /// The offending line, trimmed.
        text: String,
    },

    /// The type field is not a recognized record-type token.
    #[error("line {line}: unknown qtype in {text:?}")]
    UnknownType {
        /// 1-based line number.
        line: usize,
        /// The offending line, trimmed.
        text: String,
    },
}

impl LineError {
    /// The 1-based line number the violation was found on.
    pub fn line(&self) -> usize {
        match self {
            LineError::FieldCount { line, .. }
            | LineError::InvalidName { line, .. }
            | LineError::NotAbsolute { line, .. }
            | LineError::UnknownType { line, .. } => *line,
        }
    }
}

/// Failure to load the expected-data zone source.
///
/// A zone file is parsed all-or-nothing: a malformed source cannot be
/// partially trusted, so either variant aborts the positive-check flow
/// with a single counted error.
#[derive(Error, Debug)]
pub enum ZoneDataError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Path of the expected-data file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file content is not valid zone data.
    #[error("invalid zone data in {}: {source}", path.display())]
    Syntax {
        /// Path of the expected-data file.
        path: PathBuf,
        /// Underlying parse error.
        source: ParseError,
    },
}
