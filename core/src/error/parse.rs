use std::backtrace::Backtrace;

use thiserror::Error;

/// Errors raised by the parse pipeline.
///
/// `UnknownFormat` is a caller error and is reported before any file or
/// subprocess work happens. `Engine` wraps a failed engine run together with
/// a captured trace string. `BlockCountMismatch` and `UnknownGovernor` are
/// consistency errors: they indicate the engine or the framer broke their
/// contract, not that the caller passed bad input.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("unknown output format `{given}`, expected one of: {allowed:?}")]
    UnknownFormat {
        given: String,
        allowed: &'static [&'static str],
    },

    #[error("engine run failed: {message}")]
    Engine { message: String, trace: String },

    #[error("engine output has {actual} blocks for {expected} input texts")]
    BlockCountMismatch { expected: usize, actual: usize },

    #[error("malformed engine output line `{line}`: {reason}")]
    MalformedLine { line: String, reason: String },

    #[error("cannot resolve governor index {index} in a block of {tokens} tokens")]
    UnknownGovernor { index: i64, tokens: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// Engine failure with the call-site trace attached.
    pub fn engine(message: impl Into<String>) -> Self {
        Self::Engine {
            message: message.into(),
            trace: Backtrace::force_capture().to_string(),
        }
    }

    pub fn malformed_line(line: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedLine {
            line: line.into(),
            reason: reason.into(),
        }
    }
}
