//! Errors that can occur while decoding stream data.

use core::fmt;

/// A specialized [`Result`] type for stream decoding.
pub type Result<T> = core::result::Result<T, DecodeError>;

/// An error encountered while applying the filters of a stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The stream uses a filter that isn't supported.
    UnsupportedFilter(String),
    /// The stream declares a predictor that isn't supported.
    UnsupportedPredictor(i32),
    /// The `Filter` entry is neither a name nor an array of names.
    InvalidFilter,
    /// The data of the stream is corrupt for the given filter.
    Corrupt(&'static str),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedFilter(name) => write!(f, "unsupported filter {name}"),
            Self::UnsupportedPredictor(p) => write!(f, "unsupported predictor {p}"),
            Self::InvalidFilter => f.write_str("invalid filter entry"),
            Self::Corrupt(filter) => write!(f, "corrupt {filter} data"),
        }
    }
}

impl core::error::Error for DecodeError {}
