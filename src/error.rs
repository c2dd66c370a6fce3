//! Crate-level error types.

use std::fmt;

/// Errors produced by the vizloop crate.
#[derive(Debug)]
pub enum VizError {
    /// Failed to fetch or parse a structure asset.
    Load(String),
    /// Flat attribute arrays handed over by a loader are inconsistent.
    InvalidData(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for VizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(msg) => write!(f, "structure load error: {msg}"),
            Self::InvalidData(msg) => {
                write!(f, "invalid attribute data: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for VizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VizError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
