//! Conversion error types

use std::error::Error;
use std::fmt;

/// Per-word conversion failure. Both conditions indicate malformed source
/// data: the computation is deterministic, so a failing input always fails
/// and should be corrected upstream rather than retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// ARPAbet code outside the known inventory
    UnknownPhoneme(String),
    /// No legal onset assignment exists for the sequence
    Unsyllabifiable(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::UnknownPhoneme(code) => {
                write!(f, "unknown ARPAbet phoneme: \"{}\"", code)
            }
            ConvertError::Unsyllabifiable(cluster) => {
                write!(f, "no legal onset assignment for cluster: \"{}\"", cluster)
            }
        }
    }
}

impl Error for ConvertError {}
