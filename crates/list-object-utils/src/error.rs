use thiserror::Error;

/// Errors raised by the index-taking list helpers.
///
/// Integer-ness is checked before bounds, so a non-integral index always
/// reports `InvalidArgument` even when another index is out of range.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListError {
    #[error("{name} must be an integer")]
    InvalidArgument { name: &'static str },
    #[error("{name} out of bounds: {index} is not in 0..{len}")]
    OutOfRange {
        name: &'static str,
        index: i128,
        len: usize,
    },
}

impl ListError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ListError::InvalidArgument { .. })
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self, ListError::OutOfRange { .. })
    }

    /// Name of the offending index parameter (`"i"` or `"j"`).
    pub fn name(&self) -> &'static str {
        match self {
            ListError::InvalidArgument { name } | ListError::OutOfRange { name, .. } => name,
        }
    }
}
