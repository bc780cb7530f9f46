use thiserror::Error;

/// Coarse classification of a [`VectorError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    LengthMismatch,
    IndexOutOfRange,
}

/// Errors raised by vector guards.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VectorError {
    #[error("a vector consists of at least one component")]
    EmptyComponents,

    #[error("components must be uniformly of type float or int")]
    MixedComponentTypes,

    #[error("index must be greater than 0, got {0}")]
    NonPositiveIndex(i64),

    #[error("index {index} is out of range for a vector with {len} components")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("value must be an int or a float")]
    NotANumber,

    #[error("object must be of type vector")]
    NotAVector,

    #[error("the list of vectors can not be empty")]
    EmptyVectorList,

    #[error("vectors must be of the same length (expected {expected}, found {found})")]
    LengthMismatch { expected: usize, found: usize },
}

impl VectorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            VectorError::LengthMismatch { .. } => ErrorKind::LengthMismatch,
            VectorError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

pub type Result<T> = std::result::Result<T, VectorError>;
