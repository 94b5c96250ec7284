use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScreenError>;

#[derive(Error, Debug)]
pub enum ScreenError {
    #[error("reference contains no reads, cannot size a filter")]
    EmptyInput,

    #[error("filter not found: {0}")]
    FilterNotFound(PathBuf),

    #[error("corrupt filter {path}: {reason}")]
    CorruptFilter { path: PathBuf, reason: String },

    #[error("subset size must be greater than zero")]
    InvalidSamplingRequest,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("index out of bounds: {index} >= {capacity}")]
    IndexOutOfBounds { index: usize, capacity: usize },

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("sequence parsing error: {0}")]
    Fastx(#[from] needletail::errors::ParseError),
}
