use std::fmt::{self, Display};

/// Errors produced by model constructors and parsers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    UnknownMediaKind(String),
    UnknownDimension(String),
    UnknownTheme(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::UnknownMediaKind(raw) => {
                write!(f, "unknown media kind: {raw}")
            }
            ModelError::UnknownDimension(raw) => {
                write!(f, "unknown distribution dimension: {raw}")
            }
            ModelError::UnknownTheme(raw) => write!(f, "unknown theme: {raw}"),
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
