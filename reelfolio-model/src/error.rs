use thiserror::Error;

/// Errors produced by catalog validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("catalog list `{0}` must not be empty")]
    EmptyList(&'static str),
}

pub type Result<T> = std::result::Result<T, ModelError>;
