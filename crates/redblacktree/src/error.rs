use thiserror::Error;

use crate::key::KeyKind;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("key is nil")]
    KeyIsNil,
    #[error("key of kind {0} is not allowed")]
    KeyDisallowed(KeyKind),
}

pub type Result<T> = std::result::Result<T, TreeError>;
