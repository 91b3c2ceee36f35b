//! Navigation Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Icon already registered: {0}")]
    DuplicateIcon(&'static str),
}
