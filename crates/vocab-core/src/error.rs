//! Error types surfaced to front ends
//!
//! Two kinds only: [`ValidationError`] for input the user can correct, and
//! [`StorageError`] for failures of the underlying database. Neither is
//! retried internally.

use thiserror::Error;

use crate::models::SetId;
use crate::storage::StorageError;

/// User-correctable input problem. Never fatal, never mutates state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Set name cannot be empty")]
    EmptySetName,

    #[error("A set named '{0}' already exists. Please choose another name.")]
    DuplicateSetName(String),

    #[error("No set with id {0}")]
    UnknownSet(SetId),

    #[error("No set named '{0}'")]
    UnknownSetName(String),

    #[error("Select a set first")]
    NoSetSelected,

    #[error("Word cannot be empty")]
    EmptyWord,

    #[error("Definition cannot be empty")]
    EmptyDefinition,
}

/// Any failure from a store or controller operation
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl Error {
    /// True for input problems that should be shown inline
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// What the user can do about a storage failure, if anything
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            Error::Validation(_) => None,
            Error::Storage(e) => e.recovery_suggestion(),
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Storage(StorageError::Database(err))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
