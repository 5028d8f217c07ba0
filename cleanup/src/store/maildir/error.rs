use std::{any::Any, path::PathBuf, result};

use thiserror::Error;

use crate::{AnyBoxedError, AnyError};

/// The global `Result` alias of the module.
pub type Result<T> = result::Result<T, Error>;

/// The global `Error` enum of the module.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot find maildir inbox at {0}")]
    FindInboxError(PathBuf),
    #[error("cannot create maildir trash folder at {1}")]
    CreateTrashFolderError(#[source] maildirpp::Error, PathBuf),
    #[error("cannot list maildir entries from {1}")]
    ListEntriesError(#[source] maildirpp::Error, PathBuf),
    #[error("cannot move maildir message {1} to trash folder {2}")]
    MoveToTrashError(#[source] maildirpp::Error, String, PathBuf),
    #[error("cannot flag maildir message {1} as trashed")]
    AddTrashedFlagError(#[source] maildirpp::Error, String),
}

impl AnyError for Error {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl From<Error> for AnyBoxedError {
    fn from(err: Error) -> Self {
        Box::new(err)
    }
}
