use std::{any::Any, error, io, result};

use thiserror::Error;

/// The global `Result` alias of the library.
pub type Result<T> = result::Result<T, Error>;

/// The global `Error` enum of the library.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    DateError(#[from] crate::date::Error),
    #[error(transparent)]
    ConditionError(#[from] crate::condition::Error),
    #[error(transparent)]
    MatcherError(#[from] crate::matcher::Error),
    #[error(transparent)]
    DeleteError(#[from] crate::delete::Error),
    #[error(transparent)]
    MaildirError(#[from] crate::store::maildir::Error),
    #[error(transparent)]
    ControllerError(#[from] crate::controller::Error),
    #[error(transparent)]
    IoError(#[from] io::Error),
}

/// The global any `Result` alias of the library.
///
/// The difference with [`Result`] is that it takes a dynamic error
/// `Box<dyn AnyError>`.
pub type AnyResult<T> = result::Result<T, AnyBoxedError>;

/// The global, dowcastable any `Error` trait of the library.
///
/// This trait is used instead of [`Error`] when an error that is not
/// known at compilation time cannot be placed in a generic due to
/// object-safe trait constraint. The main use case is for store
/// connectors.
pub trait AnyError: error::Error + Any + Send + Sync {
    fn as_any(&self) -> &dyn Any;
}

/// The global any boxed `Error` alias of the library.
pub type AnyBoxedError = Box<dyn AnyError + Send + 'static>;

impl error::Error for AnyBoxedError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        self.as_ref().source()
    }
}
