//! # Delete
//!
//! Module dedicated to the deletion of matching messages.

use std::result;

use thiserror::Error;
use tracing::{debug, info};

use crate::{
    matcher::{self, find_matches},
    store::MessageStore,
    AnyBoxedError, ConditionSession, MessageItem,
};

/// The global `Result` alias of the module.
pub type Result<T> = result::Result<T, Error>;

/// The global `Error` enum of the module.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot list messages from store")]
    ListMessagesError(#[source] AnyBoxedError),
    #[error("cannot delete message {1} ({2} message(s) deleted before failure)")]
    DeleteMessageError(#[source] AnyBoxedError, String, usize),
    #[error(transparent)]
    MatcherError(#[from] matcher::Error),
}

impl Error {
    /// Returns the number of messages deleted before the failure.
    pub fn deleted_count(&self) -> usize {
        match self {
            Self::DeleteMessageError(_, _, count) => *count,
            _ => 0,
        }
    }
}

/// The outcome of a deletion run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DeletionOutcome {
    /// The number of deleted messages.
    pub deleted: usize,
    /// The number of messages skipped because they miss an attribute
    /// needed by a condition.
    pub skipped: usize,
}

/// Deletes the given messages one by one.
///
/// The first store failure stops the run: messages deleted before
/// the failure stay deleted, and their count is reported by the
/// error.
pub fn delete_all<S: MessageStore>(store: &mut S, matched: &[S::Item]) -> Result<usize> {
    let mut deleted = 0;

    for item in matched {
        store
            .delete_message(item)
            .map_err(|err| Error::DeleteMessageError(err, item.id().to_owned(), deleted))?;
        deleted += 1;
    }

    info!("deleted {deleted} message(s)");
    Ok(deleted)
}

/// Lists the messages of the given store, then deletes the ones
/// matching the given verified session.
pub fn delete_matching<S: MessageStore>(
    store: &mut S,
    session: &ConditionSession,
) -> Result<DeletionOutcome> {
    if !session.is_verified() {
        return Err(matcher::Error::NotVerifiedError.into());
    }

    let items = store.list_messages().map_err(Error::ListMessagesError)?;
    let count = items.len();
    debug!("looking for matching messages among {count} message(s)");

    let matches = find_matches(items, session)?;
    let deleted = delete_all(store, &matches.matched)?;

    Ok(DeletionOutcome {
        deleted,
        skipped: matches.skipped,
    })
}
