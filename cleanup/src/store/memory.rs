//! Module dedicated to the in-memory store.

use std::any::Any;

use thiserror::Error;
use tracing::info;

use crate::{AnyBoxedError, AnyError, AnyResult, Envelope};

use super::MessageStore;

/// The global `Error` enum of the module.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot find message {0} in memory store")]
    FindMessageError(String),
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

/// The in-memory store.
///
/// Deleted envelopes are moved from the inbox to the trash.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MemoryStore {
    pub inbox: Vec<Envelope>,
    pub trash: Vec<Envelope>,
}

impl MemoryStore {
    pub fn new(inbox: impl IntoIterator<Item = Envelope>) -> Self {
        Self {
            inbox: inbox.into_iter().collect(),
            trash: Vec::new(),
        }
    }
}

impl MessageStore for MemoryStore {
    type Item = Envelope;

    fn list_messages(&self) -> AnyResult<Vec<Envelope>> {
        info!("listing {} envelopes from memory store", self.inbox.len());
        Ok(self.inbox.clone())
    }

    fn delete_message(&mut self, envelope: &Envelope) -> AnyResult<()> {
        info!("moving envelope {} to memory store trash", envelope.id);

        let pos = self
            .inbox
            .iter()
            .position(|e| e.id == envelope.id)
            .ok_or_else(|| Error::FindMessageError(envelope.id.clone()))?;

        let envelope = self.inbox.remove(pos);
        self.trash.push(envelope);

        Ok(())
    }
}
