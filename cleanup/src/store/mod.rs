//! # Store
//!
//! Module dedicated to message store connectors. A store lists the
//! messages the conditions are evaluated against, and deletes the
//! matching ones.

pub mod maildir;
pub mod memory;

use crate::{AnyResult, MessageItem};

#[doc(inline)]
pub use self::{maildir::MaildirStore, memory::MemoryStore};

/// The message store connector.
pub trait MessageStore {
    /// The message type exposed by the store.
    type Item: MessageItem;

    /// Lists all the messages of the store.
    fn list_messages(&self) -> AnyResult<Vec<Self::Item>>;

    /// Deletes the given message.
    ///
    /// This function should not definitely delete messages. Instead,
    /// it should use the native trash semantics of the store, so
    /// that deleted messages can be recovered.
    fn delete_message(&mut self, item: &Self::Item) -> AnyResult<()>;
}
