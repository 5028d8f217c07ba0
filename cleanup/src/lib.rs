//! Rust library to bulk-delete emails matching a set of conditions.
//!
//! The core concept of this library is the
//! [`ConditionSession`](crate::condition::ConditionSession): a
//! stateful set of optional deletion conditions that the operator
//! fills one by one, then verifies. Once verified, the session is
//! used to find matching messages in a store and to delete them:
//!
//! 1. Conditions are configured: sender address, sender name,
//! subject keyphrase and an inclusive date range.
//!
//! 2. The session is verified, which produces the list of accepted
//! conditions and a human-readable confirmation text.
//!
//! 3. Messages are listed from a
//! [`MessageStore`](crate::store::MessageStore), sorted from the most
//! recent to the oldest, then filtered by
//! [`find_matches`](crate::matcher::find_matches). Messages missing
//! an attribute required by a condition are skipped, not failed.
//!
//! 4. Matching messages are deleted using the native trash semantics
//! of the store.
//!
//! The library exposes a Maildir store, an in-memory store and a
//! [`Controller`](crate::controller::Controller) driving the whole
//! process through a [`View`](crate::controller::View).
//!
//! See examples in the /tests folder.

pub mod condition;
pub mod config;
pub mod controller;
pub mod date;
pub mod delete;
pub mod envelope;
mod error;
pub mod matcher;
pub mod store;

#[doc(inline)]
pub use crate::{
    condition::{ConditionSession, ConditionTag},
    envelope::{Address, Envelope, MessageItem},
    error::{AnyBoxedError, AnyError, AnyResult, Error, Result},
};
