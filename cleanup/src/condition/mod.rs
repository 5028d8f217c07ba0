//! # Condition
//!
//! Module dedicated to deletion conditions. The core concept of this
//! module is the [`ConditionSession`], which accumulates optional
//! conditions, identified by a [`ConditionTag`], and verifies them
//! before any message is matched.

mod error;
mod session;

use std::fmt;

#[doc(inline)]
pub use self::{
    error::{Error, Result},
    session::ConditionSession,
};

/// The condition separator used by the confirmation text.
pub const CONFIRMATION_SEPARATOR: &str = " AND ";

/// An independently togglable deletion condition.
///
/// Variants are declared in the order conditions appear in the
/// confirmation text and are evaluated by the matcher.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum ConditionTag {
    /// Case-insensitive equality of the sender email address.
    SenderAddress,
    /// Inclusive range of the message sent date.
    DateRange,
    /// Case-insensitive substring of the message subject.
    Subject,
    /// Case-insensitive equality of the sender display name.
    SenderName,
}

impl ConditionTag {
    /// All tags, in acceptance order.
    pub const ALL: [ConditionTag; 4] = [
        Self::SenderAddress,
        Self::DateRange,
        Self::Subject,
        Self::SenderName,
    ];

    /// The label prefixing the condition value in its display
    /// fragment.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SenderAddress => "sender email",
            Self::DateRange => "date range",
            Self::Subject => "has the keyword/keyphrase in the subject",
            Self::SenderName => "sender name",
        }
    }

    /// The name of the message attribute the condition is evaluated
    /// against.
    pub fn attribute(&self) -> &'static str {
        match self {
            Self::SenderAddress => "sender address",
            Self::DateRange => "sent date",
            Self::Subject => "subject",
            Self::SenderName => "sender name",
        }
    }

    pub(crate) fn fragment(&self, value: impl fmt::Display) -> String {
        format!("{}: {value}", self.label())
    }
}

impl fmt::Display for ConditionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The human-readable fragments of the configured conditions.
///
/// There is one slot per [`ConditionTag`], so adding a tag forces
/// every match below to handle it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DisplayFragments {
    sender_address: Option<String>,
    date_range: Option<String>,
    subject: Option<String>,
    sender_name: Option<String>,
}

impl DisplayFragments {
    pub fn get(&self, tag: ConditionTag) -> Option<&str> {
        self.slot(tag).as_deref()
    }

    pub fn set(&mut self, tag: ConditionTag, fragment: impl ToString) {
        *self.slot_mut(tag) = Some(fragment.to_string());
    }

    pub fn remove(&mut self, tag: ConditionTag) -> Option<String> {
        self.slot_mut(tag).take()
    }

    pub fn is_empty(&self) -> bool {
        ConditionTag::ALL.iter().all(|tag| self.get(*tag).is_none())
    }

    fn slot(&self, tag: ConditionTag) -> &Option<String> {
        match tag {
            ConditionTag::SenderAddress => &self.sender_address,
            ConditionTag::DateRange => &self.date_range,
            ConditionTag::Subject => &self.subject,
            ConditionTag::SenderName => &self.sender_name,
        }
    }

    fn slot_mut(&mut self, tag: ConditionTag) -> &mut Option<String> {
        match tag {
            ConditionTag::SenderAddress => &mut self.sender_address,
            ConditionTag::DateRange => &mut self.date_range,
            ConditionTag::Subject => &mut self.subject,
            ConditionTag::SenderName => &mut self.sender_name,
        }
    }
}
