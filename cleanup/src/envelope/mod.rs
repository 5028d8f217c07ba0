//! # Envelope
//!
//! Module dedicated to the messages the conditions are evaluated
//! against. Store connectors expose their messages through the
//! [`MessageItem`] trait. The [`Envelope`] structure is the default
//! implementation, built from message headers.

mod address;

use chrono::{DateTime, FixedOffset};
use mail_parser::MessageParser;
use tracing::{trace, warn};

use crate::date;

#[doc(inline)]
pub use self::address::Address;

/// A message as seen by the matcher.
///
/// Each attribute getter returns `None` when the message does not
/// expose the attribute. Such messages are skipped by the conditions
/// needing the attribute.
pub trait MessageItem {
    /// The identifier of the message inside its store.
    fn id(&self) -> &str;

    fn sender_address(&self) -> Option<&str>;

    fn sender_name(&self) -> Option<&str>;

    fn subject(&self) -> Option<&str>;

    fn sent_at(&self) -> Option<DateTime<FixedOffset>>;

    /// The date the message was received by the store, used to sort
    /// messages. Defaults to the sent date.
    fn received_at(&self) -> Option<DateTime<FixedOffset>> {
        self.sent_at()
    }
}

/// The email's envelope is composed of an identifier and few headers
/// taken from the email's content (message).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Envelope {
    /// The shape of the envelope identifier may differ depending on
    /// the store. For the Maildir store, it is the unique part of
    /// the message file name.
    pub id: String,
    /// The From header from the email's content (message).
    pub from: Option<Address>,
    /// The Subject header from the email's content (message).
    pub subject: Option<String>,
    /// The Date header from the email's content (message).
    pub date: Option<DateTime<FixedOffset>>,
    /// The date the message reached the store.
    pub received_at: Option<DateTime<FixedOffset>>,
}

impl Envelope {
    pub fn new(id: impl ToString) -> Self {
        Self {
            id: id.to_string(),
            ..Default::default()
        }
    }

    pub fn with_from(mut self, from: Address) -> Self {
        self.from = Some(from);
        self
    }

    pub fn with_subject(mut self, subject: impl ToString) -> Self {
        self.subject = Some(subject.to_string());
        self
    }

    pub fn with_date(mut self, date: DateTime<FixedOffset>) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_received_at(mut self, date: DateTime<FixedOffset>) -> Self {
        self.received_at = Some(date);
        self
    }

    /// Parses an envelope from an identifier and raw message headers.
    ///
    /// Headers that cannot be found or parsed are left empty.
    pub fn from_headers(id: impl ToString, headers: &[u8]) -> Self {
        let mut envelope = Envelope::new(id);

        let Some(msg) = MessageParser::default().parse(headers) else {
            warn!("cannot parse headers of message {}", envelope.id);
            return envelope;
        };

        match msg.from().and_then(|from| from.first()) {
            Some(from) => {
                let name = from.name.as_deref().map(ToOwned::to_owned);
                let addr = from.address.as_deref().unwrap_or_default();
                envelope.from = Some(Address::new(name, addr));
            }
            None => {
                warn!("cannot extract sender of message {}", envelope.id);
            }
        }

        envelope.subject = msg.subject().map(ToOwned::to_owned);

        match msg.date() {
            Some(dt) => envelope.date = date::from_mail_parser_datetime(dt),
            None => {
                warn!("cannot extract date of message {}", envelope.id);
            }
        }

        trace!("parsed envelope: {envelope:#?}");
        envelope
    }
}

impl MessageItem for Envelope {
    fn id(&self) -> &str {
        &self.id
    }

    fn sender_address(&self) -> Option<&str> {
        self.from
            .as_ref()
            .map(|from| from.addr.as_str())
            .filter(|addr| !addr.is_empty())
    }

    fn sender_name(&self) -> Option<&str> {
        self.from.as_ref().and_then(|from| from.name.as_deref())
    }

    fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    fn sent_at(&self) -> Option<DateTime<FixedOffset>> {
        self.date
    }

    fn received_at(&self) -> Option<DateTime<FixedOffset>> {
        self.received_at.or(self.date)
    }
}
