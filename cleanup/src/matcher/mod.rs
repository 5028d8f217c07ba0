//! # Matcher
//!
//! Module dedicated to the evaluation of verified deletion conditions
//! against a list of messages.

use std::{cmp::Reverse, result};

use chrono::Local;
use thiserror::Error;
use tracing::{debug, trace};

use crate::{ConditionSession, ConditionTag, MessageItem};

/// The global `Result` alias of the module.
pub type Result<T> = result::Result<T, Error>;

/// The global `Error` enum of the module.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot match messages: deletion conditions have not been verified")]
    NotVerifiedError,
}

/// The outcome of a match.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Matches<T> {
    /// The matching messages, from the most recently received to the
    /// oldest.
    pub matched: Vec<T>,
    /// The number of messages skipped because they miss an attribute
    /// needed by a condition.
    pub skipped: usize,
}

impl<T> Default for Matches<T> {
    fn default() -> Self {
        Self {
            matched: Vec::new(),
            skipped: 0,
        }
    }
}

/// Finds the messages matching all the accepted conditions of the
/// given verified session.
///
/// Messages are first sorted by received date, most recent first,
/// messages without received date last. Conditions are evaluated in
/// the accepted order and evaluation stops at the first condition
/// that does not pass. A message missing the attribute needed by a
/// condition is skipped and counted, it does not abort the match.
pub fn find_matches<T: MessageItem>(
    mut items: Vec<T>,
    session: &ConditionSession,
) -> Result<Matches<T>> {
    if !session.is_verified() {
        return Err(Error::NotVerifiedError);
    }

    items.sort_by_key(|item| Reverse(item.received_at()));

    let mut matches = Matches::default();

    'items: for item in items {
        for tag in session.accepted_tags() {
            match evaluate(*tag, session, &item) {
                Some(true) => continue,
                Some(false) => {
                    trace!("message {} does not match {tag}", item.id());
                    continue 'items;
                }
                None => {
                    debug!(
                        "message {} has no {}, skipping it",
                        item.id(),
                        tag.attribute()
                    );
                    matches.skipped += 1;
                    continue 'items;
                }
            }
        }

        trace!("message {} matches", item.id());
        matches.matched.push(item);
    }

    debug!(
        matched = matches.matched.len(),
        skipped = matches.skipped,
        "messages matched"
    );

    Ok(matches)
}

/// Evaluates one condition against one message.
///
/// Returns `None` when the message does not expose the attribute
/// needed by the condition.
fn evaluate(
    tag: ConditionTag,
    session: &ConditionSession,
    item: &impl MessageItem,
) -> Option<bool> {
    match tag {
        ConditionTag::SenderAddress => {
            let expected = session.sender_address()?;
            Some(item.sender_address()?.eq_ignore_ascii_case(expected))
        }
        ConditionTag::DateRange => {
            let (start, end) = (session.start_date()?, session.end_date()?);
            let sent_at = item.sent_at()?.with_timezone(&Local);
            Some(*start <= sent_at && sent_at <= *end)
        }
        ConditionTag::Subject => {
            let keyphrase = session.subject_keyphrase()?.to_lowercase();
            Some(item.subject()?.to_lowercase().contains(&keyphrase))
        }
        ConditionTag::SenderName => {
            let expected = session.sender_name()?.to_lowercase();
            Some(item.sender_name()?.to_lowercase() == expected)
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, FixedOffset, Local, TimeZone};

    use crate::{Address, ConditionSession, Envelope};

    use super::{find_matches, Error};

    fn date(y: i32, m: u32, d: u32, h: u32) -> DateTime<FixedOffset> {
        Local
            .with_ymd_and_hms(y, m, d, h, 0, 0)
            .unwrap()
            .fixed_offset()
    }

    fn envelope(id: &str, addr: &str, subject: &str, sent_at: DateTime<FixedOffset>) -> Envelope {
        Envelope::new(id)
            .with_from(Address::new(Some(id.to_uppercase()), addr))
            .with_subject(subject)
            .with_date(sent_at)
    }

    fn ids(envelopes: &[Envelope]) -> Vec<&str> {
        envelopes.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn unverified_session() {
        let mut session = ConditionSession::new();
        session.set_sender_address("x@y.com");

        assert!(matches!(
            find_matches(Vec::<Envelope>::new(), &session),
            Err(Error::NotVerifiedError)
        ));
    }

    #[test]
    fn sender_address_is_case_insensitive() {
        let mut session = ConditionSession::new();
        session.set_sender_address("News@Shop.com");
        session.verify().unwrap();

        let items = vec![
            envelope("a", "news@shop.com", "Deals", date(2001, 2, 1, 10)),
            envelope("b", "other@shop.com", "Deals", date(2001, 2, 2, 10)),
            envelope("c", "NEWS@SHOP.COM", "More deals", date(2001, 2, 3, 10)),
        ];

        let matches = find_matches(items, &session).unwrap();

        assert_eq!(ids(&matches.matched), vec!["c", "a"]);
        assert_eq!(matches.skipped, 0);
    }

    #[test]
    fn missing_sender_address_is_skipped() {
        let mut session = ConditionSession::new();
        session.set_sender_address("news@shop.com");
        session.verify().unwrap();

        let items = vec![
            Envelope::new("no-sender").with_subject("Deals"),
            envelope("a", "news@shop.com", "Deals", date(2001, 2, 1, 10)),
        ];

        let matches = find_matches(items, &session).unwrap();

        assert_eq!(ids(&matches.matched), vec!["a"]);
        assert_eq!(matches.skipped, 1);
    }

    #[test]
    fn date_range_is_inclusive() {
        let mut session = ConditionSession::new();
        session.set_start_date("2/1/2001").unwrap();
        session.set_end_date("2/3/2001").unwrap();
        session.verify().unwrap();

        let items = vec![
            envelope("before", "a@b.c", "s", date(2001, 1, 31, 23)),
            envelope("first", "a@b.c", "s", date(2001, 2, 1, 0)),
            envelope("last", "a@b.c", "s", date(2001, 2, 3, 23)),
            envelope("after", "a@b.c", "s", date(2001, 2, 4, 0)),
            Envelope::new("undated").with_subject("s"),
        ];

        let matches = find_matches(items, &session).unwrap();

        assert_eq!(ids(&matches.matched), vec!["last", "first"]);
        assert_eq!(matches.skipped, 1);
    }

    #[test]
    fn subject_is_a_case_insensitive_substring() {
        let mut session = ConditionSession::new();
        session.set_subject_keyphrase("weekly NEWS");
        session.verify().unwrap();

        let items = vec![
            envelope("a", "a@b.c", "Weekly News digest", date(2001, 2, 1, 10)),
            envelope("b", "a@b.c", "Monthly news", date(2001, 2, 2, 10)),
        ];

        let matches = find_matches(items, &session).unwrap();

        assert_eq!(ids(&matches.matched), vec!["a"]);
    }

    #[test]
    fn sender_name() {
        let mut session = ConditionSession::new();
        session.set_sender_name("b");
        session.verify().unwrap();

        let nameless = Address::new_nameless("c@b.c");
        let items = vec![
            envelope("a", "a@b.c", "s", date(2001, 2, 1, 10)),
            envelope("b", "b@b.c", "s", date(2001, 2, 2, 10)),
            Envelope::new("nameless").with_from(nameless),
        ];

        let matches = find_matches(items, &session).unwrap();

        assert_eq!(ids(&matches.matched), vec!["b"]);
        assert_eq!(matches.skipped, 1);
    }

    #[test]
    fn all_conditions_must_pass() {
        let mut session = ConditionSession::new();
        session.set_sender_address("a@b.c");
        session.set_subject_keyphrase("invoice");
        session.verify().unwrap();

        let items = vec![
            envelope("both", "a@b.c", "Invoice #1", date(2001, 2, 1, 10)),
            envelope("sender-only", "a@b.c", "Hello", date(2001, 2, 2, 10)),
            envelope("subject-only", "x@b.c", "Invoice #2", date(2001, 2, 3, 10)),
        ];

        let matches = find_matches(items, &session).unwrap();

        assert_eq!(ids(&matches.matched), vec!["both"]);
        assert_eq!(matches.skipped, 0);
    }

    #[test]
    fn failing_condition_stops_evaluation() {
        let mut session = ConditionSession::new();
        session.set_sender_address("a@b.c");
        session.set_start_date("1/1/2001").unwrap();
        session.set_end_date("12/31/2001").unwrap();
        session.verify().unwrap();

        // the sender does not match, so the missing date is never read
        let sender = Address::new_nameless("x@b.c");
        let items = vec![Envelope::new("x").with_from(sender)];

        let matches = find_matches(items, &session).unwrap();

        assert!(matches.matched.is_empty());
        assert_eq!(matches.skipped, 0);
    }

    #[test]
    fn sorted_by_received_date_descending() {
        let mut session = ConditionSession::new();
        session.set_subject_keyphrase("s");
        session.verify().unwrap();

        let items = vec![
            envelope("old", "a@b.c", "s", date(2001, 2, 1, 10)),
            Envelope::new("unknown").with_subject("s"),
            envelope("new", "a@b.c", "s", date(2001, 2, 3, 10)),
            envelope("mid", "a@b.c", "s", date(2001, 2, 2, 10))
                .with_received_at(date(2001, 2, 4, 10)),
        ];

        let matches = find_matches(items, &session).unwrap();

        assert_eq!(
            ids(&matches.matched),
            vec!["mid", "new", "old", "unknown"]
        );
    }
}
