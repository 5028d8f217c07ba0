use std::fmt;

use chrono::{DateTime, Local};
use tracing::{debug, warn};

use crate::date::{self, DateBound};

use super::{ConditionTag, DisplayFragments, Error, Result, CONFIRMATION_SEPARATOR};

/// The deletion condition session.
///
/// A session is created empty at the beginning of a configuration
/// round, filled through its setters, then verified. Only a verified
/// session can be used to match messages. Any successful mutation
/// invalidates a previous verification.
///
/// Setters ignore blank inputs: a blank input never clears a value
/// that has already been set.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ConditionSession {
    sender_address: Option<String>,
    sender_name: Option<String>,
    subject_keyphrase: Option<String>,
    start: Option<DateTime<Local>>,
    end: Option<DateTime<Local>>,

    fragments: DisplayFragments,
    accepted_tags: Vec<ConditionTag>,
    confirmation_text: String,
    verified: bool,
}

impl ConditionSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sender_address(&self) -> Option<&str> {
        self.sender_address.as_deref()
    }

    pub fn sender_name(&self) -> Option<&str> {
        self.sender_name.as_deref()
    }

    pub fn subject_keyphrase(&self) -> Option<&str> {
        self.subject_keyphrase.as_deref()
    }

    pub fn start_date(&self) -> Option<&DateTime<Local>> {
        self.start.as_ref()
    }

    pub fn end_date(&self) -> Option<&DateTime<Local>> {
        self.end.as_ref()
    }

    pub fn fragments(&self) -> &DisplayFragments {
        &self.fragments
    }

    /// The conditions accepted by the last successful verification,
    /// in evaluation order.
    pub fn accepted_tags(&self) -> &[ConditionTag] {
        &self.accepted_tags
    }

    /// The fragments of the accepted conditions joined with
    /// [`CONFIRMATION_SEPARATOR`].
    pub fn confirmation_text(&self) -> &str {
        &self.confirmation_text
    }

    pub fn is_verified(&self) -> bool {
        self.verified
    }

    pub fn set_sender_address(&mut self, address: impl AsRef<str>) {
        if let Some(address) = non_blank(address.as_ref()) {
            debug!("setting sender address condition to {address}");
            self.sender_address = Some(address.to_owned());
            self.set_fragment(ConditionTag::SenderAddress, address);
            self.invalidate();
        }
    }

    pub fn set_sender_name(&mut self, name: impl AsRef<str>) {
        if let Some(name) = non_blank(name.as_ref()) {
            debug!("setting sender name condition to {name}");
            self.sender_name = Some(name.to_owned());
            self.set_fragment(ConditionTag::SenderName, name);
            self.invalidate();
        }
    }

    pub fn set_subject_keyphrase(&mut self, keyphrase: impl AsRef<str>) {
        if let Some(keyphrase) = non_blank(keyphrase.as_ref()) {
            debug!("setting subject keyphrase condition to {keyphrase}");
            self.subject_keyphrase = Some(keyphrase.to_owned());
            self.set_fragment(ConditionTag::Subject, keyphrase);
            self.invalidate();
        }
    }

    /// Sets the lower bound of the date range, at 00:00:00 local
    /// time.
    ///
    /// Setting a new start date discards any end date previously set,
    /// which then needs to be set again.
    pub fn set_start_date(&mut self, text: impl AsRef<str>) -> Result<()> {
        let Some(text) = non_blank(text.as_ref()) else {
            return Ok(());
        };

        let start = date::parse_instant(text, DateBound::Start)
            .map_err(|err| Error::DateConversionError(err, text.to_owned()))?;
        debug!("setting start date condition to {start}");

        self.start = Some(start);
        self.end = None;
        self.set_fragment(ConditionTag::DateRange, date::format_date(&start));
        self.invalidate();

        Ok(())
    }

    /// Sets the upper bound of the date range, at 23:59:59 local
    /// time.
    ///
    /// A start date must be set first. A blank text is accepted only
    /// when no start date is set.
    pub fn set_end_date(&mut self, text: impl AsRef<str>) -> Result<()> {
        let Some(start) = self.start else {
            return match non_blank(text.as_ref()) {
                None => Ok(()),
                Some(_) => Err(Error::MissingStartDateError),
            };
        };

        let Some(text) = non_blank(text.as_ref()) else {
            return Err(Error::MissingStartDateError);
        };

        let end = date::parse_instant(text, DateBound::End)
            .map_err(|err| Error::DateConversionError(err, text.to_owned()))?;

        if self.fragments.get(ConditionTag::DateRange).is_none() {
            return Err(Error::MissingStartDateError);
        }

        if end < start {
            warn!("end date {end} is before start date {start}, no message will match");
        }

        debug!("setting end date condition to {end}");
        self.end = Some(end);
        let from = date::format_date(&start);
        let to = date::format_date(&end);
        self.set_fragment(ConditionTag::DateRange, format!("{from} to {to}"));
        self.invalidate();

        Ok(())
    }

    /// Discards both bounds of the date range.
    pub fn clear_date_range(&mut self) {
        if self.start.is_some() || self.end.is_some() {
            debug!("clearing date range condition");
            self.start = None;
            self.end = None;
            self.fragments.remove(ConditionTag::DateRange);
            self.invalidate();
        }
    }

    /// Resets the session to its initial, empty state.
    pub fn clear(&mut self) {
        debug!("clearing deletion conditions");
        *self = Self::default();
    }

    /// Verifies the configured conditions.
    ///
    /// On success, the accepted tags and the confirmation text are
    /// computed and the session becomes verified. The accepted tags
    /// and the confirmation text are also computed when the date
    /// range is incomplete, but the session stays unverified.
    pub fn verify(&mut self) -> Result<()> {
        self.invalidate();

        let nothing_set = self.sender_address.is_none()
            && self.sender_name.is_none()
            && self.subject_keyphrase.is_none()
            && self.start.is_none()
            && self.end.is_none();

        if nothing_set {
            return Err(Error::EmptyConditionsError);
        }

        self.accepted_tags = ConditionTag::ALL
            .into_iter()
            .filter(|tag| self.is_configured(*tag))
            .collect();

        self.confirmation_text = self
            .accepted_tags
            .iter()
            .filter_map(|tag| self.fragments.get(*tag))
            .collect::<Vec<_>>()
            .join(CONFIRMATION_SEPARATOR);

        match (self.start, self.end) {
            (Some(_), None) => return Err(Error::IncompleteDateRangeError(DateBound::End)),
            (None, Some(_)) => return Err(Error::IncompleteDateRangeError(DateBound::Start)),
            _ => (),
        }

        self.verified = true;
        debug!(tags = ?self.accepted_tags, "deletion conditions verified");

        Ok(())
    }

    fn is_configured(&self, tag: ConditionTag) -> bool {
        match tag {
            ConditionTag::SenderAddress => self.sender_address.is_some(),
            ConditionTag::DateRange => self.start.is_some() && self.end.is_some(),
            ConditionTag::Subject => self.subject_keyphrase.is_some(),
            ConditionTag::SenderName => self.sender_name.is_some(),
        }
    }

    fn set_fragment(&mut self, tag: ConditionTag, value: impl fmt::Display) {
        self.fragments.set(tag, tag.fragment(value));
    }

    fn invalidate(&mut self) {
        self.verified = false;
        self.accepted_tags.clear();
        self.confirmation_text.clear();
    }
}

fn non_blank(text: &str) -> Option<&str> {
    let text = text.trim();

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
