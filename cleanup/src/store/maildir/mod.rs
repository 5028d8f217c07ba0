//! Module dedicated to the Maildir store.
//!
//! The inbox is the root Maildir of the account, the trash is the
//! Maildir++ sub-folder configured in [`MaildirConfig`]. Messages are
//! never unlinked: depending on the [`DeleteMessageStyle`], they are
//! either moved to the trash or flagged as trashed.

pub mod config;
mod error;

use std::fs;

use chrono::{DateTime, Local};
use maildirpp::{MailEntry, Maildir};
use tracing::{debug, info};

use crate::{
    config::{AccountConfig, DeleteMessageStyle},
    AnyResult, Envelope,
};

use self::config::MaildirConfig;
#[doc(inline)]
pub use self::error::{Error, Result};

use super::MessageStore;

/// The Maildir flag marking a message as trashed.
pub const TRASHED_FLAG: &str = "T";

/// The Maildir store.
pub struct MaildirStore {
    inbox: Maildir,
    trash: Maildir,
    style: DeleteMessageStyle,
}

impl MaildirStore {
    /// Opens the Maildir store described by the given configuration.
    ///
    /// The inbox must exist. With the folder deletion style, the
    /// trash folder is created when missing.
    pub fn new(config: &MaildirConfig, style: DeleteMessageStyle) -> Result<Self> {
        let root_dir = config.root_dir();
        if !root_dir.join("cur").is_dir() {
            return Err(Error::FindInboxError(root_dir));
        }

        let inbox = Maildir::from(root_dir);
        let trash = Maildir::from(config.trash_dir());

        if style.is_folder() {
            let path = trash.path().to_owned();
            trash
                .create_dirs()
                .map_err(|err| Error::CreateTrashFolderError(err, path))?;
        }

        debug!("opened maildir store at {}", inbox.path().display());

        Ok(Self {
            inbox,
            trash,
            style,
        })
    }

    pub fn from_account_config(config: &AccountConfig) -> Result<Self> {
        Self::new(&config.maildir, config.delete_message_style())
    }

    pub fn inbox(&self) -> &Maildir {
        &self.inbox
    }

    pub fn trash(&self) -> &Maildir {
        &self.trash
    }

    fn is_new(&self, id: &str) -> bool {
        self.inbox.path().join("new").join(id).is_file()
    }

    fn list_envelopes(&self) -> Result<Vec<Envelope>> {
        let path = self.inbox.path();
        info!("listing envelopes from maildir {}", path.display());

        let mut envelopes = Vec::new();

        for entry in self.inbox.list_new().chain(self.inbox.list_cur()) {
            let entry = entry
                .map_err(|err| Error::ListEntriesError(err, path.to_owned()))?;

            if entry.is_trashed() {
                debug!(
                    "maildir message {} is already trashed, skipping it",
                    entry.id()
                );
                continue;
            }

            envelopes.push(to_envelope(&entry));
        }

        debug!("found {} maildir envelopes", envelopes.len());
        Ok(envelopes)
    }

    fn trash_message(&self, id: &str) -> Result<()> {
        match self.style {
            DeleteMessageStyle::Folder => {
                info!("moving maildir message {id} to trash folder");

                let trash = self.trash.path();
                let move_err = |err| Error::MoveToTrashError(err, id.to_owned(), trash.to_owned());

                if self.is_new(id) {
                    self.inbox.move_new_to_cur(id).map_err(move_err)?;
                }

                self.inbox.move_to(id, &self.trash).map_err(move_err)
            }
            DeleteMessageStyle::Flag => {
                info!("flagging maildir message {id} as trashed");

                let flag_err = |err| Error::AddTrashedFlagError(err, id.to_owned());

                if self.is_new(id) {
                    self.inbox
                        .move_new_to_cur_with_flags(id, TRASHED_FLAG)
                        .map_err(flag_err)
                } else {
                    self.inbox.add_flags(id, TRASHED_FLAG).map_err(flag_err)
                }
            }
        }
    }
}

impl MessageStore for MaildirStore {
    type Item = Envelope;

    fn list_messages(&self) -> AnyResult<Vec<Envelope>> {
        Ok(self.list_envelopes()?)
    }

    fn delete_message(&mut self, envelope: &Envelope) -> AnyResult<()> {
        Ok(self.trash_message(&envelope.id)?)
    }
}

/// Builds an envelope from the headers of the given entry.
///
/// The received date is taken from the modification time of the
/// message file, which is set at delivery.
fn to_envelope(entry: &MailEntry) -> Envelope {
    let mut envelope = Envelope::from_headers(entry.id(), entry.headers());

    envelope.received_at = fs::metadata(entry.path())
        .and_then(|metadata| metadata.modified())
        .ok()
        .map(|time| DateTime::<Local>::from(time).fixed_offset());

    envelope
}
