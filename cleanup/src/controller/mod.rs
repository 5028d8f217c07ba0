//! # Controller
//!
//! Module dedicated to the coordination between the operator, through
//! a [`View`], the [`ConditionSession`] and a message store. The
//! controller owns every retry loop: the session only reports the
//! precise failure of the first bad input.

mod print;
mod view;

use std::{io, result};

use thiserror::Error;
use tracing::{debug, info};

use crate::{
    condition,
    config::{AccountConfig, CleanupConfig},
    delete::{self, delete_matching},
    store::{maildir, MaildirStore, MessageStore},
    ConditionSession,
};

#[doc(inline)]
pub use self::{print::PrintView, view::View};

/// The global `Result` alias of the module.
pub type Result<T> = result::Result<T, Error>;

/// The global `Error` enum of the module.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot find any account to clean up, please configure at least one")]
    NoAccountConfiguredError,
    #[error("cannot open store of account {1}")]
    OpenStoreError(#[source] maildir::Error, String),
    #[error("cannot delete matching messages")]
    DeleteMessagesError(#[from] delete::Error),
    #[error("cannot interact with operator")]
    ViewError(#[from] io::Error),
}

/// The cleanup controller.
pub struct Controller<V: View> {
    config: CleanupConfig,
    view: V,
    session: ConditionSession,
}

impl<V: View> Controller<V> {
    pub fn new(config: CleanupConfig, view: V) -> Self {
        Self {
            config,
            view,
            session: ConditionSession::new(),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// The session of the last configuration round.
    pub fn session(&self) -> &ConditionSession {
        &self.session
    }

    /// Runs the whole cleanup: account selection, then deletion
    /// rounds on the Maildir store of the selected account.
    pub fn run(&mut self) -> Result<()> {
        if self.config.accounts.is_empty() {
            return Err(Error::NoAccountConfiguredError);
        }

        self.view.display_welcome()?;

        let (name, account) = self.select_account()?;
        info!("cleaning up account {name}");

        let mut store = MaildirStore::from_account_config(&account)
            .map_err(|err| Error::OpenStoreError(err, name.clone()))?;

        self.run_rounds(&mut store, &account.email)?;

        self.view.display_message("Disconnecting from mailbox...")?;
        Ok(())
    }

    /// Runs deletion rounds on the given store until the operator
    /// does not want to delete more messages.
    pub fn run_rounds<S: MessageStore>(&mut self, store: &mut S, account: &str) -> Result<()> {
        loop {
            self.configure_conditions(account)?;

            self.view.display_message("Looking for matching emails, please wait...")?;

            let outcome = delete_matching(store, &self.session)?;
            self.view.display_deletion_summary(&outcome)?;

            if !self.view.ask_delete_more()? {
                return Ok(());
            }
        }
    }

    fn select_account(&mut self) -> Result<(String, AccountConfig)> {
        loop {
            let names = self.config.account_names();
            let choice = self.view.select_account(&names)?;

            let account = choice
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|option| self.config.account_by_option(option));

            if let Some((name, config)) = account {
                return Ok((name.to_owned(), config.clone()));
            }

            let err = format!("{choice} is NOT a valid option, please try again");
            self.view.display_error(&err)?;
        }
    }

    /// Prompts conditions until they are verified and confirmed by
    /// the operator.
    fn configure_conditions(&mut self, account: &str) -> Result<()> {
        loop {
            self.prompt_conditions()?;

            match self.session.verify() {
                Ok(()) => (),
                Err(condition::Error::EmptyConditionsError) => {
                    self.view.display_error(
                        "All parameters can NOT be left EMPTY, at least 1 must be filled",
                    )?;
                    continue;
                }
                Err(err) => {
                    self.view.display_error(&err.to_string())?;
                    continue;
                }
            }

            let confirmation = self.session.confirmation_text();
            debug!("asking confirmation for: {confirmation}");

            self.view.display_message("Please Confirm Deletion Parameters...")?;

            if self.view.confirm_conditions(confirmation, account)? {
                return Ok(());
            }

            self.view.display_message("Resetting Deletion Parameters...")?;
        }
    }

    fn prompt_conditions(&mut self) -> Result<()> {
        self.session.clear();

        self.view.display_message(
            "Please enter the email parameter(s) for deletion, you may leave any parameter blank",
        )?;

        let address = self.view.prompt_sender_address()?;
        self.session.set_sender_address(address);

        let name = self.view.prompt_sender_name()?;
        self.session.set_sender_name(name);

        self.prompt_date_range()?;

        let keyphrase = self.view.prompt_subject_keyphrase()?;
        self.session.set_subject_keyphrase(keyphrase);

        Ok(())
    }

    /// Prompts the start date until it is valid, then the end date
    /// until it is valid. An end date without start date, or a start
    /// date without end date, restarts the whole date range.
    fn prompt_date_range(&mut self) -> Result<()> {
        'range: loop {
            loop {
                let start = self.view.prompt_start_date()?;
                match self.session.set_start_date(start) {
                    Ok(()) => break,
                    Err(err) => self.view.display_error(&err.to_string())?,
                }
            }

            loop {
                let end = self.view.prompt_end_date()?;
                match self.session.set_end_date(end) {
                    Ok(()) => return Ok(()),
                    Err(condition::Error::MissingStartDateError) => {
                        self.view.display_error(
                            "Start date and end date must both be filled or both be left empty",
                        )?;
                        self.session.clear_date_range();
                        continue 'range;
                    }
                    Err(err) => self.view.display_error(&err.to_string())?,
                }
            }
        }
    }
}
