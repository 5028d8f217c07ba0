//! Module dedicated to configuration.
//!
//! This module contains the representation of the user's cleanup
//! configuration named [`CleanupConfig`], composed of one
//! [`AccountConfig`] per mailbox that can be cleaned up.

use std::collections::BTreeMap;

use crate::store::maildir::config::MaildirConfig;

/// The user's cleanup configuration.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case", deny_unknown_fields)
)]
pub struct CleanupConfig {
    /// The accounts that can be cleaned up, indexed by their name.
    ///
    /// Accounts are ordered by name, which gives them a stable
    /// option number when the operator selects one.
    pub accounts: BTreeMap<String, AccountConfig>,
}

impl CleanupConfig {
    /// Returns the account names, in selection order.
    pub fn account_names(&self) -> Vec<&str> {
        self.accounts.keys().map(String::as_str).collect()
    }

    /// Returns the account matching the given 1-based option number.
    pub fn account_by_option(&self, option: usize) -> Option<(&str, &AccountConfig)> {
        self.accounts
            .iter()
            .nth(option.checked_sub(1)?)
            .map(|(name, config)| (name.as_str(), config))
    }
}

/// The user's account configuration.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case", deny_unknown_fields)
)]
pub struct AccountConfig {
    /// The email address of the account, shown to the operator when
    /// confirming deletion conditions.
    pub email: String,

    /// The Maildir store configuration.
    pub maildir: MaildirConfig,

    /// The message deletion configuration.
    pub delete: Option<DeleteMessageConfig>,
}

impl AccountConfig {
    pub fn delete_message_style(&self) -> DeleteMessageStyle {
        self.delete
            .as_ref()
            .and_then(|c| c.style.clone())
            .unwrap_or_default()
    }
}

/// Configuration dedicated to message deletion.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub struct DeleteMessageConfig {
    /// The message deletion style.
    ///
    /// Message deletion can be performed either by moving messages to
    /// the Trash folder or by adding the trashed flag to them.
    pub style: Option<DeleteMessageStyle>,
}

/// The message deletion style.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum DeleteMessageStyle {
    /// The folder-based message deletion style.
    ///
    /// Deleted messages are moved to the Trash folder.
    #[default]
    Folder,

    /// The flag-based message deletion style.
    ///
    /// Deleted messages stay in place and receive the trashed
    /// flag. Messages already flagged are not listed anymore.
    Flag,
}

impl DeleteMessageStyle {
    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder)
    }

    pub fn is_flag(&self) -> bool {
        matches!(self, Self::Flag)
    }
}
