//! Module dedicated to the Maildir store configuration.

use std::path::PathBuf;

use shellexpand_utils::shellexpand_path;

/// The default name of the Maildir++ trash folder.
pub const DEFAULT_TRASH_FOLDER: &str = "Trash";

/// The Maildir store configuration.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub struct MaildirConfig {
    /// The Maildir root directory.
    ///
    /// The path should point to the root level of the Maildir
    /// directory (the one containing the `cur`, `new` and `tmp`
    /// folders), which is the inbox. Path is shell-expanded, which
    /// means environment variables and tilde `~` are replaced by
    /// their values.
    pub root_dir: PathBuf,

    /// The name of the trash folder.
    ///
    /// Following the Maildir++ layout, the folder lives at
    /// `<root-dir>/.<trash-folder>`. Defaults to
    /// [`DEFAULT_TRASH_FOLDER`].
    pub trash_folder: Option<String>,
}

impl MaildirConfig {
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            trash_folder: None,
        }
    }

    /// Returns the shell-expanded root directory.
    pub fn root_dir(&self) -> PathBuf {
        shellexpand_path(&self.root_dir)
    }

    pub fn trash_folder(&self) -> &str {
        self.trash_folder.as_deref().unwrap_or(DEFAULT_TRASH_FOLDER)
    }

    /// Returns the path of the trash Maildir.
    pub fn trash_dir(&self) -> PathBuf {
        self.root_dir().join(format!(".{}", self.trash_folder()))
    }
}
