use std::io::Result;

use crate::delete::DeletionOutcome;

/// The presentation boundary of the controller.
///
/// A view only displays information and collects raw operator
/// inputs. Validation and retries are owned by the
/// [`Controller`](super::Controller).
pub trait View {
    fn display_welcome(&mut self) -> Result<()>;

    fn display_message(&mut self, msg: &str) -> Result<()>;

    fn display_error(&mut self, err: &str) -> Result<()>;

    /// Displays the numbered account options and returns the raw
    /// choice of the operator.
    fn select_account(&mut self, accounts: &[&str]) -> Result<String>;

    fn prompt_sender_address(&mut self) -> Result<String>;

    fn prompt_sender_name(&mut self) -> Result<String>;

    fn prompt_start_date(&mut self) -> Result<String>;

    fn prompt_end_date(&mut self) -> Result<String>;

    fn prompt_subject_keyphrase(&mut self) -> Result<String>;

    /// Asks the operator to confirm the deletion of the messages of
    /// the given account matching the given confirmation text.
    fn confirm_conditions(&mut self, confirmation: &str, account: &str) -> Result<bool>;

    fn display_deletion_summary(&mut self, outcome: &DeletionOutcome) -> Result<()>;

    fn ask_delete_more(&mut self) -> Result<bool>;
}
