use std::io::{self, BufRead, Result, Stdout, Write};

use crate::delete::DeletionOutcome;

use super::View;

const DIVIDER: &str = "############################################################";

const DATE_HINT: &str = "in the format of mm/dd/yyyy, for ex. 12/16/2022 is Dec 16, 2022";

/// The console view.
///
/// Reads operator inputs line by line from `R` and writes prompts
/// and messages to `W`.
pub struct PrintView<R, W> {
    reader: R,
    writer: W,
}

impl PrintView<io::StdinLock<'static>, Stdout> {
    /// Builds a console view bound to the standard input and output
    /// of the process.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> PrintView<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn prompt(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed by operator"));
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_owned())
    }

    fn prompt_yes(&mut self, prompt: &str) -> Result<bool> {
        let choice = self.prompt(prompt)?.trim().to_lowercase();
        Ok(choice == "y" || choice == "yes")
    }
}

impl<R: BufRead, W: Write> View for PrintView<R, W> {
    fn display_welcome(&mut self) -> Result<()> {
        writeln!(
            self.writer,
            "//////////// Welcome to the email cleanup ////////////"
        )
    }

    fn display_message(&mut self, msg: &str) -> Result<()> {
        writeln!(self.writer, "{msg}")
    }

    fn display_error(&mut self, err: &str) -> Result<()> {
        writeln!(self.writer, "!!!! ERROR: {err} !!!!")?;
        writeln!(self.writer, "\n{DIVIDER}")
    }

    fn select_account(&mut self, accounts: &[&str]) -> Result<String> {
        writeln!(self.writer, "Which email do you want to clean up?")?;
        writeln!(
            self.writer,
            "Please select the option corresponding to the email of your choice."
        )?;
        writeln!(self.writer, "Option : Email")?;

        for (i, account) in accounts.iter().enumerate() {
            writeln!(self.writer, "{} : {account}", i + 1)?;
        }

        self.prompt("Your choice: ")
    }

    fn prompt_sender_address(&mut self) -> Result<String> {
        self.prompt("Sender email address: ")
    }

    fn prompt_sender_name(&mut self) -> Result<String> {
        self.prompt("Sender name: ")
    }

    fn prompt_start_date(&mut self) -> Result<String> {
        self.prompt(&format!("Lower date boundary (inclusive) {DATE_HINT}:\n"))
    }

    fn prompt_end_date(&mut self) -> Result<String> {
        self.prompt(&format!("Upper date boundary (inclusive) {DATE_HINT}:\n"))
    }

    fn prompt_subject_keyphrase(&mut self) -> Result<String> {
        self.prompt("Subject keyword or phrase: ")
    }

    fn confirm_conditions(&mut self, confirmation: &str, account: &str) -> Result<bool> {
        writeln!(
            self.writer,
            "This action will delete all emails from {account}'s inbox"
        )?;
        writeln!(self.writer, "matching the following condition(s):")?;
        writeln!(self.writer, "{confirmation}")?;
        self.prompt_yes("Enter y/yes to confirm: ")
    }

    fn display_deletion_summary(&mut self, outcome: &DeletionOutcome) -> Result<()> {
        writeln!(
            self.writer,
            "{} emails have been moved to the trash",
            outcome.deleted
        )?;

        if outcome.skipped > 0 {
            writeln!(
                self.writer,
                "{} could NOT be processed (missing date, sender or subject)",
                outcome.skipped
            )?;
        }

        writeln!(self.writer, "\n{DIVIDER}")
    }

    fn ask_delete_more(&mut self) -> Result<bool> {
        writeln!(self.writer, "Do you want to delete more emails?")?;
        self.prompt_yes("Enter y/yes to confirm: ")
    }
}
