//! Interactive cleanup of a local Maildir.
//!
//! ```sh
//! MAILDIR=~/Mail/INBOX EMAIL=alice@localhost RUST_LOG=debug cargo run --example maildir
//! ```

use std::env;

use cleanup::{
    config::{AccountConfig, CleanupConfig, DeleteMessageConfig, DeleteMessageStyle},
    controller::{Controller, PrintView},
    store::maildir::config::MaildirConfig,
};
use tracing_subscriber::EnvFilter;

pub fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let root_dir = env::var("MAILDIR")
        .unwrap_or_else(|_| String::from("~/Mail/INBOX"));
    let email = env::var("EMAIL")
        .unwrap_or_else(|_| String::from("me@localhost"));
    let style = match env::var("DELETE_STYLE").as_deref() {
        Ok("flag") => DeleteMessageStyle::Flag,
        _ => DeleteMessageStyle::Folder,
    };

    let mut config = CleanupConfig::default();
    config.accounts.insert(
        email.clone(),
        AccountConfig {
            email,
            maildir: MaildirConfig::new(root_dir),
            delete: Some(DeleteMessageConfig { style: Some(style) }),
        },
    );

    let mut controller = Controller::new(config, PrintView::stdio());

    if let Err(err) = controller.run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
