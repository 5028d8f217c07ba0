use cleanup::{
    config::{AccountConfig, DeleteMessageConfig, DeleteMessageStyle},
    delete::{delete_matching, DeletionOutcome},
    store::{
        maildir::{config::MaildirConfig, Error},
        MaildirStore, MessageStore,
    },
    ConditionSession, MessageItem,
};
use maildirpp::Maildir;
use tempfile::{tempdir, TempDir};

const PROMO: &[u8] = b"From: Shop <promo@shop.com>\r
To: alice@localhost\r
Subject: Huge deals this week\r
Date: Thu, 16 Mar 2023 10:00:00 +0000\r
\r
Buy now!\r
";

const PROMO_AGAIN: &[u8] = b"From: Shop <PROMO@shop.com>\r
To: alice@localhost\r
Subject: Last chance for deals\r
Date: Fri, 17 Mar 2023 03:00:00 +0000\r
\r
Really, buy now!\r
";

const FRIEND: &[u8] = b"From: Bob <bob@home.net>\r
To: alice@localhost\r
Subject: Dinner\r
Date: Sat, 18 Mar 2023 19:00:00 +0000\r
\r
See you tonight.\r
";

const ANONYMOUS: &[u8] = b"To: alice@localhost\r
Subject: Who am I\r
\r
Guess.\r
";

fn setup() -> (TempDir, Maildir) {
    let dir = tempdir().unwrap();
    let mdir = Maildir::from(dir.path().to_owned());
    mdir.create_dirs().unwrap();

    mdir.store_new(PROMO).unwrap();
    mdir.store_cur_with_flags(PROMO_AGAIN, "S").unwrap();
    mdir.store_cur_with_flags(FRIEND, "S").unwrap();
    mdir.store_new(ANONYMOUS).unwrap();

    (dir, mdir)
}

fn promo_session() -> ConditionSession {
    let mut session = ConditionSession::new();
    session.set_sender_address("promo@shop.com");
    session.verify().unwrap();
    session
}

#[test_log::test]
fn list_maildir_messages() {
    let (dir, _mdir) = setup();
    let config = MaildirConfig::new(dir.path());
    let store = MaildirStore::new(&config, Default::default()).unwrap();

    let mut envelopes = store.list_messages().unwrap();
    envelopes.sort_by(|a, b| a.subject().cmp(&b.subject()));

    let subjects: Vec<_> = envelopes.iter().filter_map(|e| e.subject()).collect();
    assert_eq!(
        subjects,
        vec![
            "Dinner",
            "Huge deals this week",
            "Last chance for deals",
            "Who am I"
        ]
    );

    let dinner = &envelopes[0];
    assert_eq!(dinner.sender_address(), Some("bob@home.net"));
    assert_eq!(dinner.sender_name(), Some("Bob"));
    assert!(dinner.sent_at().is_some());
    assert!(dinner.received_at().is_some());

    let anonymous = &envelopes[3];
    assert_eq!(anonymous.sender_address(), None);
    assert_eq!(anonymous.sent_at(), None);
}

#[test_log::test]
fn delete_to_trash_folder() {
    let (dir, mdir) = setup();
    let config = MaildirConfig::new(dir.path());
    let style = DeleteMessageStyle::Folder;
    let mut store = MaildirStore::new(&config, style).unwrap();

    let outcome = delete_matching(&mut store, &promo_session()).unwrap();

    assert_eq!(
        outcome,
        DeletionOutcome {
            deleted: 2,
            skipped: 1
        }
    );

    let trash = Maildir::from(dir.path().join(".Trash"));
    assert_eq!(trash.count_new(), 0);
    assert_eq!(trash.count_cur(), 2);
    assert_eq!(mdir.count_new() + mdir.count_cur(), 2);

    let remaining = store.list_messages().unwrap();
    assert_eq!(remaining.len(), 2);
    let promo = Some("promo@shop.com");
    assert!(remaining.iter().all(|e| e.sender_address() != promo));
}

#[test_log::test]
fn delete_with_trashed_flag() {
    let (dir, mdir) = setup();
    let account = AccountConfig {
        email: "alice@localhost".into(),
        maildir: MaildirConfig::new(dir.path()),
        delete: Some(DeleteMessageConfig {
            style: Some(DeleteMessageStyle::Flag),
        }),
    };
    let mut store = MaildirStore::from_account_config(&account).unwrap();

    let outcome = delete_matching(&mut store, &promo_session()).unwrap();
    assert_eq!(outcome.deleted, 2);

    // messages stay in the inbox, flagged as trashed
    assert_eq!(mdir.count_new(), 1);
    assert_eq!(mdir.count_cur(), 3);
    let trashed = mdir
        .list_cur()
        .map(Result::unwrap)
        .filter(|entry| entry.is_trashed())
        .count();
    assert_eq!(trashed, 2);
    assert!(!dir.path().join(".Trash").exists());

    // trashed messages are not listed anymore
    assert_eq!(store.list_messages().unwrap().len(), 2);

    let outcome = delete_matching(&mut store, &promo_session()).unwrap();
    assert_eq!(outcome.deleted, 0);
}

#[test_log::test]
fn delete_by_date_range() {
    let (dir, _mdir) = setup();
    let config = MaildirConfig::new(dir.path());
    let mut store = MaildirStore::new(&config, Default::default()).unwrap();

    let mut session = ConditionSession::new();
    session.set_start_date("03/15/2023").unwrap();
    session.set_end_date("03/17/2023").unwrap();
    session.verify().unwrap();

    let outcome = delete_matching(&mut store, &session).unwrap();

    assert_eq!(
        outcome,
        DeletionOutcome {
            deleted: 2,
            skipped: 1
        }
    );
}

#[test_log::test]
fn open_missing_inbox() {
    let dir = tempdir().unwrap();
    let config = MaildirConfig::new(dir.path().join("missing"));
    let style = DeleteMessageStyle::Folder;

    let err = MaildirStore::new(&config, style).err();

    assert!(matches!(err, Some(Error::FindInboxError(_))));
}
