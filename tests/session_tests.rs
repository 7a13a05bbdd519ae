mod common;
use common::{ManualClock, temp_home, write_remote_config};
use rattendance::config::Config;
use rattendance::core::session::Session;
use rattendance::environment::{BackendKind, Environment};
use rattendance::identity::{DEMO_USER_ID, UserIdentity};
use rattendance::models::ClassField;

#[test]
fn test_demo_session_signs_in_as_demo_user() {
    let home = temp_home("session_demo");
    let env = Environment::from_config(&Config::default(), &home);
    let session = Session::open(&env, ManualClock::at(2026, 3, 2, 9)).unwrap();

    assert_eq!(session.repository().backend(), BackendKind::Local);
    assert_eq!(session.form.identity().map(|i| i.uid.as_str()), Some(DEMO_USER_ID));
    assert!(session.records().is_empty());
}

#[test]
fn test_session_cache_follows_submits() {
    let home = temp_home("session_cache");
    let cfg = write_remote_config(&home, "school-a");
    let env = Environment::from_config(&cfg, &home);

    let mut session = Session::open(&env, ManualClock::at(2026, 3, 2, 9)).unwrap();
    let uid = session.form.identity().expect("signed in").uid.clone();
    assert_ne!(uid, DEMO_USER_ID);

    session
        .form
        .update_class_info(ClassField::Department, "EE")
        .unwrap();
    let record = session.submit().unwrap().expect("submitted");
    assert_eq!(record.submitted_by, uid);
    assert_eq!(session.records(), vec![record]);

    session.close();
}

#[test]
fn test_identity_update_reaches_form() {
    let home = temp_home("session_identity");
    let env = Environment::from_config(&Config::default(), &home);
    let mut session = Session::open(&env, ManualClock::at(2026, 3, 2, 9)).unwrap();

    session
        .form
        .update_class_info(ClassField::Department, "IF")
        .unwrap();
    session.update_identity(UserIdentity {
        uid: "teacher-if".into(),
        is_anonymous: false,
    });

    assert_eq!(session.identity.current().map(|i| i.uid.as_str()), Some("teacher-if"));
    assert_eq!(session.form.draft().class_info.department, "IF");
    let record = session.submit().unwrap().expect("submitted");
    assert_eq!(record.submitted_by, "teacher-if");
}

#[test]
fn test_session_sync_sees_other_session_submits() {
    let home = temp_home("session_sync");
    let cfg = write_remote_config(&home, "school-a");
    let env = Environment::from_config(&cfg, &home);

    let watcher = Session::open(&env, ManualClock::at(2026, 3, 2, 9)).unwrap();
    let mut writer = Session::open(&env, ManualClock::at(2026, 3, 2, 9)).unwrap();
    watcher.sync().unwrap();

    writer
        .form
        .update_class_info(ClassField::Department, "CE")
        .unwrap();
    let record = writer.submit().unwrap().expect("submitted");

    assert!(watcher.records().is_empty());
    assert!(watcher.sync().unwrap());
    assert_eq!(watcher.records(), vec![record]);
    assert!(!watcher.sync().unwrap());
}

#[test]
fn test_demo_session_has_nothing_to_sync() {
    let home = temp_home("session_sync_demo");
    let env = Environment::from_config(&Config::default(), &home);
    let session = Session::open(&env, ManualClock::at(2026, 3, 2, 9)).unwrap();

    assert!(!session.sync().unwrap());
}
