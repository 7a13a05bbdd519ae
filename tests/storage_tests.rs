mod common;
use common::{date, temp_home};
use rattendance::core::calling::{CALLS_KEY, CallingLog, NewCall};
use rattendance::errors::AppError;
use rattendance::models::{AbsenceReason, AttendanceStatus, Draft};
use rattendance::storage::{DRAFT_KEY, DraftStore, LocalStorage};

#[test]
fn test_local_storage_get_set_remove() {
    let home = temp_home("storage_basic");
    let storage = LocalStorage::new(home.join("nested"));

    assert_eq!(storage.get_item("k").unwrap(), None);
    storage.set_item("k", "value").unwrap();
    assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("value"));

    storage.remove_item("k").unwrap();
    storage.remove_item("k").unwrap();
    assert_eq!(storage.get_item("k").unwrap(), None);
}

#[test]
fn test_draft_round_trip() {
    let home = temp_home("draft_round_trip");
    let store = DraftStore::new(LocalStorage::new(&home));
    assert!(store.load().is_none());

    let mut draft = Draft::fresh(date("2026-03-02"));
    draft.class_info.department = "EE".into();
    draft.class_info.total_students = Some(58);
    draft.students[1].status = AttendanceStatus::Medical;
    store.save(&draft).unwrap();

    assert_eq!(store.load(), Some(draft));

    store.clear().unwrap();
    assert!(store.load().is_none());
}

#[test]
fn test_corrupt_draft_is_ignored() {
    let home = temp_home("draft_corrupt");
    let storage = LocalStorage::new(&home);
    storage.set_item(DRAFT_KEY, "not json at all").unwrap();

    assert!(DraftStore::new(storage).load().is_none());
}

#[test]
fn test_partial_draft_fills_defaults() {
    let home = temp_home("draft_partial");
    let storage = LocalStorage::new(&home);
    storage
        .set_item(
            DRAFT_KEY,
            r#"{"classInfo":{"department":"IF"},"date":"2026-01-15","students":[{"rollNo":"12"}]}"#,
        )
        .unwrap();

    let draft = DraftStore::new(storage).load().expect("draft");
    assert_eq!(draft.class_info.department, "IF");
    assert_eq!(draft.class_info.cc_name, "");
    assert_eq!(draft.date, date("2026-01-15"));
    assert_eq!(draft.students.len(), 1);
    assert_eq!(draft.students[0].status, AttendanceStatus::Present);
}

#[test]
fn test_draft_uses_camel_case_keys() {
    let home = temp_home("draft_keys");
    let storage = LocalStorage::new(&home);
    DraftStore::new(storage.clone())
        .save(&Draft::fresh(date("2026-03-02")))
        .unwrap();

    let raw = storage.get_item(DRAFT_KEY).unwrap().expect("stored");
    assert!(raw.contains("\"classInfo\""));
    assert!(raw.contains("\"rollNo\""));
    assert!(raw.contains("\"2026-03-02\""));
}

// ------------------------------------------------
// Calling records
// ------------------------------------------------

fn call(roll: &str, contact: &str) -> NewCall {
    NewCall {
        student_roll_no: roll.into(),
        date: Some(date("2026-03-02")),
        contact: contact.into(),
        ..NewCall::default()
    }
}

#[test]
fn test_calling_log_add_list_remove() {
    let home = temp_home("calls_basic");
    let storage = LocalStorage::new(&home);

    let mut log = CallingLog::load(storage.clone());
    let first = log
        .add(NewCall {
            reason: AbsenceReason::Medical,
            notes: "Fever, back on Monday".into(),
            ..call("12", "98200 00000")
        })
        .unwrap();
    assert_eq!(first.id, 1);
    assert_eq!(first.reason, AbsenceReason::Medical);

    let second = log.add(call(" 14 ", "parent@example.com")).unwrap();
    assert_eq!(second.id, 2);
    assert_eq!(second.student_roll_no, "14");
    assert_eq!(second.reason, AbsenceReason::NotSpecified);

    let reloaded = CallingLog::load(storage.clone());
    assert_eq!(reloaded.list().len(), 2);

    let mut log = reloaded;
    let removed = log.remove(0).unwrap();
    assert_eq!(removed.student_roll_no, "12");
    assert!(matches!(log.remove(5), Err(AppError::InvalidIndex(6))));
    assert_eq!(CallingLog::load(storage).list().len(), 1);
}

#[test]
fn test_calling_record_requires_roll_date_and_contact() {
    let home = temp_home("calls_validation");
    let mut log = CallingLog::load(LocalStorage::new(&home));

    assert!(matches!(
        log.add(call("", "123")),
        Err(AppError::ValidationFailed(_))
    ));
    assert!(matches!(
        log.add(call("12", "  ")),
        Err(AppError::ValidationFailed(_))
    ));
    assert!(matches!(
        log.add(NewCall {
            date: None,
            ..call("12", "123")
        }),
        Err(AppError::ValidationFailed(_))
    ));
    assert!(log.list().is_empty());
}

#[test]
fn test_corrupt_calling_records_start_empty() {
    let home = temp_home("calls_corrupt");
    let storage = LocalStorage::new(&home);
    storage.set_item(CALLS_KEY, "[{").unwrap();

    assert!(CallingLog::load(storage).list().is_empty());
}

#[test]
fn test_absence_reason_parsing() {
    assert_eq!(
        AbsenceReason::from_input("family emergency"),
        Some(AbsenceReason::FamilyEmergency)
    );
    assert_eq!(AbsenceReason::from_input("LEAVE"), Some(AbsenceReason::Leave));
    assert_eq!(
        AbsenceReason::from_input(""),
        Some(AbsenceReason::NotSpecified)
    );
    assert_eq!(AbsenceReason::from_input("holiday"), None);
    assert_eq!(
        serde_json::to_string(&AbsenceReason::FamilyEmergency).unwrap(),
        "\"Family Emergency\""
    );
}

#[test]
fn test_calling_ids_saturate() {
    let home = temp_home("calls_id_saturate");
    let storage = LocalStorage::new(&home);
    storage
        .set_item(
            CALLS_KEY,
            &format!(
                r#"[{{"id":{},"studentRollNo":"1","date":"2026-03-01","contact":"x"}}]"#,
                u64::MAX
            ),
        )
        .unwrap();

    let mut log = CallingLog::load(storage);
    assert_eq!(log.list().len(), 1);
    assert_eq!(log.add(call("2", "y")).unwrap().id, u64::MAX);
}
