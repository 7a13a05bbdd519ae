mod common;
use common::{rat, temp_home, write_remote_config};
use predicates::str::contains;
use rattendance::config::Config;
use rattendance::models::Profile;
use std::fs;
use std::path::Path;

fn run_ok(home: &Path, args: &[&str]) -> String {
    let out = rat()
        .arg("--home")
        .arg(home)
        .args(args)
        .assert()
        .success();
    String::from_utf8_lossy(&out.get_output().stdout).to_string()
}

/// Class CE / 1st Year with one absent student, submitted.
fn submit_ce(home: &Path) {
    run_ok(home, &["class", "--department", "CE", "--year", "1st Year"]);
    run_ok(
        home,
        &["student", "set", "1", "--roll", "101", "--name", "Asha", "--status", "absent"],
    );
    run_ok(home, &["student", "set", "2", "--roll", "102", "--name", "Ravi"]);
    run_ok(home, &["student", "del", "3"]);

    rat()
        .arg("--home")
        .arg(home)
        .arg("submit")
        .assert()
        .success()
        .stdout(contains("Attendance submitted successfully!"))
        .stdout(contains("ce_1st_year_"));
}

#[test]
fn test_cli_init_creates_config() {
    let home = temp_home("cli_init");

    rat()
        .arg("--home")
        .arg(&home)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("demo mode"));

    assert!(home.join("rattendance.conf").exists());
    assert!(!home.join("documents.sqlite").exists());
}

#[test]
fn test_cli_draft_shows_demo_banner_and_template() {
    let home = temp_home("cli_draft");

    let out = run_ok(&home, &["draft"]);
    assert!(out.contains("Demo Mode"));
    assert!(out.contains("Student Attendance (3)"));
    assert!(out.contains("your class"));
}

#[test]
fn test_cli_student_edits_are_kept_between_runs() {
    let home = temp_home("cli_students");

    run_ok(&home, &["student", "add", "--roll", "7", "--name", "Zoya", "--status", "m"]);
    let out = run_ok(&home, &["student", "list"]);
    assert!(out.contains("Student Attendance (4)"));
    assert!(out.contains("Zoya"));
    assert!(out.contains("MEDICAL"));

    rat()
        .arg("--home")
        .arg(&home)
        .args(["student", "set", "1", "--status", "late"])
        .assert()
        .failure()
        .stderr(contains("Invalid attendance status"));

    rat()
        .arg("--home")
        .arg(&home)
        .args(["student", "del", "9"])
        .assert()
        .failure()
        .stderr(contains("No student at row 9"));
}

#[test]
fn test_cli_date_rejects_bad_input() {
    let home = temp_home("cli_date");

    run_ok(&home, &["date", "2026-01-15"]);
    assert!(run_ok(&home, &["draft"]).contains("2026-01-15"));

    rat()
        .arg("--home")
        .arg(&home)
        .args(["date", "15/01/2026"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_cli_submit_requires_department() {
    let home = temp_home("cli_submit_invalid");

    rat()
        .arg("--home")
        .arg(&home)
        .arg("submit")
        .assert()
        .failure()
        .stderr(contains("Please select a department before submitting."));
}

#[test]
fn test_cli_submit_then_report() {
    let home = temp_home("cli_submit_report");

    rat()
        .arg("--home")
        .arg(&home)
        .arg("report")
        .assert()
        .success()
        .stdout(contains("No attendance records submitted yet."));

    submit_ce(&home);

    let draft = run_ok(&home, &["draft"]);
    assert!(draft.contains("Student Attendance (3)"));
    assert!(!draft.contains("Asha"));

    let report = run_ok(&home, &["report"]);
    assert!(report.contains("Records: 1"));
    assert!(report.contains("Asha"));
    assert!(report.contains("CE 1st Year"));

    let history = run_ok(&home, &["report", "--student", "101"]);
    assert!(history.contains("History of 101"));
    assert!(history.contains("ABSENT"));
}

#[test]
fn test_cli_admin_gate() {
    let home = temp_home("cli_admin");

    rat()
        .arg("--home")
        .arg(&home)
        .args(["admin", "--password", "wrong"])
        .assert()
        .failure()
        .stderr(contains("Incorrect password"));

    submit_ce(&home);

    let out = run_ok(&home, &["admin", "--password", "admin2025"]);
    assert!(out.contains("Admin Dashboard"));
    assert!(out.contains("CE       1 record(s)"));

    let out = run_ok(&home, &["admin", "--password", "admin2025", "--department", "EE"]);
    assert!(out.contains("No records for department 'EE'."));

    let out = run_ok(&home, &["admin", "--password", "admin2025", "--student", "102"]);
    assert!(out.contains("History of 102"));
}

#[test]
fn test_cli_admin_selections_conflict() {
    let home = temp_home("cli_admin_conflict");

    rat()
        .arg("--home")
        .arg(&home)
        .args(["admin", "--password", "admin2025", "--department", "CE", "--student", "1"])
        .assert()
        .failure()
        .stderr(contains("cannot be used with"));

    rat()
        .arg("--home")
        .arg(&home)
        .args(["admin", "--password", "admin2025", "--class", "SY-CO", "--department", "CE"])
        .assert()
        .failure()
        .stderr(contains("cannot be used with"));
}

#[test]
fn test_cli_admin_class_profile_overview() {
    let home = temp_home("cli_admin_class");
    let cfg = Config {
        profile: Profile::Class,
        ..Config::default()
    };
    cfg.save(&home).unwrap();

    run_ok(&home, &["class", "--class-name", "SY-CO"]);
    run_ok(&home, &["submit"]);

    let out = run_ok(&home, &["admin", "--password", "admin2025"]);
    assert!(out.contains("SY-CO    1 record(s)"));
    assert!(!out.contains("CE       0 record(s)"));

    let out = run_ok(&home, &["admin", "--password", "admin2025", "--class", "SY-CO"]);
    assert!(out.contains("Class SY-CO"));
    assert!(!out.contains("No records for class"));

    let out = run_ok(&home, &["admin", "--password", "admin2025", "--class", "TY-CO"]);
    assert!(out.contains("No records for class 'TY-CO'."));
}

#[test]
fn test_cli_calling_records() {
    let home = temp_home("cli_calls");

    run_ok(
        &home,
        &[
            "call", "add", "--roll", "101", "--contact", "98200 00000", "--reason", "medical",
            "--notes", "Fever",
        ],
    );

    rat()
        .arg("--home")
        .arg(&home)
        .args(["call", "add", "--roll", "101", "--contact", "x", "--reason", "holiday"])
        .assert()
        .failure()
        .stderr(contains("Invalid absence reason"));

    let out = run_ok(&home, &["call", "list"]);
    assert!(out.contains("Roll 101"));
    assert!(out.contains("Medical"));
    assert!(out.contains("Fever"));

    run_ok(&home, &["call", "del", "1"]);
    assert!(run_ok(&home, &["call", "list"]).contains("No calling records yet."));
}

#[test]
fn test_cli_export_records_csv() {
    let home = temp_home("cli_export");
    submit_ce(&home);

    let out = home.join("records.csv");
    rat()
        .arg("--home")
        .arg(&home)
        .args(["export", "--records", "--format", "csv", "-o"])
        .arg(&out)
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("101,Asha,absent"));
    assert_eq!(content.lines().count(), 3);
}

#[test]
fn test_cli_token_needs_backend() {
    let home = temp_home("cli_token_demo");

    rat()
        .arg("--home")
        .arg(&home)
        .args(["token", "--issue", "teacher"])
        .assert()
        .failure()
        .stderr(contains("demo mode"));
}

#[test]
fn test_cli_document_store_flow() {
    let home = temp_home("cli_remote");
    write_remote_config(&home, "school-a");

    rat()
        .arg("--home")
        .arg(&home)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Document store"));
    assert!(home.join("documents.sqlite").exists());

    submit_ce(&home);
    assert!(!home.join("demo-attendance-records.json").exists());

    rat()
        .arg("--home")
        .arg(&home)
        .args(["token", "--issue", "teacher-ce"])
        .assert()
        .success()
        .stdout(contains("Token issued for 'teacher-ce'."));

    let log = run_ok(&home, &["log", "--print"]);
    assert!(log.contains("migration_applied"));
    assert!(log.contains("submit"));
    assert!(log.contains("token"));

    let report = run_ok(&home, &["report"]);
    assert!(report.contains("Records: 1"));
}

#[test]
fn test_cli_config_check_and_migrate() {
    let home = temp_home("cli_config");
    fs::write(home.join("rattendance.conf"), "profile: class\n").unwrap();

    rat()
        .arg("--home")
        .arg(&home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing fields"));

    rat()
        .arg("--home")
        .arg(&home)
        .args(["config", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Added missing fields"));

    rat()
        .arg("--home")
        .arg(&home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration is complete."));
}
