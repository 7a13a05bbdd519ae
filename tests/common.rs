#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use rattendance::config::{BackendConfig, Config};
use rattendance::core::clock::Clock;
use rattendance::models::{AttendanceRecord, AttendanceStatus, ClassInfo, StudentEntry};
use std::cell::Cell;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

pub fn rat() -> Command {
    cargo_bin_cmd!("rattendance")
}

/// Fresh, empty home directory inside the system temp dir
pub fn temp_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp home");
    path
}

/// Write a configuration selecting the shared document store inside `home`
pub fn write_remote_config(home: &Path, app_id: &str) -> Config {
    let cfg = Config {
        backend: BackendConfig {
            api_key: "test-key".into(),
            project_id: "test-project".into(),
            database: String::new(),
        },
        app_id: app_id.into(),
        ..Config::default()
    };
    cfg.save(home).expect("save config");
    cfg
}

/// Clock under test control; clones share the same instant.
#[derive(Clone)]
pub struct ManualClock {
    now: Rc<Cell<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn at(y: i32, m: u32, d: u32, h: u32) -> Self {
        Self {
            now: Rc::new(Cell::new(Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap())),
        }
    }

    pub fn advance_secs(&self, secs: i64) {
        self.now.set(self.now.get() + Duration::seconds(secs));
    }

    pub fn advance_days(&self, days: i64) {
        self.now.set(self.now.get() + Duration::days(days));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }

    fn today(&self) -> NaiveDate {
        self.now.get().date_naive()
    }
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn student(roll: &str, name: &str, status: AttendanceStatus) -> StudentEntry {
    StudentEntry {
        id: 0,
        roll_no: roll.into(),
        name: name.into(),
        status,
        remarks: String::new(),
    }
}

/// Record of `department` on `day` with the given students.
pub fn record(department: &str, day: &str, students: Vec<StudentEntry>) -> AttendanceRecord {
    let date = date(day);
    AttendanceRecord {
        id: rattendance::models::natural_key(&format!("{department} 1st Year"), date),
        class_info: ClassInfo {
            department: department.into(),
            year: "1st Year".into(),
            ..ClassInfo::default()
        },
        date,
        students,
        submitted_at: Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap(),
        submitted_by: "tester".into(),
    }
}
