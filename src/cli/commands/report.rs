use crate::cli::parser::Commands;
use crate::core::aggregate::{
    StatusCounts, StudentHistory, by_date_desc, counts_by_status, per_student, student_history,
    tally,
};
use crate::core::clock::SystemClock;
use crate::core::session::Session;
use crate::environment::Environment;
use crate::errors::AppResult;
use crate::models::{AttendanceRecord, AttendanceStatus, Profile};
use crate::ui::messages::{demo_banner, header, info, warning};
use crate::utils::colors::{colorize_optional, colorize_status};
use crate::utils::table::{Column, Table};
use std::thread;
use std::time::Duration;

pub(crate) const NO_RECORDS: &str = "No attendance records submitted yet.";

const WATCH_INTERVAL: Duration = Duration::from_secs(2);

pub(crate) fn print_counts(c: &StatusCounts) {
    let parts: Vec<String> = AttendanceStatus::ALL
        .iter()
        .map(|s| format!("{}: {}", colorize_status(*s), c.get(*s)))
        .collect();
    println!("{}  (total {})", parts.join("  "), c.total());
}

/// Student-wise table: one row per roll number with its counts.
pub(crate) fn print_student_table(students: &[StudentHistory]) {
    let mut table = Table::new(vec![
        Column::new("Roll No", 8),
        Column::new("Name", 20),
        Column::new("P", 3),
        Column::new("A", 3),
        Column::new("L", 3),
        Column::new("M", 3),
        Column::new("Days", 4),
    ]);

    for s in students {
        let c = s.counts();
        table.add_row(vec![
            colorize_optional(&s.roll_no),
            colorize_optional(&s.name),
            c.present.to_string(),
            c.absent.to_string(),
            c.leave.to_string(),
            c.medical.to_string(),
            c.total().to_string(),
        ]);
    }

    print!("{}", table.render());
}

pub(crate) fn print_history(h: &StudentHistory) {
    header(format!("History of {} ({})", h.roll_no, colorize_optional(&h.name)));

    let mut table = Table::new(vec![
        Column::new("Date", 10),
        Column::new("Status", 8),
        Column::new("Remarks", 10),
    ]);
    for e in &h.history {
        table.add_row(vec![
            e.date.format("%Y-%m-%d").to_string(),
            colorize_status(e.status),
            colorize_optional(&e.remarks),
        ]);
    }
    print!("{}", table.render());
    print_counts(&h.counts());
}

/// One block per record, newest date first.
pub(crate) fn print_daily(records: &[&AttendanceRecord], profile: Profile) {
    for r in records {
        let c = tally(&r.students);
        println!(
            "{} · {} · P {} / A {} / L {} / M {} · by {}",
            r.date.format("%Y-%m-%d"),
            r.class_info.display_name(profile),
            c.present,
            c.absent,
            c.leave,
            c.medical,
            colorize_optional(&r.submitted_by)
        );
    }
}

fn print_report(records: &[AttendanceRecord], env: &Environment, student: Option<&str>) {
    if records.is_empty() {
        info(NO_RECORDS);
        return;
    }

    if let Some(roll) = student {
        match student_history(records, roll) {
            Some(h) => print_history(&h),
            None => warning(format!("No attendance found for roll number '{roll}'.")),
        }
        return;
    }

    header("Summary");
    println!("Records: {}", records.len());
    print_counts(&counts_by_status(records));
    println!();

    header("Student-wise");
    print_student_table(&per_student(records));
    println!();

    header("Daily Reports");
    print_daily(&by_date_desc(records), env.profile);
}

/// Handle the `report` command.
pub fn handle(cmd: &Commands, env: &Environment) -> AppResult<()> {
    if let Commands::Report { student, watch } = cmd {
        if env.is_demo() {
            demo_banner();
        }

        let session = Session::open(env, SystemClock)?;
        print_report(&session.records(), env, student.as_deref());

        if !*watch {
            return Ok(());
        }
        if env.is_demo() {
            warning("Live updates need a configured backend; nothing to watch in demo mode.");
            return Ok(());
        }

        info("Watching for new submissions (Ctrl+C to stop)...");
        loop {
            thread::sleep(WATCH_INTERVAL);
            if session.sync()? {
                println!();
                print_report(&session.records(), env, student.as_deref());
            }
        }
    }

    Ok(())
}
