use super::report::{NO_RECORDS, print_daily, print_history, print_student_table};
use crate::cli::parser::Commands;
use crate::core::aggregate::{
    class_overview, department_overview, per_class, per_department, per_student, student_history,
};
use crate::core::clock::SystemClock;
use crate::core::session::Session;
use crate::core::view::{Selection, ViewRouter};
use crate::environment::Environment;
use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceRecord, Profile};
use crate::ui::messages::{demo_banner, header, info, warning};

fn print_overview(records: &[AttendanceRecord], env: &Environment) {
    header("Admin Dashboard");
    println!("Records: {}", records.len());
    let overview = match env.profile {
        Profile::Department => department_overview(records, &env.departments),
        Profile::Class => class_overview(records),
    };
    for (name, count) in overview {
        println!("  {name:<8} {count} record(s)");
    }
    println!();

    header("Students");
    print_student_table(&per_student(records));
}

/// Handle the `admin` command.
pub fn handle(cmd: &Commands, env: &Environment) -> AppResult<()> {
    if let Commands::Admin {
        password,
        department,
        class,
        student,
    } = cmd
    {
        let mut router = ViewRouter::new(&env.admin_password);
        router.request_admin();
        if !router.enter_password(password) {
            return Err(AppError::AccessDenied);
        }

        if let Some(d) = department {
            router.toggle_department(d);
        }
        if let Some(c) = class {
            router.toggle_class(c);
        }
        if let Some(s) = student {
            router.toggle_student(s);
        }

        if env.is_demo() {
            demo_banner();
        }

        let session = Session::open(env, SystemClock)?;
        let records = session.records();

        if records.is_empty() {
            info(NO_RECORDS);
            return Ok(());
        }

        match router.selection() {
            None => print_overview(&records, env),
            Some(Selection::Department(d)) => {
                let selected = per_department(&records, d);
                header(format!("Department {d}"));
                if selected.is_empty() {
                    info(format!("No records for department '{d}'."));
                } else {
                    print_daily(&selected, env.profile);
                }
            }
            Some(Selection::Class(c)) => {
                let selected = per_class(&records, c);
                header(format!("Class {c}"));
                if selected.is_empty() {
                    info(format!("No records for class '{c}'."));
                } else {
                    print_daily(&selected, env.profile);
                }
            }
            Some(Selection::Student(roll)) => match student_history(&records, roll) {
                Some(h) => print_history(&h),
                None => warning(format!("No attendance found for roll number '{roll}'.")),
            },
        }
    }

    Ok(())
}
