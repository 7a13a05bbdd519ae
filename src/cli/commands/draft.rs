use super::open_form;
use crate::cli::parser::Commands;
use crate::core::aggregate::tally;
use crate::environment::Environment;
use crate::errors::AppResult;
use crate::models::{Draft, Profile};
use crate::ui::messages::{demo_banner, header, success};
use crate::utils::colors::{colorize_optional, colorize_status};
use crate::utils::table::{Column, Table};

/// Student rows of a draft as a numbered table.
pub(crate) fn print_students(draft: &Draft) {
    println!("Student Attendance ({})", draft.students.len());

    let mut table = Table::new(vec![
        Column::new("#", 3),
        Column::new("Roll No", 8),
        Column::new("Name", 20),
        Column::new("Status", 8),
        Column::new("Remarks", 10),
    ]);

    for (i, s) in draft.students.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            colorize_optional(&s.roll_no),
            colorize_optional(&s.name),
            colorize_status(s.status),
            colorize_optional(&s.remarks),
        ]);
    }

    print!("{}", table.render());
}

fn print_class_info(draft: &Draft, profile: Profile) {
    let ci = &draft.class_info;

    match profile {
        Profile::Department => {
            println!("Department        : {}", colorize_optional(&ci.department));
            println!("Year              : {}", colorize_optional(&ci.year));
        }
        Profile::Class => {
            println!("Class name        : {}", colorize_optional(&ci.class_name));
            println!("Semester          : {}", colorize_optional(&ci.semester));
        }
    }
    println!("Class Coordinator : {}", colorize_optional(&ci.cc_name));
    println!(
        "Total Strength    : {}",
        colorize_optional(&ci.total_students.map(|t| t.to_string()).unwrap_or_default())
    );
    println!("Attendance Date   : {}", draft.date.format("%Y-%m-%d"));
}

/// Entry view: class information, student rows and the draft's tally.
pub(crate) fn print_entry_view(draft: &Draft, profile: Profile) {
    header("Class Information");
    print_class_info(draft, profile);
    println!();

    header("Mark Attendance");
    print_students(draft);

    let c = tally(&draft.students);
    println!(
        "\nPresent: {}  Absent: {}  Leave: {}  Medical: {}",
        c.present, c.absent, c.leave, c.medical
    );
    println!(
        "Ready to submit the attendance record for {} on {}.",
        draft.class_info.display_name(profile),
        draft.date.format("%Y-%m-%d")
    );
}

/// Handle the `draft` command.
pub fn handle(cmd: &Commands, env: &Environment) -> AppResult<()> {
    if let Commands::Draft { reset } = cmd {
        if env.is_demo() {
            demo_banner();
        }

        let mut form = open_form(env);
        if *reset {
            form.reset()?;
            success("Draft reset to a fresh template.");
        }

        print_entry_view(form.draft(), env.profile);
    }

    Ok(())
}
