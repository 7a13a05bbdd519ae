use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rAttendance
/// CLI application to record daily class attendance
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple attendance CLI: mark daily class attendance, log calls and view reports",
    long_about = None
)]
pub struct Cli {
    /// Override the home directory (config file, local storage, default store)
    #[arg(global = true, long = "home", value_name = "DIR")]
    pub home: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the home directory, the configuration and the document store
    Init,

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Set class information of the current draft
    Class {
        /// Department (department profile)
        #[arg(long)]
        department: Option<String>,

        /// Year, e.g. "1st Year" (department profile)
        #[arg(long)]
        year: Option<String>,

        /// Class name (class profile; overrides department/year as identifier)
        #[arg(long = "class-name")]
        class_name: Option<String>,

        /// Semester (class profile)
        #[arg(long)]
        semester: Option<String>,

        /// Class coordinator name
        #[arg(long = "cc")]
        cc_name: Option<String>,

        /// Total strength of the class (empty string clears it)
        #[arg(long = "total")]
        total_students: Option<String>,
    },

    /// Set the attendance date of the current draft (YYYY-MM-DD or "today")
    Date { date: String },

    /// Edit the student list of the current draft
    Student {
        #[command(subcommand)]
        action: StudentAction,
    },

    /// Show the current draft
    Draft {
        /// Discard the draft and start from a fresh template
        #[arg(long)]
        reset: bool,
    },

    /// Submit the current draft
    Submit,

    /// Export the current draft (backup JSON) or the submitted records
    Export {
        /// Export submitted records instead of the draft
        #[arg(long)]
        records: bool,

        /// Output format for --records
        #[arg(long, value_enum, default_value_t = ExportFormat::Json, requires = "records")]
        format: ExportFormat,

        /// Output file for --records, output directory for the draft backup
        #[arg(long, short = 'o', value_name = "PATH")]
        output: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage calling records of absent students
    Call {
        #[command(subcommand)]
        action: CallAction,
    },

    /// Daily reports & analysis of the submitted records
    Report {
        /// Show the full history of one roll number
        #[arg(long)]
        student: Option<String>,

        /// Keep running and reprint when another process submits
        #[arg(long)]
        watch: bool,
    },

    /// Open the admin dashboard (UI convenience gate, not access control)
    Admin {
        #[arg(long)]
        password: String,

        /// Show the records of one department
        #[arg(long, conflicts_with_all = ["class", "student"])]
        department: Option<String>,

        /// Show the records of one class (class profile)
        #[arg(long, conflicts_with = "student")]
        class: Option<String>,

        /// Show the history of one roll number
        #[arg(long)]
        student: Option<String>,
    },

    /// Manage bootstrap identity tokens of the document store
    Token {
        /// Issue a token for the given user id
        #[arg(long, value_name = "UID")]
        issue: String,
    },

    /// Print the internal log of the document store
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum StudentAction {
    /// Append a student row
    Add {
        #[arg(long)]
        roll: Option<String>,
        #[arg(long)]
        name: Option<String>,
        /// present | absent | leave | medical
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        remarks: Option<String>,
    },

    /// Update a student row (rows are numbered from 1)
    Set {
        row: usize,
        #[arg(long)]
        roll: Option<String>,
        #[arg(long)]
        name: Option<String>,
        /// present | absent | leave | medical
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        remarks: Option<String>,
    },

    /// Remove a student row (rows are numbered from 1)
    Del { row: usize },

    /// List the student rows
    List,
}

#[derive(Subcommand)]
pub enum CallAction {
    /// Add a calling record
    Add {
        #[arg(long)]
        roll: String,
        /// Date of the call (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,
        /// Phone or email
        #[arg(long)]
        contact: String,
        /// Medical | Leave | Family Emergency | Other | Not Specified
        #[arg(long)]
        reason: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },

    /// List calling records
    List,

    /// Remove a calling record (rows are numbered from 1)
    Del { row: usize },
}
