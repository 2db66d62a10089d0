//! CLI argument definitions for `academic-helper`.

use academic_core::{DuePreset, DEFAULT_DATA_FILE};
use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI log level argument.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Track courses, deadlines and grades.
#[derive(Debug, Parser)]
#[command(name = "academic-helper", version)]
pub struct Cli {
    /// Path of the JSON data file.
    #[arg(long, global = true, value_name = "PATH", default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,

    /// Log level used when `--log-dir` is set.
    #[arg(long, global = true, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Absolute directory for rolling log files; logging is off without it.
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List courses.
    Courses,
    /// Add a course, reusing an existing one with the same name.
    CourseAdd {
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// Add an assignment.
    #[command(group(ArgGroup::new("due").required(true).args(["due_date", "preset"])))]
    Add {
        /// Course id or name.
        #[arg(long, value_name = "NAME|ID")]
        course: String,
        #[arg(long)]
        title: String,
        /// Due date as YYYY-MM-DD.
        #[arg(long = "due", value_name = "YYYY-MM-DD")]
        due_date: Option<String>,
        /// Quick due date: tomorrow, 3d, 1w or 2w.
        #[arg(long, value_parser = parse_preset)]
        preset: Option<DuePreset>,
        /// Not Started (default), In Progress or Completed.
        #[arg(long)]
        status: Option<String>,
        /// Percentage between 0 and 100.
        #[arg(long)]
        score: Option<String>,
        /// Validate and show the assignment without saving it.
        #[arg(long)]
        dry_run: bool,
    },
    /// List deadlines sorted by due date.
    Deadlines {
        /// Include completed assignments.
        #[arg(long)]
        all: bool,
    },
    /// Show one assignment.
    Show {
        #[arg(value_name = "ID")]
        id: u32,
    },
    /// Show the current grade of a course.
    Grade {
        #[arg(value_name = "NAME|ID")]
        course: String,
    },
}

fn parse_preset(value: &str) -> Result<DuePreset, String> {
    value.parse()
}
