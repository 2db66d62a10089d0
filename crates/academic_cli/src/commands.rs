//! Subcommand handlers. Each one loads state, calls the core and prints.

use crate::args::Command;
use crate::render;
use academic_core::{
    bootstrap, current_grade, find_course, get_assignment, list_courses, upcoming,
    AssignmentCatalog, Course, CourseRegistry, JsonFileGateway, NewAssignment, RecordStore,
};
use std::error::Error;
use std::path::Path;
use std::time::Instant;

pub type CommandResult = Result<(), Box<dyn Error>>;

/// Dispatches one subcommand against the data file at `data_file`.
pub fn run(command: Command, data_file: &Path) -> CommandResult {
    let gateway = JsonFileGateway::new(data_file);
    let mut store = bootstrap(&gateway)?;

    match command {
        Command::Courses => {
            render::courses(list_courses(&store));
            Ok(())
        }
        Command::CourseAdd { name } => {
            let resolution = CourseRegistry::new(&gateway).resolve_or_create(&mut store, &name)?;
            render::course_resolution(&resolution);
            Ok(())
        }
        Command::Add {
            course,
            title,
            due_date,
            preset,
            status,
            score,
            dry_run,
        } => {
            let course_id = resolve_course(&store, &course)?.id;
            let due_date = match preset {
                Some(preset) => preset.resolve_today().format("%Y-%m-%d").to_string(),
                None => due_date.unwrap_or_default(),
            };
            let input = NewAssignment {
                course_id,
                title,
                due_date,
                status,
                score,
            };

            let catalog = AssignmentCatalog::new(&gateway);
            let draft = catalog.preview(&store, &input)?;
            render::draft(&draft);
            if dry_run {
                println!("Dry run. Nothing was saved.");
                return Ok(());
            }

            let created = catalog.commit(&mut store, draft)?;
            render::created(&store, &created);
            Ok(())
        }
        Command::Deadlines { all } => {
            let started_at = Instant::now();
            let rows = upcoming(&store, !all);
            render::deadlines(&rows, started_at.elapsed());
            Ok(())
        }
        Command::Show { id } => {
            let assignment =
                get_assignment(&store, id).ok_or_else(|| format!("assignment not found: {id}"))?;
            render::details(&store, assignment);
            Ok(())
        }
        Command::Grade { course } => {
            let course = resolve_course(&store, &course)?;
            let grade = current_grade(&store, course.id)?;
            render::grade(course, &grade);
            Ok(())
        }
    }
}

/// Resolves a course argument by id first, then by normalized name.
fn resolve_course<'a>(store: &'a RecordStore, key: &str) -> Result<&'a Course, String> {
    if let Some(course) = key
        .trim()
        .parse::<u32>()
        .ok()
        .and_then(|id| store.get_course(id))
    {
        return Ok(course);
    }
    find_course(store, key).ok_or_else(|| format!("course not found: `{}`", key.trim()))
}
