//! Plain-text rendering of core results.

use academic_core::{
    format_percent, Assignment, AssignmentDraft, Course, CourseGrade, CourseResolution,
    DeadlineEntry, DueDate, RecordStore,
};
use std::time::Duration;

const RULE_WIDTH: usize = 46;

fn rule(ch: char) -> String {
    ch.to_string().repeat(RULE_WIDTH)
}

fn header(title: &str) {
    println!("{}", rule('='));
    println!("{title}");
    println!("{}", rule('='));
}

fn score_text(score: Option<f64>, missing: &str) -> String {
    score.map_or_else(|| missing.to_string(), format_percent)
}

pub fn courses(courses: &[Course]) {
    header("Courses");
    if courses.is_empty() {
        println!("No courses yet.");
    }
    for course in courses {
        println!("{}) {}", course.id, course.name);
    }
}

pub fn course_resolution(resolution: &CourseResolution) {
    if resolution.created {
        println!("✓ Created course #{}: {}", resolution.course.id, resolution.course.name);
    } else {
        println!(
            "That course already exists: #{} {}",
            resolution.course.id, resolution.course.name
        );
    }
}

pub fn draft(draft: &AssignmentDraft) {
    let due = DueDate::from(draft.due_date);
    header("Confirm Save");
    println!("- Course: {}", draft.course.name);
    println!("- Title: {}", draft.title);
    println!("- Due: {} ({due})", due.format_long());
    println!("- Status: {}", draft.status);
    println!("- Score: {}", score_text(draft.score, "(none)"));
    println!();
}

pub fn created(store: &RecordStore, assignment: &Assignment) {
    println!("{}", rule('-'));
    println!("Assignment Added Successfully");
    println!("{}", rule('-'));
    println!("ID:     {}", assignment.id);
    println!("Course: {}", store.course_label(assignment.course_id));
    println!("Title:  {}", assignment.title);
    println!("Due:    {}", assignment.due_date.format_long());
}

pub fn deadlines(rows: &[DeadlineEntry], elapsed: Duration) {
    header("Upcoming Deadlines");
    if rows.is_empty() {
        println!("No upcoming incomplete assignments found.");
        return;
    }

    println!("Assignments (sorted by due date):");
    println!("{}", rule('-'));
    for (index, row) in rows.iter().enumerate() {
        println!("{}) {}", index + 1, row.course_label);
        println!("   [#{}] {}", row.assignment.id, row.assignment.title);
        println!(
            "   Due: {}   Status: {}",
            row.assignment.due_date, row.assignment.status
        );
        println!("{}", rule('-'));
    }
    println!("(Loaded in ~{} ms)", elapsed.as_millis());
}

pub fn details(store: &RecordStore, assignment: &Assignment) {
    header("Assignment Details");
    println!("Course: {}", store.course_label(assignment.course_id));
    println!("Title:  {}", assignment.title);
    println!(
        "Due:    {} ({})",
        assignment.due_date.format_long(),
        assignment.due_date
    );
    println!("Status: {}", assignment.status);
    println!("Score:  {}", score_text(assignment.score, "(none recorded)"));
}

pub fn grade(course: &Course, grade: &CourseGrade) {
    header(&format!("Current Grade for: {}", course.name));
    match grade {
        CourseGrade::NoData => {
            println!("No scores recorded for this course yet.");
            println!("Tip: Add an assignment and enter a score to calculate a grade.");
        }
        CourseGrade::Graded { entries, mean } => {
            println!("Scores included:");
            for entry in entries {
                println!("- {}: {}", entry.title, format_percent(entry.score));
            }
            println!("{}", rule('-'));
            println!("Current Grade: {}", format_percent(*mean));
        }
    }
}
