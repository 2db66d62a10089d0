use academic_core::{
    list_sorted, upcoming, Assignment, AssignmentCatalog, AssignmentStatus, Course, DueDate,
    MemoryGateway, NewAssignment, RecordStore, ServiceError, ValidationError,
};
use chrono::NaiveDate;

fn store_with_courses() -> RecordStore {
    let mut store = RecordStore::new();
    store.append_course(Course::new(1, "CS 361").unwrap());
    store.append_course(Course::new(2, "MTH 265").unwrap());
    store
}

fn new_assignment(course_id: u32, title: &str, due: &str) -> NewAssignment {
    NewAssignment {
        course_id,
        title: title.to_string(),
        due_date: due.to_string(),
        status: None,
        score: None,
    }
}

fn with_score(score: &str) -> NewAssignment {
    NewAssignment {
        score: Some(score.to_string()),
        ..new_assignment(1, "Quiz", "2025-03-10")
    }
}

#[test]
fn score_bounds_are_inclusive_and_enforced() {
    let gateway = MemoryGateway::new();
    let catalog = AssignmentCatalog::new(&gateway);
    let mut store = store_with_courses();

    for rejected in ["-0.01", "100.01"] {
        let err = catalog.create(&mut store, &with_score(rejected)).unwrap_err();
        assert!(
            matches!(err, ServiceError::Validation(ValidationError::ScoreOutOfRange(_))),
            "unexpected error for {rejected}: {err}"
        );
    }
    assert!(store.assignments().is_empty());

    let low = catalog.create(&mut store, &with_score("0")).unwrap();
    let high = catalog.create(&mut store, &with_score("100")).unwrap();
    assert_eq!(low.score, Some(0.0));
    assert_eq!(high.score, Some(100.0));
}

#[test]
fn non_numeric_score_is_not_a_number() {
    let gateway = MemoryGateway::new();
    let catalog = AssignmentCatalog::new(&gateway);
    let mut store = store_with_courses();

    let err = catalog.create(&mut store, &with_score("ninety")).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::NotANumber(_))
    ));
}

#[test]
fn blank_title_fails_without_mutation() {
    let gateway = MemoryGateway::new();
    let catalog = AssignmentCatalog::new(&gateway);
    let mut store = store_with_courses();
    catalog
        .create(&mut store, &new_assignment(1, "HW1", "2025-03-10"))
        .unwrap();

    for title in ["", "   \t"] {
        let err = catalog
            .create(&mut store, &new_assignment(1, title, "2025-03-11"))
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Validation(ValidationError::MissingTitle)
        ));
    }
    assert_eq!(store.assignments().len(), 1);
    assert_eq!(gateway.save_count(), 1);
}

#[test]
fn unknown_course_is_checked_first() {
    let gateway = MemoryGateway::new();
    let catalog = AssignmentCatalog::new(&gateway);
    let mut store = store_with_courses();

    let err = catalog
        .create(&mut store, &new_assignment(99, "", "garbage"))
        .unwrap_err();
    assert!(matches!(err, ServiceError::UnknownCourse(99)));
}

#[test]
fn create_fills_defaults_and_trims_title() {
    let gateway = MemoryGateway::new();
    let catalog = AssignmentCatalog::new(&gateway);
    let mut store = store_with_courses();

    let created = catalog
        .create(&mut store, &new_assignment(2, "  HW1  ", "2025-03-10"))
        .unwrap();

    assert_eq!(created.id, 1);
    assert_eq!(created.course_id, 2);
    assert_eq!(created.title, "HW1");
    assert_eq!(created.status, AssignmentStatus::NotStarted);
    assert_eq!(created.score, None);
    assert_eq!(
        created.due_date,
        DueDate::Date(NaiveDate::from_ymd_opt(2025, 3, 10).unwrap())
    );
    assert_eq!(store.get_assignment(1), Some(&created));
}

#[test]
fn list_sorted_orders_by_due_date_then_id() {
    let gateway = MemoryGateway::new();
    let catalog = AssignmentCatalog::new(&gateway);
    let mut store = store_with_courses();

    for (title, due) in [
        ("late", "2025-04-01"),
        ("tie-a", "2025-03-15"),
        ("early", "2025-03-01"),
        ("tie-b", "2025-03-15"),
    ] {
        catalog
            .create(&mut store, &new_assignment(1, title, due))
            .unwrap();
    }

    let titles: Vec<_> = list_sorted(&store, false)
        .into_iter()
        .map(|assignment| assignment.title)
        .collect();
    assert_eq!(titles, vec!["early", "tie-a", "tie-b", "late"]);

    let sorted = list_sorted(&store, false);
    for pair in sorted.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.due_date.sort_key() <= b.due_date.sort_key());
        if a.due_date == b.due_date {
            assert!(a.id < b.id);
        }
    }
}

#[test]
fn only_incomplete_excludes_completed() {
    let gateway = MemoryGateway::new();
    let catalog = AssignmentCatalog::new(&gateway);
    let mut store = store_with_courses();

    for (title, status) in [
        ("done", "Completed"),
        ("doing", "In Progress"),
        ("todo", ""),
    ] {
        let input = NewAssignment {
            status: Some(status.to_string()),
            ..new_assignment(1, title, "2025-03-10")
        };
        catalog.create(&mut store, &input).unwrap();
    }

    let incomplete = list_sorted(&store, true);
    assert_eq!(incomplete.len(), 2);
    assert!(incomplete
        .iter()
        .all(|assignment| assignment.status != AssignmentStatus::Completed));
    assert_eq!(list_sorted(&store, false).len(), 3);
}

#[test]
fn unparsed_due_dates_sort_last_and_dangling_courses_get_placeholder() {
    let mut store = store_with_courses();
    let created_at = NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();
    store.append_assignment(Assignment {
        id: 1,
        course_id: 7,
        title: "legacy".to_string(),
        due_date: DueDate::Unparsed("soon".to_string()),
        status: AssignmentStatus::NotStarted,
        score: None,
        created_at,
    });
    store.append_assignment(Assignment {
        id: 2,
        course_id: 1,
        title: "far future".to_string(),
        due_date: DueDate::Date(NaiveDate::from_ymd_opt(2099, 12, 31).unwrap()),
        status: AssignmentStatus::NotStarted,
        score: None,
        created_at,
    });

    let rows = upcoming(&store, true);
    assert_eq!(rows[0].assignment.id, 2);
    assert_eq!(rows[0].course_label, "CS 361");
    assert_eq!(rows[1].assignment.id, 1);
    assert_eq!(rows[1].course_label, "Course #7");
}
