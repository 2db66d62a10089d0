use academic_core::{
    bootstrap, AssignmentCatalog, Course, CourseRegistry, JsonFileGateway, MemoryGateway,
    NewAssignment, RecordStore, ServiceError, StateGateway, MAX_RECORD_ID, SEED_COURSE_NAMES,
};
use std::fs;

fn populated(gateway: &impl StateGateway) -> RecordStore {
    let registry = CourseRegistry::new(gateway);
    let catalog = AssignmentCatalog::new(gateway);
    let mut store = RecordStore::new();

    let course = registry
        .resolve_or_create(&mut store, "CS 340 – Intro to Databases")
        .unwrap()
        .course;
    catalog
        .create(
            &mut store,
            &NewAssignment {
                course_id: course.id,
                title: "ER diagram".to_string(),
                due_date: "2025-04-02".to_string(),
                status: Some("In Progress".to_string()),
                score: Some("92.5".to_string()),
            },
        )
        .unwrap();
    catalog
        .create(
            &mut store,
            &NewAssignment {
                course_id: course.id,
                title: "Schema".to_string(),
                due_date: "2025-04-09".to_string(),
                status: None,
                score: None,
            },
        )
        .unwrap();
    store
}

#[test]
fn missing_file_loads_empty_state() {
    let dir = tempfile::tempdir().unwrap();
    let gateway = JsonFileGateway::new(dir.path().join("absent.json"));

    assert_eq!(gateway.load(), RecordStore::new());
}

#[test]
fn save_then_load_roundtrips_field_for_field() {
    let dir = tempfile::tempdir().unwrap();
    let gateway = JsonFileGateway::new(dir.path().join("data.json"));

    let store = populated(&gateway);
    let reloaded = gateway.load();

    assert_eq!(reloaded, store);
    assert_eq!(reloaded.assignments()[0].created_at, store.assignments()[0].created_at);
}

#[test]
fn file_uses_fixed_wire_shape() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    let gateway = JsonFileGateway::new(&path);
    populated(&gateway);

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["courses"][0]["id"], 1);
    assert_eq!(value["courses"][0]["name"], "CS 340 – Intro to Databases");

    let first = &value["assignments"][0];
    assert_eq!(first["course_id"], 1);
    assert_eq!(first["due_date"], "2025-04-02");
    assert_eq!(first["status"], "In Progress");
    assert_eq!(first["score"], 92.5);
    assert!(first["created_at"].as_str().unwrap().contains('T'));
    assert!(value["assignments"][1]["score"].is_null());
    assert_eq!(value["assignments"][1]["status"], "Not Started");
}

#[test]
fn corrupted_file_loads_empty_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    fs::write(&path, "{\"courses\": [ {\"id\": 1, \"name\": ").unwrap();

    let gateway = JsonFileGateway::new(&path);
    assert_eq!(gateway.load(), RecordStore::new());
}

#[test]
fn wrong_shape_is_treated_as_corruption() {
    let gateway = MemoryGateway::with_content(r#"{"courses": "not a list"}"#);
    assert!(gateway.load().is_empty());

    let gateway = MemoryGateway::with_content(r#"[1, 2, 3]"#);
    assert!(gateway.load().is_empty());
}

#[test]
fn legacy_file_with_unparsable_due_date_still_loads() {
    let gateway = MemoryGateway::with_content(
        r#"{
            "courses": [{"id": 1, "name": "CS 361"}],
            "assignments": [{
                "id": 4, "course_id": 1, "title": "Essay", "due_date": "03/10/2025",
                "status": "Not Started", "score": null, "created_at": "2025-03-01T10:15:00"
            }]
        }"#,
    );

    let store = gateway.load();
    assert_eq!(store.assignments().len(), 1);
    assert_eq!(store.assignments()[0].due_date.to_string(), "03/10/2025");
    assert_eq!(store.next_assignment_id(), Some(5));
}

#[test]
fn bootstrap_seeds_once_and_saves() {
    let gateway = MemoryGateway::new();

    let seeded = bootstrap(&gateway).unwrap();
    let names: Vec<_> = seeded.courses().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, SEED_COURSE_NAMES);
    let ids: Vec<_> = seeded.courses().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(gateway.save_count(), 1);

    let again = bootstrap(&gateway).unwrap();
    assert_eq!(again, seeded);
    assert_eq!(gateway.save_count(), 1);
}

#[test]
fn bootstrap_replaces_corrupted_store_with_seed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    fs::write(&path, "not json at all").unwrap();
    let gateway = JsonFileGateway::new(&path);

    let store = bootstrap(&gateway).unwrap();

    assert_eq!(store.courses().len(), SEED_COURSE_NAMES.len());
    assert_eq!(gateway.load(), store);
}

#[test]
fn failed_save_leaves_store_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let gateway = JsonFileGateway::new(dir.path().join("missing-dir").join("data.json"));
    let registry = CourseRegistry::new(&gateway);
    let mut store = RecordStore::new();

    let err = registry.resolve_or_create(&mut store, "CS 361").unwrap_err();

    assert!(!err.is_recoverable());
    assert!(store.courses().is_empty());
}

#[test]
fn catalog_failed_save_leaves_store_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let gateway = JsonFileGateway::new(dir.path().join("missing-dir").join("data.json"));
    let catalog = AssignmentCatalog::new(&gateway);
    let mut store = RecordStore::new();
    store.append_course(Course::new(1, "CS 361").unwrap());
    let before = store.clone();

    let err = catalog
        .create(
            &mut store,
            &NewAssignment {
                course_id: 1,
                title: "HW1".to_string(),
                due_date: "2025-03-10".to_string(),
                status: None,
                score: Some("88".to_string()),
            },
        )
        .unwrap_err();

    assert!(matches!(err, ServiceError::Storage(_)));
    assert_eq!(store, before);
}

#[test]
fn id_at_integer_limit_is_corruption() {
    let gateway = MemoryGateway::with_content(r#"{"courses":[{"id":4294967295,"name":"X"}]}"#);
    assert!(gateway.load().is_empty());

    let gateway = MemoryGateway::with_content(
        r#"{
            "courses": [{"id": 1, "name": "CS 361"}],
            "assignments": [{
                "id": 4294967295, "course_id": 1, "title": "HW", "due_date": "2025-03-10",
                "status": "Not Started", "score": null, "created_at": "2025-03-01T10:15:00"
            }]
        }"#,
    );
    assert!(gateway.load().is_empty());
}

#[test]
fn exhausted_id_space_is_an_error_not_a_panic() {
    let text = format!(r#"{{"courses":[{{"id":{MAX_RECORD_ID},"name":"CS 361"}}]}}"#);
    let gateway = MemoryGateway::with_content(text);
    let mut store = gateway.load();
    assert_eq!(store.courses().len(), 1);

    let registry = CourseRegistry::new(&gateway);
    let reused = registry.resolve_or_create(&mut store, " cs 361 ").unwrap();
    assert!(!reused.created);

    let err = registry.resolve_or_create(&mut store, "MTH 265").unwrap_err();
    assert!(matches!(err, ServiceError::IdSpaceExhausted));
    assert!(!err.is_recoverable());
    assert_eq!(store.courses().len(), 1);
    assert_eq!(gateway.save_count(), 0);
}

#[test]
fn stored_names_and_titles_are_trimmed_on_load() {
    let gateway = MemoryGateway::with_content(
        r#"{
            "courses": [{"id": 1, "name": "  CS 361 "}],
            "assignments": [{
                "id": 1, "course_id": 1, "title": "  Essay ", "due_date": "2025-03-10",
                "status": "Not Started", "score": null, "created_at": "2025-03-01T10:15:00"
            }]
        }"#,
    );

    let store = gateway.load();
    assert_eq!(store.courses()[0].name, "CS 361");
    assert_eq!(store.assignments()[0].title, "Essay");
}
