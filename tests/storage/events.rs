use chrono::NaiveDate;
use school_planner::entities::{EventDraft, EventKind};
use school_planner::storage::{EntityStore, GradeError};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

fn seeded_store() -> EntityStore {
    EntityStore::seeded(today())
}

#[test]
fn test_seed_events_are_dated_today() {
    let store = seeded_store();
    let titles: Vec<_> = store.events_on(today()).iter().map(|e| e.title.clone()).collect();
    assert_eq!(titles, vec!["Tutoría", "Entrega de laboratorio 2"]);
    assert!(store.events_on(today().succ_opt().unwrap()).is_empty());
}

#[test]
fn test_create_event_from_form() {
    let mut store = seeded_store();
    let id = store.create_event(EventDraft {
        title: "Parcial".to_string(),
        date: Some(today()),
        subject_id: Some(3),
        notes: String::new(),
    });

    let event = store.event(id).unwrap();
    assert_eq!(event.kind, EventKind::Other);
    assert_eq!(event.subject_id, Some(3));
    assert_eq!(store.subject_label_for(event).as_deref(), Some("Redes"));
    assert_eq!(store.events_on(today()).len(), 3);
}

#[test]
fn test_event_without_subject_has_no_label() {
    let mut store = seeded_store();
    let id = store.create_event(EventDraft::default());
    let event = store.event(id).unwrap();
    assert!(store.subject_label_for(event).is_none());
    assert!(store.subject_of(event).is_none());
}

#[test]
fn test_update_and_delete_missing_event() {
    let mut store = seeded_store();
    let mut ghost = store.event(1).unwrap().clone();
    ghost.id = 500;

    assert!(!store.update_event(ghost));
    assert!(!store.delete_event(500));
    assert_eq!(store.events().len(), 2);
}

#[test]
fn test_delete_event_removes_exactly_one() {
    let mut store = seeded_store();
    assert!(store.delete_event(1));
    assert!(store.event(1).is_none());
    assert!(store.event(2).is_some());
}

#[test]
fn test_record_grade_parses_free_text() {
    let mut store = seeded_store();

    assert_eq!(store.record_grade(2, " 8,5 "), Ok(Some(8.5)));
    assert_eq!(store.event(2).unwrap().grade, Some(8.5));

    // No range check
    assert_eq!(store.record_grade(2, "42"), Ok(Some(42.0)));
    assert_eq!(store.event(2).unwrap().grade, Some(42.0));

    // Unparsable input is refused and keeps the grade
    assert_eq!(store.record_grade(2, "ten"), Err(GradeError::NotANumber("ten".to_string())));
    assert_eq!(store.event(2).unwrap().grade, Some(42.0));

    // Blank input clears it
    assert_eq!(store.record_grade(2, ""), Ok(None));
    assert_eq!(store.event(2).unwrap().grade, None);

    assert_eq!(store.record_grade(99, "7"), Err(GradeError::EventNotFound(99)));
}

#[test]
fn test_record_attendance_and_toggle_completed() {
    let mut store = seeded_store();

    assert!(store.record_attendance(1, true));
    assert_eq!(store.event(1).unwrap().attendance, Some(true));

    assert!(store.toggle_completed(2));
    assert!(store.event(2).unwrap().completed);
    assert!(store.toggle_completed(2));
    assert!(!store.event(2).unwrap().completed);

    assert!(!store.record_attendance(99, true));
    assert!(!store.toggle_completed(99));
}
