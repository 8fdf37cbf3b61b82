use chrono::NaiveDate;
use school_planner::constants::SUBJECT_REMOVED_PLACEHOLDER;
use school_planner::entities::SubjectDraft;
use school_planner::storage::EntityStore;

fn seeded_store() -> EntityStore {
    EntityStore::seeded(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
}

fn draft(name: &str) -> SubjectDraft {
    SubjectDraft {
        name: name.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_create_subject_assigns_unique_id() {
    let mut store = seeded_store();
    let existing: Vec<u64> = store.subjects().iter().map(|s| s.id).collect();

    let id = store.create_subject(draft("Redes II"));

    assert!(!existing.contains(&id));
    assert_eq!(store.subjects().iter().filter(|s| s.id == id).count(), 1);
    assert!(store.subject(id).unwrap().grades.is_empty());
}

#[test]
fn test_back_to_back_creations_get_different_ids() {
    let mut store = seeded_store();
    let first = store.create_subject(draft("A"));
    let second = store.create_subject(draft("B"));
    let event = store.create_event(Default::default());

    assert_ne!(first, second);
    assert_ne!(second, event);
}

#[test]
fn test_ids_never_collide_with_seeded_grades() {
    let mut store = seeded_store();
    let id = store.create_subject(draft("Nueva"));
    assert!(id > 2);
    assert!(store.subjects().iter().flat_map(|s| s.grades.iter()).all(|g| g.id != id));
}

#[test]
fn test_create_accepts_empty_fields() {
    let mut store = seeded_store();
    let id = store.create_subject(SubjectDraft::default());
    let subject = store.subject(id).unwrap();
    assert_eq!(subject.name, "");
    assert_eq!(subject.color, "blue");
}

#[test]
fn test_update_subject_replaces_fields() {
    let mut store = seeded_store();
    let id = store.create_subject(draft("Redes II"));

    let mut subject = store.subject(id).unwrap().clone();
    subject.notes = "x".to_string();
    assert!(store.update_subject(subject));

    let updated = store.subject(id).unwrap();
    assert_eq!(updated.name, "Redes II");
    assert_eq!(updated.notes, "x");
}

#[test]
fn test_update_missing_subject_is_noop() {
    let mut store = seeded_store();
    let before = store.subjects().to_vec();

    let mut ghost = before[0].clone();
    ghost.id = 999;
    ghost.name = "Ghost".to_string();

    assert!(!store.update_subject(ghost));
    assert_eq!(store.subjects(), before.as_slice());
}

#[test]
fn test_delete_subject_removes_exactly_one() {
    let mut store = seeded_store();
    let before = store.subjects().to_vec();

    assert!(store.delete_subject(2));

    let expected: Vec<_> = before.into_iter().filter(|s| s.id != 2).collect();
    assert_eq!(store.subjects(), expected.as_slice());
}

#[test]
fn test_delete_missing_subject_is_noop() {
    let mut store = seeded_store();
    let before = store.subjects().to_vec();

    assert!(!store.delete_subject(42));
    assert_eq!(store.subjects(), before.as_slice());
}

#[test]
fn test_delete_subject_keeps_its_events() {
    let mut store = seeded_store();
    let events_before = store.events().len();

    store.delete_subject(1);

    assert_eq!(store.events().len(), events_before);
    let orphan = store.events().iter().find(|e| e.subject_id == Some(1)).unwrap();
    assert_eq!(
        store.subject_label_for(orphan).as_deref(),
        Some(SUBJECT_REMOVED_PLACEHOLDER)
    );
}

#[test]
fn test_lookup_subject_by_string_id() {
    let store = seeded_store();
    assert_eq!(store.lookup_subject(" 2 ").map(|s| s.id), Some(2));
    assert!(store.lookup_subject("abc").is_none());
    assert!(store.lookup_subject("").is_none());
    assert!(store.lookup_subject("77").is_none());
}
