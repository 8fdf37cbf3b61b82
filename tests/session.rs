use chrono::NaiveDate;
use school_planner::constants::SUBJECT_REMOVED_PLACEHOLDER;
use school_planner::entities::{EventDraft, SubjectDraft};
use school_planner::navigation::{SelectionContext, Tab, ViewId};
use school_planner::session::{PasswordError, SaveOutcome, Session, SessionSettings};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

fn logged_in() -> Session {
    let mut session = Session::new(SessionSettings {
        today: today(),
        ..Default::default()
    });
    session.complete_login();
    session
}

#[test]
fn test_new_session_starts_on_login() {
    let session = Session::new(SessionSettings::default());
    assert_eq!(session.current_view(), ViewId::Login);
    assert_eq!(session.active_tab(), Tab::Home);
    assert!(session.selected_subject().is_none());
    assert_eq!(session.user().handle, "@bydavid");
}

#[test]
fn test_login_lands_on_configured_tab() {
    let mut session = Session::new(SessionSettings {
        start_tab: Tab::Subjects,
        ..Default::default()
    });
    session.complete_login();
    assert_eq!(session.current_view(), ViewId::SubjectList);
    assert_eq!(session.active_tab(), Tab::Subjects);
}

#[test]
fn test_create_then_update_subject_through_the_form() {
    let mut session = logged_in();
    session.switch_tab(Tab::Subjects);

    session.new_subject();
    assert_eq!(session.current_view(), ViewId::EditSubject);
    assert!(!session.is_editing_subject());

    let outcome = session.save_subject(SubjectDraft {
        name: "Redes II".to_string(),
        ..Default::default()
    });
    let SaveOutcome::Created(id) = outcome else {
        panic!("expected a new subject, got {:?}", outcome);
    };
    assert_eq!(session.current_view(), ViewId::SubjectList);
    assert!(session.store().subject(id).unwrap().grades.is_empty());

    session.open_subject(id);
    session.edit_selected_subject();
    assert!(session.is_editing_subject());

    let mut draft = session.selected_subject().unwrap().to_draft();
    draft.notes = "x".to_string();
    assert_eq!(session.save_subject(draft), SaveOutcome::Updated(id));

    let subject = session.store().subject(id).unwrap();
    assert_eq!(subject.name, "Redes II");
    assert_eq!(subject.notes, "x");
    assert_eq!(session.current_view(), ViewId::SubjectDetail);
}

#[test]
fn test_back_replays_selection() {
    let mut session = logged_in();
    session.switch_tab(Tab::Subjects);
    session.open_subject(1);
    session.new_subject();
    assert_eq!(session.selection().subject, None);

    session.go_back();
    assert_eq!(session.current_view(), ViewId::SubjectDetail);
    assert_eq!(session.selection().subject, Some(1));
    assert_eq!(session.selected_subject().unwrap().id, 1);
}

#[test]
fn test_go_back_with_empty_history_is_noop() {
    let mut session = logged_in();
    assert!(session.go_back().is_none());
    assert_eq!(session.current_view(), ViewId::Home);
}

#[test]
fn test_saving_a_deleted_subject_reports_missing() {
    let mut session = logged_in();
    session.switch_tab(Tab::Subjects);
    session.open_subject(3);
    session.edit_selected_subject();
    session.store_mut().delete_subject(3);

    assert_eq!(session.save_subject(SubjectDraft::default()), SaveOutcome::Missing(3));
    assert!(session.store().subject(3).is_none());
}

#[test]
fn test_delete_subject_returns_to_subject_list() {
    let mut session = logged_in();
    session.switch_tab(Tab::Subjects);
    session.open_subject(1);
    session.edit_selected_subject();

    assert!(session.delete_subject(1));
    assert_eq!(session.current_view(), ViewId::SubjectList);
    assert!(!session.navigation().can_go_back());

    // Events of the removed subject stay and point at a placeholder
    let event = session.store().event(1).unwrap();
    assert_eq!(
        session.store().subject_label_for(event).as_deref(),
        Some(SUBJECT_REMOVED_PLACEHOLDER)
    );
}

#[test]
fn test_quick_add_event_from_home() {
    let mut session = logged_in();
    session.new_event();
    assert_eq!(session.current_view(), ViewId::EditEvent);
    assert!(!session.is_editing_event());

    let outcome = session.save_event(EventDraft {
        title: "Estudiar".to_string(),
        date: Some(today()),
        subject_id: None,
        notes: String::new(),
    });

    assert!(matches!(outcome, SaveOutcome::Created(_)));
    assert_eq!(session.current_view(), ViewId::Home);
    assert_eq!(session.store().events_on(today()).len(), 3);
}

#[test]
fn test_delete_event_skips_its_detail_view() {
    let mut session = logged_in();
    session.open_event(2);
    session.edit_selected_event();

    assert!(session.delete_event(2));

    assert_eq!(session.current_view(), ViewId::Home);
    assert!(session.store().event(2).is_none());
}

#[test]
fn test_record_progress_on_events() {
    let mut session = logged_in();
    assert_eq!(session.record_grade(2, "9,5"), Ok(Some(9.5)));
    assert!(session.record_attendance(1, true));
    assert!(!session.toggle_completed(404));

    assert_eq!(session.store().event(2).unwrap().grade, Some(9.5));
    assert_eq!(session.store().event(1).unwrap().attendance, Some(true));
}

#[test]
fn test_change_password() {
    let mut session = logged_in();
    session.switch_tab(Tab::Profile);
    session.open_change_password();

    assert_eq!(
        session.change_password("wrong", "abc", "abc"),
        Err(PasswordError::WrongCurrentPassword)
    );
    assert_eq!(session.change_password("123", "", ""), Err(PasswordError::EmptyNewPassword));
    assert_eq!(
        session.change_password("123", "abc", "abd"),
        Err(PasswordError::ConfirmationMismatch)
    );
    assert_eq!(session.current_view(), ViewId::ChangePassword);

    assert_eq!(session.change_password("123", "abc", "abc"), Ok(()));
    assert_eq!(session.user().password, "abc");
    assert_eq!(session.current_view(), ViewId::Profile);
}

#[test]
fn test_logout_discards_session_state() {
    let mut session = logged_in();
    session.store_mut().delete_subject(1);
    assert!(session.change_password("123", "new", "new").is_ok());
    session.open_subject(2);

    session.logout();

    assert_eq!(session.current_view(), ViewId::Login);
    assert!(!session.navigation().can_go_back());
    assert_eq!(session.selection(), SelectionContext::default());
    assert!(session.store().subject(1).is_some());
    assert_eq!(session.user().password, "123");
    assert_eq!(session.today(), today());
}
