use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use school_planner::auth::{AuthError, Authenticator, Credentials};
use school_planner::config::Config;
use school_planner::constants::{SUCCESS_EVENT_CREATED, SUCCESS_GRADE_CLEARED, SUCCESS_GRADE_RECORDED};
use school_planner::logger::Logger;
use school_planner::navigation::{Tab, ViewId};
use school_planner::ui::core::{DialogType, EventType};
use school_planner::ui::AppComponent;

pub fn test_config() -> Config {
    let mut config = Config::default();
    config.display.today = Some("2024-03-15".to_string());
    config
}

async fn press(app: &mut AppComponent, code: KeyCode) {
    press_with(app, code, KeyModifiers::NONE).await;
}

async fn press_with(app: &mut AppComponent, code: KeyCode, modifiers: KeyModifiers) {
    app.handle_event(EventType::Key(KeyEvent::new(code, modifiers)))
        .await
        .unwrap();
}

async fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c)).await;
    }
}

pub async fn logged_in_app() -> AppComponent {
    let mut app = AppComponent::new(&test_config(), Logger::new());
    type_text(&mut app, "byron").await;
    press(&mut app, KeyCode::Enter).await;
    app
}

struct RejectAll;

#[async_trait]
impl Authenticator for RejectAll {
    fn name(&self) -> &str {
        "reject-all"
    }

    async fn authenticate(&self, credentials: &Credentials) -> Result<(), AuthError> {
        Err(AuthError::InvalidCredentials(credentials.username.clone()))
    }
}

#[tokio::test]
async fn test_login_with_any_credentials() {
    let mut app = AppComponent::new(&test_config(), Logger::new());
    assert_eq!(app.current_view(), ViewId::Login);

    // 'q' is text on the login form, not quit
    type_text(&mut app, "q").await;
    assert!(!app.should_quit());

    press(&mut app, KeyCode::Enter).await;
    assert_eq!(app.current_view(), ViewId::Home);
}

#[tokio::test]
async fn test_rejected_login_shows_error() {
    let mut app = AppComponent::with_authenticator(&test_config(), Logger::new(), Box::new(RejectAll));
    type_text(&mut app, "nobody").await;
    press(&mut app, KeyCode::Enter).await;

    assert_eq!(app.current_view(), ViewId::Login);
    assert!(matches!(app.dialog_type(), Some(DialogType::Error(_))));

    // Any key dismisses the error
    press(&mut app, KeyCode::Char('x')).await;
    assert!(app.dialog_type().is_none());
}

#[tokio::test]
async fn test_tab_keys_switch_views() {
    let mut app = logged_in_app().await;

    press(&mut app, KeyCode::Char('2')).await;
    assert_eq!(app.current_view(), ViewId::SubjectList);

    press(&mut app, KeyCode::Right).await;
    assert_eq!(app.current_view(), ViewId::Profile);

    press(&mut app, KeyCode::Right).await;
    assert_eq!(app.current_view(), ViewId::Home);
    assert_eq!(app.session().active_tab(), Tab::Home);
}

#[tokio::test]
async fn test_open_subject_and_go_back() {
    let mut app = logged_in_app().await;
    press(&mut app, KeyCode::Char('2')).await;

    press(&mut app, KeyCode::Down).await;
    press(&mut app, KeyCode::Enter).await;
    assert_eq!(app.current_view(), ViewId::SubjectDetail);
    assert_eq!(app.session().selection().subject, Some(2));

    press(&mut app, KeyCode::Esc).await;
    assert_eq!(app.current_view(), ViewId::SubjectList);
}

#[tokio::test]
async fn test_add_subject_through_the_form() {
    let mut app = logged_in_app().await;
    press(&mut app, KeyCode::Char('2')).await;
    press(&mut app, KeyCode::Char('a')).await;
    assert_eq!(app.current_view(), ViewId::EditSubject);

    type_text(&mut app, "Redes II").await;
    press(&mut app, KeyCode::Tab).await;
    type_text(&mut app, "Ana").await;
    press(&mut app, KeyCode::Enter).await;

    assert_eq!(app.current_view(), ViewId::SubjectList);
    let subject = app.session().store().subjects().last().unwrap();
    assert_eq!(subject.name, "Redes II");
    assert_eq!(subject.teacher, "Ana");
}

#[tokio::test]
async fn test_edit_form_is_prefilled() {
    let mut app = logged_in_app().await;
    press(&mut app, KeyCode::Char('2')).await;
    press(&mut app, KeyCode::Enter).await;
    press(&mut app, KeyCode::Char('e')).await;
    assert_eq!(app.current_view(), ViewId::EditSubject);

    // Append to the prefilled name and save
    type_text(&mut app, " I").await;
    press(&mut app, KeyCode::Enter).await;

    assert_eq!(app.current_view(), ViewId::SubjectDetail);
    assert_eq!(
        app.session().store().subject(1).unwrap().name,
        "Desarrollo de aplicaciones móviles I"
    );
}

#[tokio::test]
async fn test_ctrl_d_deletes_subject() {
    let mut app = logged_in_app().await;
    press(&mut app, KeyCode::Char('2')).await;
    press(&mut app, KeyCode::Enter).await;
    press(&mut app, KeyCode::Char('e')).await;
    press_with(&mut app, KeyCode::Char('d'), KeyModifiers::CONTROL).await;

    assert_eq!(app.current_view(), ViewId::SubjectList);
    assert!(app.session().store().subject(1).is_none());
}

#[tokio::test]
async fn test_quick_add_event_from_home() {
    let mut app = logged_in_app().await;

    // Quick-add row sits after today's two events
    press(&mut app, KeyCode::Char('a')).await;
    assert_eq!(app.current_view(), ViewId::EditEvent);

    type_text(&mut app, "Estudiar").await;
    press(&mut app, KeyCode::Tab).await;
    press(&mut app, KeyCode::Tab).await;
    press(&mut app, KeyCode::Right).await;
    press(&mut app, KeyCode::Enter).await;

    assert_eq!(app.current_view(), ViewId::Home);
    assert_eq!(app.status_message(), Some(SUCCESS_EVENT_CREATED));

    let store = app.session().store();
    let event = store.events().last().unwrap();
    assert_eq!(event.title, "Estudiar");
    assert_eq!(event.subject_id, Some(1));
    assert_eq!(store.events_on(app.session().today()).len(), 3);
}

#[tokio::test]
async fn test_event_form_keeps_removed_subject() {
    let mut app = logged_in_app().await;
    app.handle_app_action(school_planner::ui::core::Action::DeleteSubject(1)).await;
    press(&mut app, KeyCode::Char('1')).await;

    // Event 1 belongs to the deleted subject
    press(&mut app, KeyCode::Enter).await;
    assert_eq!(app.session().selection().event, Some(1));
    press(&mut app, KeyCode::Char('e')).await;
    assert_eq!(app.current_view(), ViewId::EditEvent);
    press(&mut app, KeyCode::Enter).await;
    assert_eq!(app.session().store().event(1).unwrap().subject_id, Some(1));

    // Picking another subject goes through the id lookup
    press(&mut app, KeyCode::Char('e')).await;
    press(&mut app, KeyCode::Tab).await;
    press(&mut app, KeyCode::Tab).await;
    press(&mut app, KeyCode::Left).await;
    press(&mut app, KeyCode::Enter).await;
    assert_eq!(app.session().store().event(1).unwrap().subject_id, Some(3));
}

#[tokio::test]
async fn test_record_grade_on_assignment() {
    let mut app = logged_in_app().await;
    press(&mut app, KeyCode::Down).await;
    press(&mut app, KeyCode::Enter).await;
    assert_eq!(app.session().selection().event, Some(2));

    press(&mut app, KeyCode::Char('g')).await;
    assert_eq!(
        app.dialog_type(),
        Some(&DialogType::RecordGrade {
            event_id: 2,
            current: String::new()
        })
    );

    type_text(&mut app, "8,5").await;
    press(&mut app, KeyCode::Enter).await;

    assert!(app.dialog_type().is_none());
    assert_eq!(app.session().store().event(2).unwrap().grade, Some(8.5));
    assert_eq!(app.status_message(), Some(SUCCESS_GRADE_RECORDED));
}

#[tokio::test]
async fn test_reopened_grade_dialog_keeps_recorded_grade() {
    let mut app = logged_in_app().await;
    press(&mut app, KeyCode::Down).await;
    press(&mut app, KeyCode::Enter).await;

    press(&mut app, KeyCode::Char('g')).await;
    type_text(&mut app, "9").await;
    press(&mut app, KeyCode::Enter).await;
    assert_eq!(app.session().store().event(2).unwrap().grade, Some(9.0));

    // Reopen and confirm without typing
    press(&mut app, KeyCode::Char('g')).await;
    assert_eq!(
        app.dialog_type(),
        Some(&DialogType::RecordGrade {
            event_id: 2,
            current: "9".to_string()
        })
    );
    press(&mut app, KeyCode::Enter).await;
    assert_eq!(app.session().store().event(2).unwrap().grade, Some(9.0));
    assert_eq!(app.status_message(), Some(SUCCESS_GRADE_RECORDED));

    // Text that is not a number is refused with an error
    press(&mut app, KeyCode::Char('g')).await;
    press(&mut app, KeyCode::Backspace).await;
    type_text(&mut app, "abc").await;
    press(&mut app, KeyCode::Enter).await;
    assert!(matches!(app.dialog_type(), Some(DialogType::Error(_))));
    assert_eq!(app.session().store().event(2).unwrap().grade, Some(9.0));
    assert_ne!(app.status_message(), Some(SUCCESS_GRADE_RECORDED));
    press(&mut app, KeyCode::Esc).await;

    // Erasing the grade clears it
    press(&mut app, KeyCode::Char('g')).await;
    press(&mut app, KeyCode::Backspace).await;
    press(&mut app, KeyCode::Enter).await;
    assert_eq!(app.session().store().event(2).unwrap().grade, None);
    assert_eq!(app.status_message(), Some(SUCCESS_GRADE_CLEARED));
}

#[tokio::test]
async fn test_attendance_only_for_classes() {
    let mut app = logged_in_app().await;
    press(&mut app, KeyCode::Down).await;
    press(&mut app, KeyCode::Enter).await;

    // Event 2 is an assignment
    press(&mut app, KeyCode::Char('t')).await;
    assert!(app.dialog_type().is_none());

    press(&mut app, KeyCode::Esc).await;
    press(&mut app, KeyCode::Up).await;
    press(&mut app, KeyCode::Enter).await;
    press(&mut app, KeyCode::Char('t')).await;
    press(&mut app, KeyCode::Char(' ')).await;
    press(&mut app, KeyCode::Enter).await;

    assert_eq!(app.session().store().event(1).unwrap().attendance, Some(true));
}

#[tokio::test]
async fn test_change_password_mismatch_then_success() {
    let mut app = logged_in_app().await;
    press(&mut app, KeyCode::Char('3')).await;
    press(&mut app, KeyCode::Char('p')).await;
    assert_eq!(app.current_view(), ViewId::ChangePassword);

    type_text(&mut app, "123").await;
    press(&mut app, KeyCode::Tab).await;
    type_text(&mut app, "abc").await;
    press(&mut app, KeyCode::Tab).await;
    type_text(&mut app, "abd").await;
    press(&mut app, KeyCode::Enter).await;
    assert!(matches!(app.dialog_type(), Some(DialogType::Error(_))));
    assert_eq!(app.current_view(), ViewId::ChangePassword);

    press(&mut app, KeyCode::Esc).await;
    press(&mut app, KeyCode::Backspace).await;
    type_text(&mut app, "c").await;
    press(&mut app, KeyCode::Enter).await;

    assert_eq!(app.current_view(), ViewId::Profile);
    assert_eq!(app.session().user().password, "abc");
}

#[tokio::test]
async fn test_logout_brings_back_fresh_data() {
    let mut app = logged_in_app().await;
    app.handle_app_action(school_planner::ui::core::Action::DeleteSubject(1)).await;
    assert!(app.session().store().subject(1).is_none());

    press(&mut app, KeyCode::Char('3')).await;
    press(&mut app, KeyCode::Char('l')).await;
    assert_eq!(app.current_view(), ViewId::Login);
    assert!(app.session().store().subject(1).is_some());
}

#[tokio::test]
async fn test_help_and_logs_dialogs() {
    let mut app = logged_in_app().await;

    press(&mut app, KeyCode::Char('?')).await;
    assert_eq!(app.dialog_type(), Some(&DialogType::Help));
    // Dialog keys do not reach the screen
    press(&mut app, KeyCode::Char('2')).await;
    assert_eq!(app.current_view(), ViewId::Home);
    press(&mut app, KeyCode::Esc).await;
    assert!(app.dialog_type().is_none());

    press(&mut app, KeyCode::Char('G')).await;
    assert_eq!(app.dialog_type(), Some(&DialogType::Logs));
    press(&mut app, KeyCode::Char('q')).await;
    assert!(app.dialog_type().is_none());
    assert!(!app.should_quit());
}

#[tokio::test]
async fn test_quit_keys() {
    let mut app = logged_in_app().await;
    press(&mut app, KeyCode::Char('q')).await;
    assert!(app.should_quit());

    let mut app = AppComponent::new(&test_config(), Logger::new());
    press_with(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL).await;
    assert!(app.should_quit());
}
