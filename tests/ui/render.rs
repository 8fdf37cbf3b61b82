use super::app_component::{logged_in_app, test_config};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use school_planner::constants::{SUBJECT_REMOVED_PLACEHOLDER, TITLE_LOGIN};
use school_planner::logger::Logger;
use school_planner::ui::core::{Action, EventType};
use school_planner::ui::AppComponent;

fn draw(app: &mut AppComponent) -> String {
    let backend = TestBackend::new(100, 32);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            app.render(f, area);
        })
        .unwrap();
    buffer_text(terminal.backend().buffer())
}

fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

async fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::new(code, KeyModifiers::NONE)))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_login_screen_renders() {
    let mut app = AppComponent::new(&test_config(), Logger::new());
    let screen = draw(&mut app);
    assert!(screen.contains(TITLE_LOGIN));
    assert!(screen.contains("Username"));
    assert!(screen.contains("Password"));
    // No tab bar before login
    assert!(!screen.contains("Subjects"));
}

#[tokio::test]
async fn test_home_renders_todays_events_and_tab_bar() {
    let mut app = logged_in_app().await;
    let screen = draw(&mut app);
    assert!(screen.contains("Hello, Byron"));
    assert!(screen.contains("Entrega de laboratorio 2"));
    assert!(screen.contains("+ Add event"));
    assert!(screen.contains("Subjects"));
    assert!(screen.contains("Profile"));
}

#[tokio::test]
async fn test_subject_detail_renders_grades() {
    let mut app = logged_in_app().await;
    press(&mut app, KeyCode::Char('2')).await;
    press(&mut app, KeyCode::Enter).await;

    let screen = draw(&mut app);
    assert!(screen.contains("Juan Perez Gonzales"));
    assert!(screen.contains("Evaluacion 1"));
    assert!(screen.contains("Evaluacion 2"));
    // Detail views have no tab bar
    assert!(!screen.contains("3 Profile"));
}

#[tokio::test]
async fn test_event_detail_shows_removed_subject_placeholder() {
    let mut app = logged_in_app().await;
    app.handle_app_action(Action::DeleteSubject(1)).await;
    app.handle_app_action(Action::OpenEvent(1)).await;

    let screen = draw(&mut app);
    assert!(screen.contains("Tutoría"));
    assert!(screen.contains(SUBJECT_REMOVED_PLACEHOLDER));
}

#[tokio::test]
async fn test_help_dialog_renders_over_screen() {
    let mut app = logged_in_app().await;
    press(&mut app, KeyCode::Char('?')).await;
    let screen = draw(&mut app);
    assert!(screen.contains("Help"));
    assert!(screen.contains("GLOBAL"));
}

#[tokio::test]
async fn test_tiny_terminal_does_not_panic() {
    let mut app = logged_in_app().await;
    let backend = TestBackend::new(20, 6);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            app.render(f, area);
        })
        .unwrap();
}
