use school_planner::navigation::{NavigationStack, SelectionContext, Tab, ViewId};

fn on_home() -> NavigationStack {
    let mut stack = NavigationStack::default();
    stack.switch_tab(Tab::Home);
    stack
}

#[test]
fn test_go_back_on_empty_stack_keeps_view() {
    let mut stack = on_home();
    assert!(stack.go_back().is_none());
    assert_eq!(stack.current(), ViewId::Home);
    assert_eq!(stack.depth(), 0);
}

#[test]
fn test_navigate_then_back_restores_previous_view() {
    let mut stack = on_home();
    stack.navigate_to(ViewId::SubjectList, SelectionContext::default());
    stack.navigate_to(ViewId::SubjectDetail, SelectionContext::default());

    let frame = stack.go_back().unwrap();
    assert_eq!(frame.view, ViewId::SubjectList);
    assert_eq!(stack.current(), ViewId::SubjectList);
}

#[test]
fn test_subject_detail_scenario() {
    let mut stack = on_home();

    stack.navigate_to(ViewId::SubjectDetail, SelectionContext::default());
    assert_eq!(stack.current(), ViewId::SubjectDetail);
    assert_eq!(stack.frames().len(), 1);
    assert_eq!(stack.frames()[0].view, ViewId::Home);

    stack.go_back();
    assert_eq!(stack.current(), ViewId::Home);
    assert!(stack.frames().is_empty());
}

#[test]
fn test_switch_tab_always_clears_history() {
    for depth in 0..5 {
        let mut stack = on_home();
        for _ in 0..depth {
            stack.navigate_to(ViewId::EventDetail, SelectionContext::default());
        }

        stack.switch_tab(Tab::Profile);

        assert_eq!(stack.depth(), 0);
        assert_eq!(stack.current(), ViewId::Profile);
        assert_eq!(stack.active_tab(), Tab::Profile);
    }
}

#[test]
fn test_frames_keep_their_selection() {
    let mut stack = on_home();
    let selection = SelectionContext {
        subject: Some(2),
        event: None,
    };
    stack.navigate_to(ViewId::EditSubject, selection);

    assert_eq!(stack.go_back().unwrap().selection, selection);
}

#[test]
fn test_history_depth_is_bounded() {
    let mut stack = NavigationStack::new(3);
    stack.switch_tab(Tab::Subjects);
    for _ in 0..10 {
        stack.navigate_to(ViewId::SubjectDetail, SelectionContext::default());
        assert!(stack.depth() <= 3);
    }

    // The oldest frames were dropped, so back never reaches the tab root
    for _ in 0..3 {
        assert!(stack.go_back().is_some());
    }
    assert_eq!(stack.current(), ViewId::SubjectDetail);
    assert!(stack.go_back().is_none());
}

#[test]
fn test_reset_to_login() {
    let mut stack = on_home();
    stack.switch_tab(Tab::Subjects);
    stack.navigate_to(ViewId::SubjectDetail, SelectionContext::default());

    stack.reset_to_login();

    assert_eq!(stack.current(), ViewId::Login);
    assert_eq!(stack.active_tab(), Tab::Home);
    assert!(!stack.can_go_back());
}
