use school_planner::constants::{TITLE_EDIT_SUBJECT, TITLE_NEW_SUBJECT};
use school_planner::navigation::{Tab, ViewDispatcher, ViewId};

#[test]
fn test_known_identifiers_resolve() {
    for view in ViewId::ALL {
        assert_eq!(ViewDispatcher::resolve(view.as_str()), view);
    }
    assert_eq!(ViewDispatcher::resolve("subject-detail"), ViewId::SubjectDetail);
    assert_eq!(ViewDispatcher::resolve("EDIT_EVENT"), ViewId::EditEvent);
}

#[test]
fn test_unknown_identifier_falls_back_to_home() {
    assert_eq!(ViewDispatcher::resolve("calendar"), ViewId::Home);
    assert_eq!(ViewDispatcher::resolve(""), ViewId::Home);
    assert!("calendar".parse::<ViewId>().is_err());
}

#[test]
fn test_tab_bar_only_on_top_level_views() {
    let with_tab_bar: Vec<ViewId> = ViewId::ALL
        .into_iter()
        .filter(|view| ViewDispatcher::shows_tab_bar(*view))
        .collect();
    assert_eq!(with_tab_bar, vec![ViewId::Home, ViewId::SubjectList, ViewId::Profile]);
}

#[test]
fn test_back_marker_on_pushed_views() {
    assert!(ViewDispatcher::shows_back(ViewId::EventDetail));
    assert!(ViewDispatcher::shows_back(ViewId::ChangePassword));
    assert!(!ViewDispatcher::shows_back(ViewId::Home));
    assert!(!ViewDispatcher::shows_back(ViewId::Login));
}

#[test]
fn test_form_titles_follow_edit_mode() {
    assert_eq!(ViewDispatcher::title(ViewId::EditSubject, false), TITLE_NEW_SUBJECT);
    assert_eq!(ViewDispatcher::title(ViewId::EditSubject, true), TITLE_EDIT_SUBJECT);
}

#[test]
fn test_tabs_map_to_top_level_views() {
    for tab in Tab::ALL {
        assert_eq!(tab.view().as_tab(), Some(tab));
    }
    assert_eq!(Tab::Home.previous(), Tab::Profile);
    assert_eq!(Tab::Profile.next(), Tab::Home);
}
