use super::selection::SelectionContext;
use super::view::{Tab, ViewId};
use crate::constants::DEFAULT_MAX_HISTORY_DEPTH;

/// A view the user navigated away from, together with the selection that was
/// active there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationFrame {
    pub view: ViewId,
    pub selection: SelectionContext,
}

/// Manual view history.
///
/// Forward navigation pushes a frame, back pops one. Switching tabs wipes the
/// history, so back never crosses from one tab into another.
#[derive(Clone, Debug)]
pub struct NavigationStack {
    current: ViewId,
    active_tab: Tab,
    frames: Vec<NavigationFrame>,
    max_depth: usize,
}

impl NavigationStack {
    /// Fresh stack sitting on the login view. `max_depth` is clamped to at least 1.
    pub fn new(max_depth: usize) -> Self {
        Self {
            current: ViewId::Login,
            active_tab: Tab::Home,
            frames: Vec::new(),
            max_depth: max_depth.max(1),
        }
    }

    pub fn current(&self) -> ViewId {
        self.current
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn frames(&self) -> &[NavigationFrame] {
        &self.frames
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn can_go_back(&self) -> bool {
        !self.frames.is_empty()
    }

    /// Remember the current view with `selection` and move to `view`.
    ///
    /// When the history is full the oldest frame is dropped.
    pub fn navigate_to(&mut self, view: ViewId, selection: SelectionContext) {
        if self.frames.len() >= self.max_depth {
            self.frames.remove(0);
        }
        self.frames.push(NavigationFrame {
            view: self.current,
            selection,
        });
        log::debug!(
            "Navigation: {} -> {} (depth {})",
            self.current,
            view,
            self.frames.len()
        );
        self.current = view;
    }

    /// Return to the most recent frame. The popped frame is handed back so the
    /// caller can replay its selection; an empty history changes nothing.
    pub fn go_back(&mut self) -> Option<NavigationFrame> {
        let frame = self.frames.pop()?;
        log::debug!("Navigation: back {} -> {}", self.current, frame.view);
        self.current = frame.view;
        Some(frame)
    }

    /// Jump to a tab's root view with an empty history.
    pub fn switch_tab(&mut self, tab: Tab) {
        log::debug!("Navigation: switching to tab {:?}", tab);
        self.frames.clear();
        self.active_tab = tab;
        self.current = tab.view();
    }

    /// Back to the login view with an empty history.
    pub fn reset_to_login(&mut self) {
        self.frames.clear();
        self.active_tab = Tab::Home;
        self.current = ViewId::Login;
    }
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HISTORY_DEPTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_login_with_empty_history() {
        let stack = NavigationStack::default();
        assert_eq!(stack.current(), ViewId::Login);
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn history_is_bounded() {
        let mut stack = NavigationStack::new(2);
        stack.switch_tab(Tab::Home);
        stack.navigate_to(ViewId::EventDetail, SelectionContext::default());
        stack.navigate_to(ViewId::EditEvent, SelectionContext::default());
        stack.navigate_to(ViewId::Profile, SelectionContext::default());

        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.frames()[0].view, ViewId::EventDetail);
        assert_eq!(stack.frames()[1].view, ViewId::EditEvent);
    }
}
