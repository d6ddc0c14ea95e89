use std::rc::Rc;

use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub is_open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Open,
    Close,
}

impl MenuAction {
    /// Keys that dismiss the mobile menu.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" | "Esc" => Some(MenuAction::Close),
            _ => None,
        }
    }
}

impl MenuState {
    pub fn apply(self, action: MenuAction) -> Self {
        match action {
            MenuAction::Open => MenuState { is_open: true },
            MenuAction::Close => MenuState { is_open: false },
        }
    }
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: MenuAction) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            // Same Rc: no re-render.
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!MenuState::default().is_open);
    }

    #[test]
    fn open_and_close_are_idempotent() {
        let open = MenuState::default().apply(MenuAction::Open);
        assert!(open.is_open);
        assert_eq!(open.apply(MenuAction::Open), open);

        let closed = open.apply(MenuAction::Close);
        assert!(!closed.is_open);
        assert_eq!(closed.apply(MenuAction::Close), closed);
    }

    #[test]
    fn repeated_action_keeps_same_allocation() {
        let open = Rc::new(MenuState { is_open: true });
        let again = open.clone().reduce(MenuAction::Open);
        assert!(Rc::ptr_eq(&open, &again));

        let closed = open.reduce(MenuAction::Close);
        assert!(!closed.is_open);
    }

    #[test]
    fn close_after_open_returns_to_closed() {
        let mut state = Rc::new(MenuState::default());
        state = state.reduce(MenuAction::Open);
        assert!(state.is_open);
        state = state.reduce(MenuAction::Close);
        assert!(!state.is_open);
    }

    #[test]
    fn escape_closes_other_keys_ignored() {
        assert_eq!(MenuAction::from_key("Escape"), Some(MenuAction::Close));
        assert_eq!(MenuAction::from_key("Esc"), Some(MenuAction::Close));
        assert_eq!(MenuAction::from_key("Enter"), None);
        assert_eq!(MenuAction::from_key("m"), None);
    }
}
