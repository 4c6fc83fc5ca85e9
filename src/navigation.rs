/// Mobile menu overlay state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    pub fn closed(self) -> Self {
        Self::Closed
    }

    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Scrolls the page to an element matched by an in-page selector.
pub trait SectionScroller {
    /// Returns `false` when nothing matches `target`.
    fn scroll_to(&self, target: &str) -> bool;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationOutcome {
    /// Section to mark active, `None` when the target was not found.
    pub activated: Option<String>,
    pub menu: MenuState,
}

pub fn navigate(target: &str, menu: MenuState, scroller: &impl SectionScroller) -> NavigationOutcome {
    let activated = scroller
        .scroll_to(target)
        .then(|| target.strip_prefix('#').unwrap_or(target).to_string());

    NavigationOutcome {
        activated,
        menu: menu.closed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakeScroller {
        present: Vec<&'static str>,
        scrolled: RefCell<Vec<String>>,
    }

    impl FakeScroller {
        fn with(present: Vec<&'static str>) -> Self {
            Self {
                present,
                scrolled: RefCell::new(Vec::new()),
            }
        }
    }

    impl SectionScroller for FakeScroller {
        fn scroll_to(&self, target: &str) -> bool {
            if self.present.iter().any(|id| *id == target) {
                self.scrolled.borrow_mut().push(target.to_string());
                true
            } else {
                false
            }
        }
    }

    #[test]
    fn toggle_strictly_alternates() {
        let mut menu = MenuState::default();
        let mut history = Vec::new();
        for _ in 0..4 {
            menu = menu.toggled();
            history.push(menu.is_open());
        }
        assert_eq!(history, [true, false, true, false]);
    }

    #[test]
    fn navigate_to_present_section_activates_and_scrolls() {
        let scroller = FakeScroller::with(vec!["#about"]);
        let outcome = navigate("#about", MenuState::Open, &scroller);

        assert_eq!(outcome.activated.as_deref(), Some("about"));
        assert_eq!(outcome.menu, MenuState::Closed);
        assert_eq!(*scroller.scrolled.borrow(), ["#about"]);
    }

    #[test]
    fn navigate_to_missing_section_still_closes_menu() {
        let scroller = FakeScroller::with(Vec::new());
        let outcome = navigate("#home", MenuState::Open, &scroller);

        assert_eq!(outcome.activated, None);
        assert_eq!(outcome.menu, MenuState::Closed);
        assert!(scroller.scrolled.borrow().is_empty());
    }

    #[test]
    fn closing_a_closed_menu_is_a_no_op() {
        let scroller = FakeScroller::with(vec!["#contact"]);
        let first = navigate("#contact", MenuState::Closed, &scroller);
        let second = navigate("#contact", first.menu, &scroller);

        assert_eq!(first.menu, MenuState::Closed);
        assert_eq!(second, first);
    }
}
