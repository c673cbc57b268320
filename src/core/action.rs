//! # Actions
//!
//! Every navigation input becomes an `Action`. User presses Down? That's
//! `Action::SelectNext`. A digit key? `Action::SelectIndex(n)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` telling the event loop what to do
//! next. No I/O here; drawing happens in the presentation layer.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use crate::core::state::App;

/// Everything the interaction driver can ask of the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Jump to a page by name.
    SelectPage(String),
    /// Move the selection one entry down the registration order.
    SelectNext,
    /// Move the selection one entry up the registration order.
    SelectPrev,
    /// Jump to a page by registration position.
    SelectIndex(usize),
    Quit,
}

/// What the event loop should do after a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The selection moved; re-render the page and reset scroll.
    PageChanged,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::SelectPage(name) => {
            if app.selected == name {
                return Effect::None;
            }
            app.selected = name;
            app.status_message.clear();
            // Unknown names resolve (and fall back) here rather than on the
            // next draw, so the selection is valid when the effect lands.
            app.resolve_current();
            Effect::PageChanged
        }
        Action::SelectNext => step(app, 1),
        Action::SelectPrev => step(app, -1),
        Action::SelectIndex(index) => {
            let Some(name) = app.registry.names().get(index).map(|n| n.to_string()) else {
                return Effect::None;
            };
            update(app, Action::SelectPage(name))
        }
        Action::Quit => Effect::Quit,
    }
}

/// Move the selection by one entry, saturating at the ends of the
/// registration order.
fn step(app: &mut App, delta: isize) -> Effect {
    let names = app.registry.names();
    if names.is_empty() {
        return Effect::None;
    }
    let current = app.registry.position(&app.selected).unwrap_or(0);
    let next = if delta < 0 {
        current.saturating_sub(1)
    } else {
        (current + 1).min(names.len() - 1)
    };
    if next == current {
        return Effect::None;
    }
    let name = names[next].to_string();
    update(app, Action::SelectPage(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn select_page_changes_selection() {
        let mut app = test_app();
        let effect = update(&mut app, Action::SelectPage("FAQs".to_string()));
        assert_eq!(effect, Effect::PageChanged);
        assert_eq!(app.selected, "FAQs");
    }

    #[test]
    fn reselecting_the_current_page_is_a_no_op() {
        let mut app = test_app();
        let effect = update(&mut app, Action::SelectPage("Home".to_string()));
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn unknown_page_falls_back_to_first() {
        let mut app = test_app();
        let effect = update(&mut app, Action::SelectPage("Nowhere".to_string()));
        assert_eq!(effect, Effect::PageChanged);
        assert_eq!(app.selected, "Home");
        assert!(app.status_message.contains("Nowhere"));
    }

    #[test]
    fn next_and_prev_saturate_at_the_ends() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::SelectPrev), Effect::None);
        assert_eq!(app.selected, "Home");

        assert_eq!(update(&mut app, Action::SelectNext), Effect::PageChanged);
        assert_eq!(app.selected, "FAQs");

        // Already at the last entry.
        assert_eq!(update(&mut app, Action::SelectNext), Effect::None);
        assert_eq!(app.selected, "FAQs");

        assert_eq!(update(&mut app, Action::SelectPrev), Effect::PageChanged);
        assert_eq!(app.selected, "Home");
    }

    #[test]
    fn select_index_jumps_and_ignores_out_of_range() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::SelectIndex(1)), Effect::PageChanged);
        assert_eq!(app.selected, "FAQs");
        assert_eq!(update(&mut app, Action::SelectIndex(9)), Effect::None);
        assert_eq!(app.selected, "FAQs");
    }

    #[test]
    fn navigation_clears_the_status_line() {
        let mut app = test_app();
        app.status_message = "stale diagnostic".to_string();
        update(&mut app, Action::SelectNext);
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn quit_requests_shutdown() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
