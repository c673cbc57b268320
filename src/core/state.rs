//! # Application State
//!
//! Core state for the documentation browser. This module contains domain
//! logic only - no TUI-specific types. Presentation state (scroll offsets,
//! list highlights) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── registry: PageRegistry    // ordered name → render mapping
//! ├── selected: String          // current page name
//! └── status_message: String    // transient diagnostic line
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs,
//! and through [`App::resolve_current`], which is the one place the
//! unknown-page fallback lives.

use log::warn;

use crate::core::registry::PageRegistry;
use crate::core::surface::RenderFn;

pub struct App {
    pub registry: PageRegistry,
    /// Name of the page currently shown. Always a registered name after
    /// `resolve_current` has run.
    pub selected: String,
    /// Diagnostic line shown in the title bar; cleared on navigation.
    pub status_message: String,
}

impl App {
    /// Build the core state. A `start_page` that is `None` or unknown lands
    /// on the first registered page; unknown names leave a diagnostic.
    pub fn new(registry: PageRegistry, start_page: Option<&str>) -> Self {
        let first = registry.first().unwrap_or_default().to_string();
        let mut app = Self {
            registry,
            selected: start_page.map(str::to_string).unwrap_or(first),
            status_message: String::new(),
        };
        app.resolve_current();
        app
    }

    /// Resolve the current selection to its render routine.
    ///
    /// An unknown selection is recoverable: fall back to the first
    /// registered page and leave a diagnostic in the status line. A single
    /// bad selection must not take down the session.
    pub fn resolve_current(&mut self) -> Option<RenderFn> {
        match self.registry.select(&self.selected) {
            Ok(action) => Some(action),
            Err(err) => {
                let first = self.registry.first()?.to_string();
                warn!("{err}; falling back to {first:?}");
                self.status_message = format!("{err}, showing {first}");
                self.selected = first;
                self.registry.select(&self.selected).ok()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_registry, test_app};

    #[test]
    fn defaults_to_first_registered_page() {
        let app = test_app();
        assert_eq!(app.selected, "Home");
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn known_start_page_is_honored() {
        let app = App::new(sample_registry(), Some("FAQs"));
        assert_eq!(app.selected, "FAQs");
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn unknown_start_page_falls_back_with_diagnostic() {
        let app = App::new(sample_registry(), Some("Missing"));
        assert_eq!(app.selected, "Home");
        assert!(app.status_message.contains("Missing"));
        assert!(app.status_message.contains("Home"));
    }

    #[test]
    fn resolve_current_returns_an_action_for_valid_selection() {
        let mut app = test_app();
        assert!(app.resolve_current().is_some());
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn resolve_current_recovers_from_corrupted_selection() {
        let mut app = test_app();
        app.selected = "Corrupted".to_string();
        assert!(app.resolve_current().is_some());
        assert_eq!(app.selected, "Home");
        assert!(app.status_message.contains("Corrupted"));
    }
}
