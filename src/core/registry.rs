//! # Page Registry
//!
//! An ordered, immutable mapping from page name to render routine. Built
//! once at startup from the literal page list; insertion order is the order
//! the sidebar presents pages in.

use std::fmt;

use crate::core::surface::{RenderFn, Surface};

/// Ordered collection of named pages.
pub struct PageRegistry {
    entries: Vec<PageEntry>,
}

struct PageEntry {
    name: String,
    render: RenderFn,
}

#[derive(Debug)]
pub enum RegistryError {
    /// Two pages registered under the same name. Fatal at startup: the
    /// registry cannot uphold its lookup contract.
    DuplicatePage(String),
    /// A selection resolved to a name that was never registered.
    /// Recoverable: the caller falls back to the first page.
    UnknownPage(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicatePage(name) => write!(f, "duplicate page name {name:?}"),
            RegistryError::UnknownPage(name) => write!(f, "unknown page {name:?}"),
        }
    }
}

impl std::error::Error for RegistryError {}

impl PageRegistry {
    /// Build a registry from an ordered list of (name, render) pairs.
    /// Fails on the first duplicated name without producing a registry.
    pub fn register(pairs: Vec<(&str, RenderFn)>) -> Result<Self, RegistryError> {
        let mut entries: Vec<PageEntry> = Vec::with_capacity(pairs.len());
        for (name, render) in pairs {
            if entries.iter().any(|e| e.name == name) {
                return Err(RegistryError::DuplicatePage(name.to_string()));
            }
            entries.push(PageEntry {
                name: name.to_string(),
                render,
            });
        }
        Ok(Self { entries })
    }

    /// Resolve a page name to its render routine. Does not invoke it.
    pub fn select(&self, name: &str) -> Result<RenderFn, RegistryError> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.render)
            .ok_or_else(|| RegistryError::UnknownPage(name.to_string()))
    }

    /// Page names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// The first registered page, which is also the fallback target.
    pub fn first(&self) -> Option<&str> {
        self.entries.first().map(|e| e.name.as_str())
    }

    /// Position of a name in registration order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Invoke a render routine exactly once, emitting its content into
/// `surface`. Rendering is side-effect only; there is nothing to return.
pub fn render(action: RenderFn, surface: &mut dyn Surface) {
    action(surface);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingSurface;

    fn page_a(out: &mut dyn Surface) {
        out.title("A");
    }

    fn page_b(out: &mut dyn Surface) {
        out.title("B");
        out.markdown("body of b");
    }

    #[test]
    fn registration_preserves_order_and_size() {
        let registry =
            PageRegistry::register(vec![("Home", page_a as RenderFn), ("FAQs", page_b)]).unwrap();
        assert_eq!(registry.names(), vec!["Home", "FAQs"]);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.first(), Some("Home"));
        assert_eq!(registry.position("FAQs"), Some(1));
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let result = PageRegistry::register(vec![
            ("Home", page_a as RenderFn),
            ("FAQs", page_b),
            ("Home", page_b),
        ]);
        assert!(matches!(result, Err(RegistryError::DuplicatePage(ref name)) if name == "Home"));
    }

    #[test]
    fn select_returns_the_registered_action() {
        let registry =
            PageRegistry::register(vec![("Home", page_a as RenderFn), ("FAQs", page_b)]).unwrap();
        let action = registry.select("FAQs").unwrap();

        let mut recorder = RecordingSurface::default();
        render(action, &mut recorder);
        assert_eq!(recorder.events, vec!["title:B", "markdown:body of b"]);
    }

    #[test]
    fn unknown_name_fails_without_rendering() {
        let registry = PageRegistry::register(vec![("Home", page_a as RenderFn)]).unwrap();
        match registry.select("Missing") {
            Err(RegistryError::UnknownPage(name)) => assert_eq!(name, "Missing"),
            _ => panic!("expected UnknownPage"),
        }
    }

    #[test]
    fn render_is_repeatable() {
        let registry = PageRegistry::register(vec![("Home", page_b as RenderFn)]).unwrap();
        let action = registry.select("Home").unwrap();

        let mut first = RecordingSurface::default();
        let mut second = RecordingSurface::default();
        render(action, &mut first);
        render(action, &mut second);
        assert_eq!(first.events, second.events);
        assert_eq!(first.events.iter().filter(|e| e.starts_with("title:")).count(), 1);
    }

    #[test]
    fn empty_registry_is_allowed() {
        let registry = PageRegistry::register(vec![]).unwrap();
        assert!(registry.is_empty());
        assert_eq!(registry.first(), None);
    }
}
