//! # Built-in Page Content
//!
//! The copy deck, compiled in. Each page is a render routine that emits
//! literal titles, headings, markdown prose, and image references through
//! the [`Surface`](crate::core::surface::Surface) primitives. Nothing here
//! is computed and nothing here knows how the content is displayed.

mod anon_aadhaar;
mod cross_chain;
mod faqs;
mod get_involved;
mod home;
mod roadmap;
mod soundbox;

use crate::core::surface::RenderFn;

/// The built-in pages, in sidebar order.
pub fn pages() -> Vec<(&'static str, RenderFn)> {
    vec![
        ("Home", home::render as RenderFn),
        ("Anon Aadhaar", anon_aadhaar::render),
        ("Cross-Blockchain Payments", cross_chain::render),
        ("Soundbox", soundbox::render),
        ("Competition and Roadmap", roadmap::render),
        ("FAQs", faqs::render),
        ("Get Involved", get_involved::render),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::PageRegistry;
    use crate::test_support::RecordingSurface;

    #[test]
    fn seven_pages_with_unique_names_register_cleanly() {
        let registry = PageRegistry::register(pages()).unwrap();
        assert_eq!(registry.len(), 7);
        assert_eq!(registry.first(), Some("Home"));
    }

    #[test]
    fn every_page_emits_a_title_first() {
        for (name, render) in pages() {
            let mut recorder = RecordingSurface::default();
            render(&mut recorder);
            assert!(
                recorder.events.first().is_some_and(|e| e.starts_with("title:")),
                "page {name:?} should open with a title"
            );
        }
    }

    #[test]
    fn every_page_has_body_content() {
        for (name, render) in pages() {
            let mut recorder = RecordingSurface::default();
            render(&mut recorder);
            assert!(
                recorder.events.iter().any(|e| e.starts_with("markdown:")),
                "page {name:?} should emit prose"
            );
        }
    }
}
