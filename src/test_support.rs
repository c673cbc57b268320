//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::registry::PageRegistry;
use crate::core::state::App;
use crate::core::surface::{RenderFn, Surface};

/// Records every `Surface` call as a `kind:payload` string, in order.
#[derive(Default)]
pub struct RecordingSurface {
    pub events: Vec<String>,
}

impl Surface for RecordingSurface {
    fn title(&mut self, text: &str) {
        self.events.push(format!("title:{text}"));
    }

    fn heading(&mut self, text: &str) {
        self.events.push(format!("heading:{text}"));
    }

    fn markdown(&mut self, body: &str) {
        self.events.push(format!("markdown:{body}"));
    }

    fn image(&mut self, path: &str, caption: Option<&str>) {
        self.events
            .push(format!("image:{path}:{}", caption.unwrap_or("")));
    }
}

fn home_page(out: &mut dyn Surface) {
    out.title("A");
}

fn faqs_page(out: &mut dyn Surface) {
    out.title("B");
    out.markdown("body of b");
}

/// Two-page registry used by core tests: ["Home", "FAQs"].
pub fn sample_registry() -> PageRegistry {
    PageRegistry::register(vec![("Home", home_page as RenderFn), ("FAQs", faqs_page)])
        .expect("sample registry has unique names")
}

/// Creates a test App over the sample registry, starting at "Home".
pub fn test_app() -> App {
    App::new(sample_registry(), None)
}
