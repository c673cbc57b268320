//! # Output Surface
//!
//! Pages never touch the terminal. They emit titled sections, markdown
//! prose, and image references through this trait, and the presentation
//! layer decides what those calls turn into. Every call is an opaque side
//! effect with no return value, so the same page renders unchanged into a
//! terminal pane or a test recorder.

/// Host-provided content primitives a page renders through.
pub trait Surface {
    /// The page title. Every built-in page emits exactly one, first.
    fn title(&mut self, text: &str);

    /// A section heading within the page.
    fn heading(&mut self, text: &str);

    /// A body of markdown prose (paragraphs, lists, fenced code, links).
    fn markdown(&mut self, body: &str);

    /// A reference to an image asset by path, with an optional caption.
    fn image(&mut self, path: &str, caption: Option<&str>);
}

/// A page render routine: a straight-line emission of literal content.
///
/// Plain function pointers, not closures: pages carry no state, and the
/// registry can hand them out by value.
pub type RenderFn = fn(&mut dyn Surface);
