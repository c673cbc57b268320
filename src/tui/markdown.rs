//! Markdown → ratatui `Text` renderer.
//!
//! Walks the `pulldown_cmark` event stream and emits styled `Line`/`Span`
//! values. Covers what the page copy actually uses: headings, bold and
//! italic, inline code, fenced code blocks (syntect-highlighted when the
//! language is known), nested lists, links, and rules. Raw HTML, tables,
//! and footnotes are skipped.

use std::sync::LazyLock;

use pulldown_cmark::{CodeBlockKind, CowStr, Event, HeadingLevel, Parser, Tag, TagEnd};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::core::config::DEFAULT_SYNTAX_THEME;

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

/// Shared style for structural glyphs (code frames, rules, list markers).
fn border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Parse markdown into styled `Text`.
///
/// Returns owned text (`'static`) so callers aren't constrained by input
/// lifetime. `syntax_theme` names a syntect theme; unknown names fall back
/// to the bundled default rather than failing.
pub fn render(content: &str, base_fg: Color, syntax_theme: &str) -> Text<'static> {
    let mut renderer = Renderer::new(base_fg, syntax_theme);
    for event in Parser::new(content) {
        renderer.handle(event);
    }
    renderer.text
}

/// Look up a syntect theme by name, falling back to the bundled default.
fn code_theme(name: &str) -> &'static Theme {
    THEME_SET
        .themes
        .get(name)
        .unwrap_or_else(|| &THEME_SET.themes[DEFAULT_SYNTAX_THEME])
}

struct Renderer<'a> {
    text: Text<'static>,
    base_fg: Color,
    syntax_theme: &'a str,
    /// Inline style stack (bold, italic, heading text). Styles compose via
    /// `patch` so nested bold+italic works.
    styles: Vec<Style>,
    /// List nesting: None = unordered, Some(n) = ordered at index n.
    list_stack: Vec<Option<u64>>,
    /// Active syntax highlighter for the current fenced code block.
    highlighter: Option<HighlightLines<'static>>,
    /// True while inside a fenced code block (highlighted or not); code
    /// lines get a `│ ` gutter.
    in_code: bool,
    /// Stored link URL, appended after the link text closes.
    link_url: Option<String>,
    /// Whether the next block element should be preceded by a blank line.
    gap_pending: bool,
    /// A list item just opened and its marker line is still empty; the
    /// item's first paragraph continues on that line instead of a new one.
    item_fresh: bool,
}

impl<'a> Renderer<'a> {
    fn new(base_fg: Color, syntax_theme: &'a str) -> Self {
        Self {
            text: Text::default(),
            base_fg,
            syntax_theme,
            styles: vec![],
            list_stack: vec![],
            highlighter: None,
            in_code: false,
            link_url: None,
            gap_pending: false,
            item_fresh: false,
        }
    }

    // ── Style helpers ───────────────────────────────────────────────────

    /// Current effective style: top of stack, or base foreground color.
    fn style(&self) -> Style {
        self.styles
            .last()
            .copied()
            .unwrap_or_else(|| Style::default().fg(self.base_fg))
    }

    /// Push a style that composes with the current one.
    fn push_style(&mut self, overlay: Style) {
        self.styles.push(self.style().patch(overlay));
    }

    fn pop_style(&mut self) {
        self.styles.pop();
    }

    // ── Line/span helpers ───────────────────────────────────────────────

    fn push_line(&mut self, line: Line<'static>) {
        let mut out = line;
        if self.in_code {
            out.spans.insert(0, Span::styled("│ ", border_style()));
        }
        self.text.lines.push(out);
    }

    fn push_span(&mut self, span: Span<'static>) {
        if let Some(line) = self.text.lines.last_mut() {
            line.push_span(span);
        } else {
            self.push_line(Line::from(vec![span]));
        }
    }

    fn gap(&mut self) {
        if self.gap_pending {
            self.text.lines.push(Line::default());
            self.gap_pending = false;
        }
    }

    // ── Event dispatch ──────────────────────────────────────────────────

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.finish(tag),
            Event::Text(t) => self.text(t),
            Event::Code(c) => self.inline_code(c),
            Event::SoftBreak => self.push_span(Span::raw(" ")),
            Event::HardBreak => self.push_line(Line::default()),
            Event::Rule => {
                self.gap();
                self.push_line(Line::from(Span::styled("─".repeat(32), border_style())));
                self.gap_pending = true;
            }
            _ => {} // HTML, footnotes, math
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {
                if self.item_fresh {
                    self.item_fresh = false;
                } else {
                    self.gap();
                    self.push_line(Line::default());
                }
            }
            Tag::Heading { level, .. } => {
                self.item_fresh = false;
                self.gap();
                self.push_line(Line::default());
                self.push_style(heading_style(self.base_fg, level));
            }
            Tag::CodeBlock(kind) => self.open_code_block(&kind),
            Tag::List(start) => {
                if self.list_stack.is_empty() {
                    self.gap();
                }
                self.list_stack.push(start);
            }
            Tag::Item => {
                self.gap_pending = false;
                self.push_line(Line::default());
                let depth = self.list_stack.len().saturating_sub(1);
                let indent = "  ".repeat(depth);
                if let Some(index) = self.list_stack.last_mut() {
                    let marker = match index {
                        None => format!("{indent}- "),
                        Some(n) => {
                            let m = format!("{indent}{n}. ");
                            *n += 1;
                            m
                        }
                    };
                    self.push_span(Span::styled(marker, border_style()));
                }
                self.item_fresh = true;
            }
            Tag::Emphasis => self.push_style(Style::default().add_modifier(Modifier::ITALIC)),
            Tag::Strong => self.push_style(Style::default().add_modifier(Modifier::BOLD)),
            Tag::Link { dest_url, .. } => {
                self.link_url = Some(dest_url.to_string());
                self.push_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::UNDERLINED),
                );
            }
            _ => {} // Tables, images, blockquotes, definitions
        }
    }

    fn finish(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => self.gap_pending = true,
            TagEnd::Heading(_) => {
                self.pop_style();
                self.gap_pending = true;
            }
            TagEnd::CodeBlock => {
                self.highlighter = None;
                self.in_code = false;
                self.push_line(Line::from(Span::styled("└──", border_style())));
                self.gap_pending = true;
            }
            TagEnd::List(_) => {
                self.list_stack.pop();
                if self.list_stack.is_empty() {
                    self.gap_pending = true;
                }
            }
            TagEnd::Item => self.item_fresh = false,
            TagEnd::Emphasis | TagEnd::Strong => self.pop_style(),
            TagEnd::Link => {
                self.pop_style();
                if let Some(url) = self.link_url.take() {
                    self.push_span(Span::raw(" ("));
                    self.push_span(Span::styled(
                        url,
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::UNDERLINED),
                    ));
                    self.push_span(Span::raw(")"));
                }
            }
            _ => {}
        }
    }

    // ── Content handlers ────────────────────────────────────────────────

    fn open_code_block(&mut self, kind: &CodeBlockKind<'_>) {
        self.item_fresh = false;
        self.gap();
        let lang = match kind {
            CodeBlockKind::Fenced(l) => l.as_ref(),
            CodeBlockKind::Indented => "",
        };

        let header = if lang.is_empty() {
            Line::from(Span::styled("┌──", border_style()))
        } else {
            Line::from(vec![
                Span::styled("┌─ ", border_style()),
                Span::styled(lang.to_owned(), border_style().add_modifier(Modifier::BOLD)),
            ])
        };
        self.push_line(header);
        self.in_code = true;

        if !lang.is_empty()
            && let Some(syntax) = SYNTAX_SET.find_syntax_by_token(lang)
        {
            self.highlighter = Some(HighlightLines::new(syntax, code_theme(self.syntax_theme)));
        }
    }

    fn text(&mut self, cow: CowStr<'_>) {
        self.item_fresh = false;

        // ratatui renders \t as zero-width; expand to spaces up front.
        let raw = cow.to_string();
        let text = if raw.contains('\t') {
            raw.replace('\t', "    ")
        } else {
            raw
        };

        if self.in_code {
            self.code_text(&text);
            return;
        }

        let style = self.style();
        self.push_span(Span::styled(text, style));
    }

    /// Code block content: one output line per input line, highlighted if a
    /// grammar matched the fence language.
    fn code_text(&mut self, text: &str) {
        // Take the highlighter out while pushing lines: highlight_line
        // borrows it and push_line borrows self.
        if let Some(mut highlighter) = self.highlighter.take() {
            for line in LinesWithEndings::from(text) {
                if let Ok(ranges) = highlighter.highlight_line(line, &SYNTAX_SET) {
                    let spans: Vec<Span<'static>> = ranges
                        .into_iter()
                        .filter_map(|(hl_style, fragment)| {
                            let content = fragment.trim_end_matches('\n').to_owned();
                            if content.is_empty() {
                                return None;
                            }
                            let fg = Color::Rgb(
                                hl_style.foreground.r,
                                hl_style.foreground.g,
                                hl_style.foreground.b,
                            );
                            Some(Span::styled(content, Style::default().fg(fg)))
                        })
                        .collect();
                    self.push_line(Line::from(spans));
                }
            }
            self.highlighter = Some(highlighter);
            return;
        }

        let code_style = Style::default().fg(Color::White);
        for line in text.lines() {
            self.push_line(Line::from(Span::styled(line.to_owned(), code_style)));
        }
    }

    fn inline_code(&mut self, cow: CowStr<'_>) {
        let style = Style::default().fg(Color::White).bg(Color::DarkGray);
        self.push_span(Span::styled(cow.to_string(), style));
    }
}

fn heading_style(base_fg: Color, level: HeadingLevel) -> Style {
    match level {
        HeadingLevel::H1 => Style::default()
            .fg(base_fg)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        HeadingLevel::H2 => Style::default().fg(base_fg).add_modifier(Modifier::BOLD),
        _ => Style::default()
            .fg(base_fg)
            .add_modifier(Modifier::BOLD | Modifier::ITALIC),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn heading_text_carries_heading_style() {
        let text = render("## Hello", Color::Blue, DEFAULT_SYNTAX_THEME);
        let line = &text.lines[0];
        let span = line.spans.iter().find(|s| s.content == "Hello").unwrap();
        assert!(span.style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(span.style.fg, Some(Color::Blue));
    }

    #[test]
    fn bold_text_is_bold() {
        let text = render("Some **bold** text", Color::Blue, DEFAULT_SYNTAX_THEME);
        let line = &text.lines[0];
        let bold_span = line.spans.iter().find(|s| s.content == "bold").unwrap();
        assert!(bold_span.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn inline_code_styled() {
        let text = render("Use `verify()` here", Color::Blue, DEFAULT_SYNTAX_THEME);
        let line = &text.lines[0];
        let code_span = line.spans.iter().find(|s| s.content == "verify()").unwrap();
        assert_eq!(code_span.style.fg, Some(Color::White));
        assert_eq!(code_span.style.bg, Some(Color::DarkGray));
    }

    #[test]
    fn code_block_is_framed_with_a_gutter() {
        let text = render("```\nline1\nline2\n```", Color::Blue, DEFAULT_SYNTAX_THEME);
        let all: Vec<String> = text.lines.iter().map(line_text).collect();
        assert!(all[0].starts_with('┌'), "expected header, got {:?}", all[0]);
        assert!(all[1].starts_with("│ ") && all[1].contains("line1"));
        assert!(all[2].starts_with("│ ") && all[2].contains("line2"));
        assert!(all.last().unwrap().starts_with('└'));
    }

    #[test]
    fn fence_language_appears_in_the_header() {
        let text = render(
            "```bash\ngit clone repo\n```",
            Color::Blue,
            DEFAULT_SYNTAX_THEME,
        );
        assert!(line_text(&text.lines[0]).contains("bash"));
    }

    #[test]
    fn unknown_theme_falls_back_without_panicking() {
        let text = render("```rust\nfn x() {}\n```", Color::Blue, "not-a-theme");
        assert!(text.lines.iter().any(|l| line_text(l).contains("fn x()")));
    }

    #[test]
    fn unknown_fence_language_renders_plain() {
        let text = render("```solidity\npragma solidity;\n```", Color::Blue, DEFAULT_SYNTAX_THEME);
        assert!(
            text.lines
                .iter()
                .any(|l| line_text(l).contains("pragma solidity;"))
        );
    }

    #[test]
    fn list_items_get_markers() {
        let text = render("- first\n- second", Color::Blue, DEFAULT_SYNTAX_THEME);
        let all: Vec<String> = text.lines.iter().map(line_text).collect();
        assert!(all.iter().any(|l| l.starts_with("- ") && l.contains("first")));
        assert!(all.iter().any(|l| l.starts_with("- ") && l.contains("second")));
    }

    #[test]
    fn loose_list_paragraph_stays_on_the_marker_line() {
        // Blank lines between items make the list "loose": items wrap their
        // text in paragraphs, which must not break away from the marker.
        let text = render("1. first\n\n2. second\n", Color::Blue, DEFAULT_SYNTAX_THEME);
        let all: Vec<String> = text.lines.iter().map(line_text).collect();
        assert!(all.iter().any(|l| l.starts_with("1. ") && l.contains("first")));
        assert!(all.iter().any(|l| l.starts_with("2. ") && l.contains("second")));
    }

    #[test]
    fn ordered_list_counts_up() {
        let text = render("1. one\n2. two", Color::Blue, DEFAULT_SYNTAX_THEME);
        let all: Vec<String> = text.lines.iter().map(line_text).collect();
        assert!(all.iter().any(|l| l.starts_with("1. ")));
        assert!(all.iter().any(|l| l.starts_with("2. ")));
    }

    #[test]
    fn link_url_is_appended_after_the_text() {
        let text = render(
            "[nextPay](https://github.com/nextPay/nextPay)",
            Color::Blue,
            DEFAULT_SYNTAX_THEME,
        );
        let flat: String = text.lines.iter().map(line_text).collect();
        assert!(flat.contains("nextPay (https://github.com/nextPay/nextPay)"));
    }

    #[test]
    fn tabs_expanded_to_spaces() {
        let text = render("```\n\tindented\n```", Color::Blue, DEFAULT_SYNTAX_THEME);
        let has_tabs = text
            .lines
            .iter()
            .any(|l| l.spans.iter().any(|s| s.content.contains('\t')));
        assert!(!has_tabs, "no raw tabs should remain");
    }

    #[test]
    fn plain_text_uses_base_color() {
        let text = render("hello", Color::Green, DEFAULT_SYNTAX_THEME);
        let span = &text.lines[0].spans[0];
        assert_eq!(span.style.fg, Some(Color::Green));
    }
}
