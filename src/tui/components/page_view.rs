//! # Page View Component
//!
//! Scrollable pane for the rendered page. The page is rebuilt from its
//! literal content on every interaction cycle; only scroll geometry
//! survives between frames, so there is no layout cache to invalidate.
//!
//! `PageBuffer` is the `Surface` implementation the router renders into:
//! each primitive call becomes one typed [`Block`], and the view lays the
//! blocks out top to bottom inside a `ScrollView`.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::surface::Surface;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::markdown;

/// One typed chunk of page output, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Title(String),
    Heading(String),
    Markdown(String),
    Image { path: String, caption: Option<String> },
}

/// Collects a page's `Surface` emissions into typed blocks.
#[derive(Debug, Default)]
pub struct PageBuffer {
    pub blocks: Vec<Block>,
}

impl PageBuffer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for PageBuffer {
    fn title(&mut self, text: &str) {
        self.blocks.push(Block::Title(text.to_string()));
    }

    fn heading(&mut self, text: &str) {
        self.blocks.push(Block::Heading(text.to_string()));
    }

    fn markdown(&mut self, body: &str) {
        self.blocks.push(Block::Markdown(body.to_string()));
    }

    fn image(&mut self, path: &str, caption: Option<&str>) {
        self.blocks.push(Block::Image {
            path: path.to_string(),
            caption: caption.map(str::to_string),
        });
    }
}

/// Scroll state persisted across frames.
pub struct PageViewState {
    pub scroll_state: ScrollViewState,
    /// Total content height measured during the last render.
    content_height: u16,
    /// Last known viewport height (for scroll clamping between frames).
    viewport_height: u16,
}

impl Default for PageViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl PageViewState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            content_height: 0,
            viewport_height: 0,
        }
    }

    /// Jump back to the top of the page. Called on page change.
    pub fn reset(&mut self) {
        self.scroll_state.set_offset(Position { x: 0, y: 0 });
    }

    /// Clamp the scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        let offset = self.scroll_state.offset();
        if offset.y > max_y {
            self.scroll_state.set_offset(Position {
                x: offset.x,
                y: max_y,
            });
        }
    }
}

impl EventHandler for PageViewState {
    type Event = (); // Scrolling is handled internally; nothing to emit.

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.clamp_scroll();
            }
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.clamp_scroll();
            }
            TuiEvent::ScrollToTop => self.reset(),
            TuiEvent::ScrollToBottom => self.scroll_state.scroll_to_bottom(),
            _ => {}
        }
        None
    }
}

/// Transient render wrapper over the current page's blocks.
pub struct PageView<'a> {
    state: &'a mut PageViewState,
    blocks: &'a [Block],
    syntax_theme: &'a str,
}

impl<'a> PageView<'a> {
    pub fn new(state: &'a mut PageViewState, blocks: &'a [Block], syntax_theme: &'a str) -> Self {
        Self {
            state,
            blocks,
            syntax_theme,
        }
    }
}

impl Component for PageView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // scrollbar gutter

        let rendered: Vec<(Paragraph<'static>, u16)> = self
            .blocks
            .iter()
            .map(|block| build_block(block, content_width, self.syntax_theme))
            .collect();
        let total_height: u16 = rendered.iter().map(|(_, h)| *h).sum();

        self.state.content_height = total_height;
        self.state.viewport_height = area.height;
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height.max(1)))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for (paragraph, height) in rendered {
            scroll_view.render_widget(paragraph, Rect::new(0, y_offset, content_width, height));
            y_offset += height;
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

/// Turn one block into a widget plus its wrapped height at `width`.
fn build_block(block: &Block, width: u16, syntax_theme: &str) -> (Paragraph<'static>, u16) {
    let paragraph = match block {
        Block::Title(text) => Paragraph::new(vec![
            Line::from(Span::styled(
                text.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )),
            Line::default(),
        ])
        .wrap(Wrap { trim: false }),
        Block::Heading(text) => Paragraph::new(vec![
            Line::default(),
            Line::from(Span::styled(
                text.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
        ])
        .wrap(Wrap { trim: false }),
        Block::Markdown(body) => {
            Paragraph::new(markdown::render(body, Color::Gray, syntax_theme))
                .wrap(Wrap { trim: false })
        }
        Block::Image { path, caption } => image_placeholder(path, caption.as_deref()),
    };

    let height = paragraph.line_count(width) as u16;
    (paragraph, height)
}

/// Framed stand-in for an image asset: the path, plus the caption when one
/// exists. Asset decoding is out of scope for a terminal surface.
fn image_placeholder(path: &str, caption: Option<&str>) -> Paragraph<'static> {
    let frame_style = Style::default().fg(Color::DarkGray);

    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled("┌─ image", frame_style)),
        Line::from(vec![
            Span::styled("│ ", frame_style),
            Span::styled(path.to_string(), Style::default().fg(Color::Blue)),
        ]),
    ];
    if let Some(caption) = caption {
        lines.push(Line::from(vec![
            Span::styled("│ ", frame_style),
            Span::styled(
                caption.to_string(),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]));
    }
    lines.push(Line::from(Span::styled("└──", frame_style)));

    Paragraph::new(lines).wrap(Wrap { trim: false })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DEFAULT_SYNTAX_THEME;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn buffer_with(blocks: Vec<Block>) -> PageBuffer {
        PageBuffer { blocks }
    }

    #[test]
    fn page_buffer_records_emissions_in_order() {
        let mut page = PageBuffer::new();
        page.title("T");
        page.image("Assets/a.png", Some("cap"));
        page.markdown("body");
        assert_eq!(
            page.blocks,
            vec![
                Block::Title("T".to_string()),
                Block::Image {
                    path: "Assets/a.png".to_string(),
                    caption: Some("cap".to_string()),
                },
                Block::Markdown("body".to_string()),
            ]
        );
    }

    #[test]
    fn title_block_height_includes_trailing_gap() {
        let (_, height) = build_block(
            &Block::Title("Hello".to_string()),
            80,
            DEFAULT_SYNTAX_THEME,
        );
        assert_eq!(height, 2);
    }

    #[test]
    fn image_placeholder_shows_path_and_caption() {
        let page = buffer_with(vec![Block::Image {
            path: "Assets/soundbox/shot.png".to_string(),
            caption: Some("Waiting For Transaction".to_string()),
        }]);

        let backend = TestBackend::new(60, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = PageViewState::new();
        terminal
            .draw(|f| {
                PageView::new(&mut state, &page.blocks, DEFAULT_SYNTAX_THEME).render(f, f.area())
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Assets/soundbox/shot.png"));
        assert!(text.contains("Waiting For Transaction"));
    }

    #[test]
    fn scroll_events_move_and_clamp_the_offset() {
        let mut state = PageViewState::new();
        state.content_height = 100;
        state.viewport_height = 20;

        state.handle_event(&TuiEvent::ScrollDown);
        assert_eq!(state.scroll_state.offset().y, 1);

        state.handle_event(&TuiEvent::ScrollToBottom);
        state.handle_event(&TuiEvent::ScrollToTop);
        assert_eq!(state.scroll_state.offset().y, 0);

        // Offsets past the content bounds snap back.
        state.scroll_state.set_offset(Position { x: 0, y: 500 });
        state.clamp_scroll();
        assert_eq!(state.scroll_state.offset().y, 80);
    }

    #[test]
    fn render_resets_nothing_between_identical_frames() {
        let page = buffer_with(vec![
            Block::Title("T".to_string()),
            Block::Markdown("one paragraph".to_string()),
        ]);

        let backend = TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = PageViewState::new();

        for _ in 0..2 {
            terminal
                .draw(|f| {
                    PageView::new(&mut state, &page.blocks, DEFAULT_SYNTAX_THEME)
                        .render(f, f.area())
                })
                .unwrap();
        }

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains('T'));
        assert!(text.contains("one paragraph"));
    }
}
