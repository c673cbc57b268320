//! # Navigation Sidebar
//!
//! Vertical list of page names. Moving the highlight is navigation: the
//! highlighted entry is the page being shown, with no separate confirm
//! step (radio-button semantics).
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `SidebarState` lives in `TuiState`
//! - `Sidebar` is created each frame with borrowed state
//!
//! Selection movement itself lives in the core reducer; the sidebar only
//! mirrors `App::selected` and draws the highlight.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};

use crate::tui::component::Component;

/// Persistent state for the navigation sidebar.
pub struct SidebarState {
    pub pages: Vec<String>,
    pub list_state: ListState,
}

impl SidebarState {
    pub fn new(pages: Vec<String>) -> Self {
        let mut list_state = ListState::default();
        if !pages.is_empty() {
            list_state.select(Some(0));
        }
        Self { pages, list_state }
    }

    /// Move the highlight to `index`, clamped to the page list.
    pub fn select_index(&mut self, index: usize) {
        if self.pages.is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(index.min(self.pages.len() - 1)));
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }
}

/// Transient render wrapper for the sidebar.
pub struct Sidebar<'a> {
    state: &'a mut SidebarState,
}

impl<'a> Sidebar<'a> {
    pub fn new(state: &'a mut SidebarState) -> Self {
        Self { state }
    }
}

impl Component for Sidebar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let help_text = " ↑↓ Page  q Quit ";

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Navigation ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(help_text).centered())
            .padding(Padding::horizontal(1));

        if self.state.pages.is_empty() {
            let empty = Paragraph::new("No pages registered.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let selected = self.state.selected();
        let inner_width = area.width.saturating_sub(4) as usize; // borders + padding

        let items: Vec<ListItem> = self
            .state
            .pages
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let is_selected = selected == Some(i);
                let style = if is_selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };

                let index_tag = format!("{} ", i + 1);
                let name_width = inner_width.saturating_sub(index_tag.len());
                let label = truncate_str(name, name_width);

                let index_style = if is_selected {
                    style
                } else {
                    Style::default().fg(Color::DarkGray)
                };

                ListItem::new(Line::from(vec![
                    Span::styled(index_tag, index_style),
                    Span::styled(label, style),
                ]))
            })
            .collect();

        let list = List::new(items).block(block);

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// Truncate a string to fit within `max_width` chars, adding "..." if needed.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.len() <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        ".".repeat(max_width)
    } else {
        format!("{}...", &s[..max_width - 3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn pages() -> Vec<String> {
        vec!["Home".to_string(), "FAQs".to_string(), "Get Involved".to_string()]
    }

    #[test]
    fn new_highlights_the_first_page() {
        let state = SidebarState::new(pages());
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn new_with_no_pages_selects_nothing() {
        let state = SidebarState::new(vec![]);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn select_index_clamps_to_the_list() {
        let mut state = SidebarState::new(pages());
        state.select_index(1);
        assert_eq!(state.selected(), Some(1));
        state.select_index(99);
        assert_eq!(state.selected(), Some(2));
    }

    #[test]
    fn renders_page_names_with_positions() {
        let backend = TestBackend::new(32, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = SidebarState::new(pages());

        terminal
            .draw(|f| Sidebar::new(&mut state).render(f, f.area()))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Navigation"));
        assert!(text.contains("1 Home"));
        assert!(text.contains("3 Get Involved"));
    }

    #[test]
    fn long_names_are_truncated() {
        assert_eq!(truncate_str("Cross-Blockchain Payments", 10), "Cross-B...");
        assert_eq!(truncate_str("Home", 10), "Home");
        assert_eq!(truncate_str("Home", 2), "..");
    }
}
