//! # TitleBar Component
//!
//! Top status bar: application name, the page currently shown, and the
//! router's transient diagnostic when one is set.
//!
//! Purely presentational; all fields are props from core state.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

pub struct TitleBar {
    /// Name of the page currently shown.
    pub page_name: String,
    /// Diagnostic line (e.g. an unknown-page fallback notice). Empty when
    /// there is nothing to report.
    pub status_message: String,
}

impl TitleBar {
    pub fn new(page_name: String, status_message: String) -> Self {
        Self {
            page_name,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if self.status_message.is_empty() {
            format!("nextPay Docs | {}", self.page_name)
        } else {
            format!("nextPay Docs | {} | {}", self.page_name, self.status_message)
        };

        frame.render_widget(Span::raw(title_text), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn shows_the_current_page() {
        let mut title_bar = TitleBar::new("Home".to_string(), String::new());
        let text = draw(&mut title_bar);
        assert!(text.contains("nextPay Docs"));
        assert!(text.contains("Home"));
        assert!(!text.contains("| |"));
    }

    #[test]
    fn appends_the_status_message_when_present() {
        let mut title_bar = TitleBar::new(
            "Home".to_string(),
            "unknown page \"Missing\", showing Home".to_string(),
        );
        let text = draw(&mut title_bar);
        assert!(text.contains("Missing"));
        assert!(text.contains("showing Home"));
    }
}
