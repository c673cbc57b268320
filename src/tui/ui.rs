//! Frame layout: title bar across the top, navigation sidebar on the left,
//! scrollable page content on the right.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Block, PageView, Sidebar, TitleBar};

/// Wide enough for the longest page name plus its position tag and the
/// sidebar borders.
const SIDEBAR_WIDTH: u16 = 32;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, blocks: &[Block]) {
    use Constraint::{Length, Min};
    let [title_area, body_area] = Layout::vertical([Length(1), Min(0)]).areas(frame.area());
    let [sidebar_area, content_area] =
        Layout::horizontal([Length(SIDEBAR_WIDTH), Min(0)]).areas(body_area);

    TitleBar::new(app.selected.clone(), app.status_message.clone()).render(frame, title_area);
    Sidebar::new(&mut tui.sidebar).render(frame, sidebar_area);
    PageView::new(&mut tui.page_view, blocks, &tui.syntax_theme).render(frame, content_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DEFAULT_SYNTAX_THEME;
    use crate::core::registry;
    use crate::test_support::test_app;
    use crate::tui::components::PageBuffer;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn draw_ui_renders_title_sidebar_and_content() {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = test_app();
        let mut tui = TuiState::new(&app, DEFAULT_SYNTAX_THEME.to_string());

        let mut page = PageBuffer::new();
        if let Some(action) = app.resolve_current() {
            registry::render(action, &mut page);
        }

        terminal
            .draw(|f| draw_ui(f, &app, &mut tui, &page.blocks))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("nextPay Docs"));
        assert!(text.contains("Navigation"));
        assert!(text.contains("FAQs"));
    }
}
