//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! The core router would drive any other presentation surface unchanged.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only draws when something happened: an
//! input event, a resize, or a page change. Idle, it sleeps in `poll` for
//! up to 500ms per pass. Every draw is one full interaction cycle: the
//! current selection is resolved through the registry and the page is
//! re-rendered from its literal content; only scroll geometry survives
//! between frames.

mod component;
pub mod components;
mod event;
pub mod markdown;
mod ui;

use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use log::{debug, info};

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::registry;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{PageBuffer, PageViewState, SidebarState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub sidebar: SidebarState,
    pub page_view: PageViewState,
    pub syntax_theme: String,
}

impl TuiState {
    pub fn new(app: &App, syntax_theme: String) -> Self {
        let mut sidebar =
            SidebarState::new(app.registry.names().iter().map(|n| n.to_string()).collect());
        if let Some(position) = app.registry.position(&app.selected) {
            sidebar.select_index(position);
        }
        Self {
            sidebar,
            page_view: PageViewState::new(),
            syntax_theme,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Mouse capture for wheel scrolling; the cursor stays hidden since
        // there is no text input.
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

pub fn run(mut app: App, config: &ResolvedConfig) -> std::io::Result<()> {
    let mut tui = TuiState::new(&app, config.syntax_theme.clone());

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            // One interaction cycle: read the selection, resolve it through
            // the registry, re-render the page from its literals, draw.
            let mut page = PageBuffer::new();
            if let Some(action) = app.resolve_current() {
                registry::render(action, &mut page);
            }
            // The fallback may have moved the selection; keep the sidebar
            // highlight in step.
            if let Some(position) = app.registry.position(&app.selected) {
                tui.sidebar.select_index(position);
            }
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, &page.blocks))?;
            needs_redraw = false;
        }

        // Process first event + drain ALL pending events before next draw
        let first_event = poll_event_timeout(Duration::from_millis(500));
        if first_event.is_some() {
            needs_redraw = true;
        }

        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                // Resize just needs a redraw (already flagged above)
                TuiEvent::Resize => {}
                TuiEvent::Quit => {
                    if update(&mut app, Action::Quit) == Effect::Quit {
                        should_quit = true;
                    }
                }
                TuiEvent::ScrollUp
                | TuiEvent::ScrollDown
                | TuiEvent::ScrollPageUp
                | TuiEvent::ScrollPageDown
                | TuiEvent::ScrollToTop
                | TuiEvent::ScrollToBottom => {
                    tui.page_view.handle_event(&event);
                }
                TuiEvent::CursorUp => {
                    apply(&mut app, &mut tui, Action::SelectPrev, &mut should_quit);
                }
                TuiEvent::CursorDown => {
                    apply(&mut app, &mut tui, Action::SelectNext, &mut should_quit);
                }
                TuiEvent::JumpTo(index) => {
                    apply(&mut app, &mut tui, Action::SelectIndex(index), &mut should_quit);
                }
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Run a navigation action through the reducer and react to its effect.
fn apply(app: &mut App, tui: &mut TuiState, action: Action, should_quit: &mut bool) {
    debug!("Dispatching {:?}", action);
    match update(app, action) {
        Effect::PageChanged => tui.page_view.reset(),
        Effect::Quit => *should_quit = true,
        Effect::None => {}
    }
}
