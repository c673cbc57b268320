//! # TUI Components
//!
//! Components follow two patterns, both carried through the module:
//!
//! - **Stateless (props-based)**: `TitleBar` receives everything it shows
//!   as fields and holds no state of its own.
//! - **Persistent state + transient wrapper**: `SidebarState` and
//!   `PageViewState` live in `TuiState` across frames; `Sidebar` and
//!   `PageView` are created each frame around borrowed state.
//!
//! Each component file contains its state types, rendering logic, and
//! tests.

pub mod page_view;
pub mod sidebar;
pub mod title_bar;

pub use page_view::{Block, PageBuffer, PageView, PageViewState};
pub use sidebar::{Sidebar, SidebarState};
pub use title_bar::TitleBar;
