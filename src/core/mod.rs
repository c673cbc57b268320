//! # Core Application Logic
//!
//! The page router. It knows nothing about any specific UI technology:
//! pages emit content through the [`surface::Surface`] trait, and the
//! presentation layer decides what those emissions become.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • registry (dispatch)  │
//!                    │  • state (App)          │
//!                    │  • action (reducer)     │
//!                    │  • config (layering)    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                        ┌──────────────┐
//!                        │     TUI      │
//!                        │   Adapter    │
//!                        │  (ratatui)   │
//!                        └──────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`registry`]: ordered page registry and dispatch
//! - [`surface`]: the content primitives pages render through
//! - [`state`]: the `App` struct — selection and status in one place
//! - [`action`]: the `Action` enum and `update()` reducer
//! - [`config`]: layered TOML configuration

pub mod action;
pub mod config;
pub mod registry;
pub mod state;
pub mod surface;
