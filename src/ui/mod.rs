//! # UI Module
//!
//! Terminal user interface for the portfolio.
//!
//! ## Components
//!
//! - [`App`] - Application state (catalog, sequencer, theme, navigation)
//! - [`mod@render`] - Rendering functions for drawing the TUI
//!
//! ## Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              Header (name, tagline)              │
//! ├─────────────────────┬───────────────────────────┤
//! │                     │                           │
//! │    Agent Panel      │      STDOUT Panel         │
//! │  (tool-call list)   │  (logs + tool result)     │
//! │                     │                           │
//! ├─────────────────────┴───────────────────────────┤
//! │                 Response Panel                   │
//! │        (typing indicator, streamed body)         │
//! ├─────────────────────────────────────────────────┤
//! │                    Footer                        │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! With no active section, the body shows the navigation row instead.

pub mod app;
pub mod config;
pub mod render;
pub mod theme;

pub use app::App;
pub use render::render;
