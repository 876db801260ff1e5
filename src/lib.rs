//! Portfolio TUI - an animated terminal portfolio
//!
//! This library provides the section catalog, the reveal sequencer that
//! simulates AI tool calls, and the terminal user interface around them.

pub mod content;
pub mod sequencer;
pub mod ui;
