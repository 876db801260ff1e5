use crate::content::{Catalog, Section, SectionId};
use crate::sequencer::{MotionProfile, Sequencer};
use crate::ui::theme::Theme;
use std::time::Instant;

/// Spinner frames for the agent icon while a run is processing.
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct App {
    pub catalog: Catalog,
    pub sequencer: Sequencer,
    pub theme: Theme,
    /// Index into [`SectionId::ALL`] of the highlighted nav button.
    pub nav_index: usize,
    pub spinner_frame: usize,
    pub show_info: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(catalog: Catalog, profile: MotionProfile, theme: Theme) -> Self {
        Self {
            catalog,
            sequencer: Sequencer::new(profile),
            theme,
            nav_index: 0,
            spinner_frame: 0,
            show_info: false,
            should_quit: false,
        }
    }

    /// Select a section by id: toggle off if already active, otherwise
    /// (re)start its reveal run.
    pub fn select_section(&mut self, id: SectionId, now: Instant) {
        let section = self.catalog.get(id).clone();
        self.sequencer.select(&section, now);
        if let Some(pos) = SectionId::ALL.iter().position(|s| *s == id) {
            self.nav_index = pos;
        }
    }

    /// Select the section currently highlighted in the nav row.
    pub fn select_highlighted(&mut self, now: Instant) {
        self.select_section(SectionId::ALL[self.nav_index], now);
    }

    /// Escape: clear the active section and discard any in-flight run.
    pub fn clear_section(&mut self) {
        self.sequencer.clear();
    }

    pub fn active_section(&self) -> Option<&Section> {
        self.sequencer
            .active_section()
            .map(|id| self.catalog.get(id))
    }

    pub fn next_section(&mut self) {
        self.nav_index = (self.nav_index + 1) % SectionId::ALL.len();
    }

    pub fn previous_section(&mut self) {
        self.nav_index = if self.nav_index == 0 {
            SectionId::ALL.len() - 1
        } else {
            self.nav_index - 1
        };
    }

    pub fn toggle_info(&mut self) {
        self.show_info = !self.show_info;
    }

    /// Switch to the next built-in theme; returns its name for persistence.
    pub fn cycle_theme(&mut self) -> &'static str {
        let next = self.theme.next();
        self.theme = next.clone();
        next.name
    }

    /// Advance animations. Called once per event-loop iteration; returns
    /// true if the view model changed and a redraw is worthwhile.
    pub fn tick(&mut self, now: Instant) -> bool {
        let changed = self.sequencer.tick(now);
        if self.sequencer.is_running() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
            return true;
        }
        changed
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame]
    }
}
