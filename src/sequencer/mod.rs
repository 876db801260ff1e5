//! # Section Reveal Sequencer
//!
//! The state machine behind the simulated agent tool call. Selecting a
//! section plays a fixed sequence of stages:
//!
//! 1. stream the section's log lines into the terminal panel, one per delay
//! 2. reveal the structured JSON output as soon as the last line has landed
//! 3. show a typing indicator for a short spin-up delay
//! 4. stream the full content body in fixed-size character chunks
//! 5. mark the run complete
//!
//! ## Timing Model
//!
//! The sequencer never sleeps. Each in-flight run carries a single
//! `next_due` deadline; the event loop calls [`Sequencer::tick`] with the
//! current instant and any due transition is applied. Because a run owns its
//! deadline and selecting a new section replaces the run wholesale, a
//! superseded run has no timer left to fire: stale-callback bugs are ruled
//! out by construction rather than by cleanup code.
//!
//! All delays come from a [`MotionProfile`] resolved once per session, so
//! reduced-motion and compact-terminal scaling live in one place instead of
//! at every call site.

use crate::content::{Section, SectionId};
use std::time::{Duration, Instant};

/// Per-line delay while streaming terminal logs.
const LOG_STREAM_DELAY: Duration = Duration::from_millis(120);
/// How long the typing indicator shows before content starts streaming.
const TYPING_SPINUP_DELAY: Duration = Duration::from_millis(300);
/// Interval between content chunks.
const STREAM_TICK: Duration = Duration::from_millis(20);
/// Characters appended per content chunk.
const STREAM_CHUNK_CHARS: usize = 3;
/// Delay multiplier for compact terminals, matching the original site's
/// slower pacing on small screens.
const COMPACT_SCALE: f64 = 1.2;

/// Session-wide animation timings, resolved once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionProfile {
    pub log_line_delay: Duration,
    pub typing_delay: Duration,
    pub stream_tick: Duration,
    pub stream_chunk: usize,
}

impl MotionProfile {
    /// Default pacing.
    pub fn standard() -> Self {
        Self {
            log_line_delay: LOG_STREAM_DELAY,
            typing_delay: TYPING_SPINUP_DELAY,
            stream_tick: STREAM_TICK,
            stream_chunk: STREAM_CHUNK_CHARS,
        }
    }

    /// Slower pacing for constrained displays.
    pub fn compact() -> Self {
        let scale = |d: Duration| d.mul_f64(COMPACT_SCALE);
        Self {
            log_line_delay: scale(LOG_STREAM_DELAY),
            typing_delay: scale(TYPING_SPINUP_DELAY),
            stream_tick: STREAM_TICK,
            stream_chunk: STREAM_CHUNK_CHARS,
        }
    }

    /// Zero delays and whole-body reveal. Every stage still runs, so the
    /// ordering invariants are unchanged; the run just finishes within a
    /// single tick.
    pub fn reduced_motion() -> Self {
        Self {
            log_line_delay: Duration::ZERO,
            typing_delay: Duration::ZERO,
            stream_tick: Duration::ZERO,
            stream_chunk: usize::MAX,
        }
    }

    /// Pick a profile from the session flags.
    pub fn resolve(reduced_motion: bool, compact: bool) -> Self {
        if reduced_motion {
            Self::reduced_motion()
        } else if compact {
            Self::compact()
        } else {
            Self::standard()
        }
    }
}

/// Discrete phase of an in-flight run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    /// Emitting log lines; `next_line` is the index of the next line to show.
    StreamingLogs { next_line: usize },
    /// Typing indicator is up, waiting for the spin-up delay.
    Typing,
    /// Appending content chunks; `cursor` is a byte offset into the body.
    StreamingContent { cursor: usize },
    Complete,
}

/// One run of the stage sequence for a single section.
#[derive(Debug, Clone)]
struct Run {
    section: Section,
    stage: Stage,
    next_due: Instant,
    log_lines: Vec<String>,
    output_visible: bool,
    typing_visible: bool,
    content_visible: bool,
    displayed_content: String,
    stream_complete: bool,
}

impl Run {
    fn start(section: Section, profile: &MotionProfile, now: Instant) -> Self {
        // The first log line lands immediately, matching the original flow.
        let first = section.logs.first().cloned();
        Self {
            section,
            stage: Stage::StreamingLogs { next_line: 1 },
            next_due: now + profile.log_line_delay,
            log_lines: first.into_iter().collect(),
            output_visible: false,
            typing_visible: false,
            content_visible: false,
            displayed_content: String::new(),
            stream_complete: false,
        }
    }

    fn is_running(&self) -> bool {
        self.stage != Stage::Complete
    }

    /// Apply the single transition that is due. Returns the follow-up delay,
    /// or `None` once the run has completed.
    fn advance(&mut self, profile: &MotionProfile) -> Option<Duration> {
        match self.stage {
            Stage::StreamingLogs { next_line } => {
                if let Some(line) = self.section.logs.get(next_line) {
                    self.log_lines.push(line.clone());
                    self.stage = Stage::StreamingLogs {
                        next_line: next_line + 1,
                    };
                    Some(profile.log_line_delay)
                } else {
                    // Logs done: output appears at once, typing spins up.
                    self.output_visible = true;
                    self.typing_visible = true;
                    self.stage = Stage::Typing;
                    Some(profile.typing_delay)
                }
            }
            Stage::Typing => {
                self.typing_visible = false;
                self.content_visible = true;
                if self.section.content.is_empty() {
                    self.stream_complete = true;
                    self.stage = Stage::Complete;
                    None
                } else {
                    self.stage = Stage::StreamingContent { cursor: 0 };
                    Some(profile.stream_tick)
                }
            }
            Stage::StreamingContent { cursor } => {
                let rest = &self.section.content[cursor..];
                let taken = rest
                    .char_indices()
                    .nth(profile.stream_chunk)
                    .map_or(rest.len(), |(i, _)| i);
                self.displayed_content.push_str(&rest[..taken]);
                let cursor = cursor + taken;
                if cursor >= self.section.content.len() {
                    self.stream_complete = true;
                    self.stage = Stage::Complete;
                    None
                } else {
                    self.stage = Stage::StreamingContent { cursor };
                    Some(profile.stream_tick)
                }
            }
            Stage::Complete => None,
        }
    }
}

/// Drives the reveal sequence and owns all transient display state.
///
/// At most one run exists at a time. The public accessors form the view
/// model the rendering layer reads; nothing here touches the terminal.
#[derive(Debug)]
pub struct Sequencer {
    profile: MotionProfile,
    run: Option<Run>,
}

impl Sequencer {
    pub fn new(profile: MotionProfile) -> Self {
        Self { profile, run: None }
    }

    pub fn profile(&self) -> &MotionProfile {
        &self.profile
    }

    /// Handle a section selection.
    ///
    /// Selecting the active section toggles it off (full reset, no stages
    /// run). Selecting a different section cancels the in-flight run and
    /// restarts immediately; replacing the run discards its pending
    /// deadline, so nothing from the old run can fire later.
    pub fn select(&mut self, section: &Section, now: Instant) {
        if self.active_section() == Some(section.id) {
            self.run = None;
            return;
        }
        self.run = Some(Run::start(section.clone(), &self.profile, now));
    }

    /// External escape signal: clear the active section and discard any
    /// in-flight stage output.
    pub fn clear(&mut self) {
        self.run = None;
    }

    /// Advance every transition that is due at `now`. With zero delays a
    /// whole run can finish inside one call. Returns true if the view model
    /// changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(run) = self.run.as_mut() else {
            return false;
        };
        let mut changed = false;
        while run.is_running() && run.next_due <= now {
            changed = true;
            match run.advance(&self.profile) {
                Some(delay) => run.next_due += delay,
                None => break,
            }
        }
        changed
    }

    /// Deadline of the next pending transition, if a run is in flight.
    /// The event loop uses this to pick its poll timeout.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.run
            .as_ref()
            .filter(|run| run.is_running())
            .map(|run| run.next_due)
    }

    // -- View model --

    pub fn active_section(&self) -> Option<SectionId> {
        self.run.as_ref().map(|run| run.section.id)
    }

    pub fn is_running(&self) -> bool {
        self.run.as_ref().is_some_and(Run::is_running)
    }

    pub fn log_lines(&self) -> &[String] {
        match &self.run {
            Some(run) => &run.log_lines,
            None => &[],
        }
    }

    pub fn output_visible(&self) -> bool {
        self.run.as_ref().is_some_and(|run| run.output_visible)
    }

    pub fn output_text(&self) -> &str {
        match &self.run {
            Some(run) if run.output_visible => &run.section.output,
            _ => "",
        }
    }

    pub fn typing_visible(&self) -> bool {
        self.run.as_ref().is_some_and(|run| run.typing_visible)
    }

    pub fn content_visible(&self) -> bool {
        self.run.as_ref().is_some_and(|run| run.content_visible)
    }

    pub fn displayed_content(&self) -> &str {
        match &self.run {
            Some(run) => &run.displayed_content,
            None => "",
        }
    }

    pub fn stream_complete(&self) -> bool {
        self.run.as_ref().is_some_and(|run| run.stream_complete)
    }
}
