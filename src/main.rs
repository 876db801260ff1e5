//! # Portfolio CLI Entry Point
//!
//! ## Overview
//!
//! `portfolio` renders an animated personal portfolio in the terminal. Each
//! section replays as a simulated AI tool call: terminal logs stream in, a
//! structured tool result appears, a typing indicator pulses, and the full
//! section body streams in character chunks.
//!
//! ## Usage
//!
//! ```bash
//! # Shipped content
//! portfolio
//!
//! # Your own content
//! portfolio --file ./my-portfolio.json
//!
//! # No animation delays
//! portfolio --reduced-motion
//!
//! # Print the resolved catalog and exit
//! portfolio --debug
//! ```
//!
//! ## Key Bindings
//!
//! - `1`-`4` - Select a section (again to close it)
//! - `←`/`→` or `h`/`l` - Move the nav highlight
//! - `Enter` - Run the highlighted section
//! - `Esc` - Close the active section, canceling any in-flight run
//! - `t` - Cycle the color theme (persisted)
//! - `i` - Show/hide the info modal
//! - `q` / `Q` - Quit

use portfolio::content::{load_catalog, Catalog, SectionId};
use portfolio::sequencer::MotionProfile;
use portfolio::ui;
use portfolio::ui::config::Config;
use portfolio::ui::theme::Theme;
use portfolio::ui::App;

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::panic;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Terminals narrower than this get the slower compact pacing.
const COMPACT_WIDTH: u16 = 80;

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(
                event::read().context("Failed to read keyboard event")?,
            ))
        } else {
            Ok(None)
        }
    }
}

/// Portfolio - an animated terminal portfolio
#[derive(Parser, Debug)]
#[command(name = "portfolio")]
#[command(author = "Larsen Weigle")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "An animated terminal portfolio of simulated AI tool calls", long_about = None)]
struct Args {
    /// Path to a JSON catalog overriding the builtin section content
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    file: Option<PathBuf>,

    /// Theme name (overrides the persisted config for this session)
    #[arg(short, long, value_name = "NAME")]
    theme: Option<String>,

    /// Skip animation delays and reveal content in one shot
    #[arg(long)]
    reduced_motion: bool,

    /// Force the slower compact-terminal pacing
    #[arg(long, conflicts_with = "reduced_motion")]
    compact: bool,

    /// Print the resolved catalog and exit
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let result = run_application(args).await;

    let _ = panic::take_hook();

    result
}

async fn run_application(args: Args) -> Result<()> {
    let config = Config::load();

    // Resolve the catalog: builtin, optionally layered with a user file
    let catalog = if let Some(ref path) = args.file {
        load_catalog(path)?
    } else {
        Catalog::builtin()
    };

    // Debug mode: print the resolved catalog and exit
    if args.debug {
        println!("=== Sections ===");
        for section in catalog.iter() {
            println!(
                "  {} ({}())\n    logs: {}\n    content: {} chars\n",
                section.id.label(),
                section.id.tool(),
                section.logs.len(),
                section.content.chars().count()
            );
        }
        println!("Hero: {}", catalog.hero.name);
        return Ok(());
    }

    // Resolve the theme: CLI flag wins over the persisted config
    let theme = match args.theme.as_deref() {
        Some(name) => match Theme::by_name(name) {
            Some(theme) => theme,
            None => {
                let names: Vec<&str> = Theme::all().iter().map(|t| t.name).collect();
                bail!("Unknown theme {:?} (available: {})", name, names.join(", "));
            }
        },
        None => Theme::by_name(&config.theme).unwrap_or_else(Theme::default_theme),
    };

    // Resolve the motion profile once per session (reduced motion wins,
    // narrow terminals get compact pacing automatically)
    let reduced_motion = args.reduced_motion || config.reduced_motion;
    let compact = args.compact
        || crossterm::terminal::size().is_ok_and(|(width, _)| width < COMPACT_WIDTH);
    let profile = MotionProfile::resolve(reduced_motion, compact);

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(catalog, profile, theme.clone());

    // Run the app and ensure cleanup happens even on error
    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(&mut terminal, &mut app, &mut event_reader, config).await;

    // Restore terminal (always runs, even if run_app failed)
    let cleanup_result = cleanup_terminal(&mut terminal);

    run_result?;
    cleanup_result?;

    Ok(())
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_reader: &mut dyn EventReader,
    mut config: Config,
) -> Result<()> {
    loop {
        app.tick(Instant::now());

        terminal
            .draw(|f| ui::render(f, app))
            .context("Failed to draw terminal UI")?;

        // Short timeout while a run is animating, relaxed otherwise
        let poll_timeout = if app.sequencer.is_running() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        let event = event_reader.read_event(poll_timeout)?;

        // No event: loop back around and re-render for animations
        let event = match event {
            Some(e) => e,
            None => continue,
        };

        if let Event::Key(key) = event {
            // Info modal swallows everything except its close keys
            if app.show_info {
                match key.code {
                    KeyCode::Char('i') | KeyCode::Esc => {
                        app.toggle_info();
                    }
                    _ => {}
                }
                continue;
            }

            match key.code {
                KeyCode::Char('q') | KeyCode::Char('Q') => {
                    app.should_quit = true;
                }
                KeyCode::Char('i') => {
                    app.toggle_info();
                }
                KeyCode::Char('t') => {
                    config.theme = app.cycle_theme().to_string();
                    if let Err(e) = config.save() {
                        eprintln!("Warning: Failed to save config: {e}");
                    }
                }
                KeyCode::Char(c @ '1'..='4') => {
                    let index = (c as usize) - ('1' as usize);
                    app.select_section(SectionId::ALL[index], Instant::now());
                }
                KeyCode::Left | KeyCode::Char('h') => {
                    app.previous_section();
                }
                KeyCode::Right | KeyCode::Char('l') => {
                    app.next_section();
                }
                KeyCode::Enter => {
                    app.select_highlighted(Instant::now());
                }
                KeyCode::Esc => {
                    app.clear_section();
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use std::collections::VecDeque;

    /// Mock event reader for testing that returns a predetermined sequence of events
    struct MockEventReader {
        events: VecDeque<Event>,
    }

    impl MockEventReader {
        fn new(events: Vec<Event>) -> Self {
            Self {
                events: VecDeque::from(events),
            }
        }
    }

    impl EventReader for MockEventReader {
        fn read_event(&mut self, _timeout: Duration) -> Result<Option<Event>> {
            Ok(self.events.pop_front())
        }
    }

    fn key_event(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    #[test]
    fn test_mock_event_reader() {
        let events = vec![
            key_event(KeyCode::Char('1')),
            key_event(KeyCode::Esc),
            key_event(KeyCode::Char('q')),
        ];

        let mut reader = MockEventReader::new(events);

        assert!(matches!(
            reader.read_event(Duration::from_millis(10)).unwrap(),
            Some(Event::Key(KeyEvent {
                code: KeyCode::Char('1'),
                ..
            }))
        ));
        assert!(matches!(
            reader.read_event(Duration::from_millis(10)).unwrap(),
            Some(Event::Key(KeyEvent {
                code: KeyCode::Esc,
                ..
            }))
        ));
        assert!(matches!(
            reader.read_event(Duration::from_millis(10)).unwrap(),
            Some(Event::Key(KeyEvent {
                code: KeyCode::Char('q'),
                ..
            }))
        ));

        assert!(reader
            .read_event(Duration::from_millis(10))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_crossterm_event_reader_type() {
        let _reader: Box<dyn EventReader> = Box::new(CrosstermEventReader);
    }

    #[tokio::test]
    async fn test_run_application_nonexistent_catalog_file() {
        let args = Args {
            file: Some(PathBuf::from("/nonexistent/catalog/that/does/not/exist.json")),
            theme: None,
            reduced_motion: false,
            compact: false,
            debug: false,
        };

        let result = run_application(args).await;
        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to read catalog file"));
    }

    #[tokio::test]
    async fn test_run_application_debug_mode_exits_cleanly() {
        let args = Args {
            file: None,
            theme: None,
            reduced_motion: false,
            compact: false,
            debug: true,
        };

        // Debug mode never touches the terminal, so it works headlessly
        let result = run_application(args).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_run_application_unknown_theme() {
        let args = Args {
            file: None,
            theme: Some("Not A Theme".to_string()),
            reduced_motion: false,
            compact: false,
            debug: false,
        };

        let result = run_application(args).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown theme"));
    }

    #[tokio::test]
    async fn test_run_application_invalid_catalog_json() {
        use std::fs;
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("catalog.json");
        fs::write(&path, "not json").unwrap();

        let args = Args {
            file: Some(path),
            theme: None,
            reduced_motion: false,
            compact: false,
            debug: false,
        };

        let result = run_application(args).await;
        assert!(result.is_err());
        let err_msg = format!("{:?}", result.unwrap_err());
        assert!(err_msg.contains("Failed to parse catalog file"));
    }

    #[test]
    fn test_args_parsing_defaults() {
        let args = Args::parse_from(["portfolio"]);
        assert!(args.file.is_none());
        assert!(args.theme.is_none());
        assert!(!args.reduced_motion);
        assert!(!args.compact);
        assert!(!args.debug);
    }

    #[test]
    fn test_args_parsing_with_file_and_theme() {
        let args = Args::parse_from(["portfolio", "--file", "p.json", "--theme", "Nord"]);
        assert_eq!(args.file, Some(PathBuf::from("p.json")));
        assert_eq!(args.theme, Some("Nord".to_string()));
    }

    #[test]
    fn test_args_reduced_motion_conflicts_with_compact() {
        let result = Args::try_parse_from(["portfolio", "--reduced-motion", "--compact"]);
        assert!(result.is_err());
    }
}
