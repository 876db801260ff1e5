//! Keyboard event handling tests
//!
//! Tests for the key-to-action mapping: digit selection, escape handling,
//! quit keys, and modal interactions.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use portfolio::content::{Catalog, SectionId};
use portfolio::sequencer::MotionProfile;
use portfolio::ui::theme::Theme;
use portfolio::ui::App;
use std::time::Instant;

/// Helper to create a key event
fn key_event(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
}

/// Helper to create a test app with the builtin catalog
fn create_test_app() -> App {
    App::new(
        Catalog::builtin(),
        MotionProfile::standard(),
        Theme::default_theme().clone(),
    )
}

/// Apply the binary's key mapping to the app. Mirrors the dispatch in
/// `run_app` so the mapping itself is exercised without a terminal.
fn handle_key(app: &mut App, code: KeyCode, now: Instant) {
    if app.show_info {
        if matches!(code, KeyCode::Char('i') | KeyCode::Esc) {
            app.toggle_info();
        }
        return;
    }
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        KeyCode::Char('i') => app.toggle_info(),
        KeyCode::Char('t') => {
            app.cycle_theme();
        }
        KeyCode::Char(c @ '1'..='4') => {
            let index = (c as usize) - ('1' as usize);
            app.select_section(SectionId::ALL[index], now);
        }
        KeyCode::Left | KeyCode::Char('h') => app.previous_section(),
        KeyCode::Right | KeyCode::Char('l') => app.next_section(),
        KeyCode::Enter => app.select_highlighted(now),
        KeyCode::Esc => app.clear_section(),
        _ => {}
    }
}

#[tokio::test]
async fn test_quit_with_q_and_capital_q() {
    for code in [KeyCode::Char('q'), KeyCode::Char('Q')] {
        let mut app = create_test_app();
        assert!(!app.should_quit);
        handle_key(&mut app, code, Instant::now());
        assert!(app.should_quit);
    }
}

#[tokio::test]
async fn test_digit_keys_map_to_sections() {
    let now = Instant::now();
    let expected = [
        ('1', SectionId::Me),
        ('2', SectionId::Education),
        ('3', SectionId::Experience),
        ('4', SectionId::Projects),
    ];
    for (digit, id) in expected {
        let mut app = create_test_app();
        handle_key(&mut app, KeyCode::Char(digit), now);
        assert_eq!(app.active_section().map(|s| s.id), Some(id));
    }
}

#[tokio::test]
async fn test_out_of_range_digit_is_ignored() {
    let mut app = create_test_app();
    handle_key(&mut app, KeyCode::Char('5'), Instant::now());
    handle_key(&mut app, KeyCode::Char('0'), Instant::now());
    assert!(app.active_section().is_none());
    assert!(!app.should_quit);
}

#[tokio::test]
async fn test_escape_clears_active_section() {
    let mut app = create_test_app();
    let now = Instant::now();
    handle_key(&mut app, KeyCode::Char('2'), now);
    assert!(app.active_section().is_some());

    handle_key(&mut app, KeyCode::Esc, now);
    assert!(app.active_section().is_none());
    assert!(!app.sequencer.is_running());
}

#[tokio::test]
async fn test_escape_with_nothing_active_is_a_noop() {
    let mut app = create_test_app();
    handle_key(&mut app, KeyCode::Esc, Instant::now());
    assert!(app.active_section().is_none());
    assert!(!app.should_quit);
}

#[tokio::test]
async fn test_arrow_keys_move_highlight() {
    let mut app = create_test_app();
    let now = Instant::now();

    handle_key(&mut app, KeyCode::Right, now);
    assert_eq!(app.nav_index, 1);
    handle_key(&mut app, KeyCode::Char('l'), now);
    assert_eq!(app.nav_index, 2);
    handle_key(&mut app, KeyCode::Left, now);
    assert_eq!(app.nav_index, 1);
    handle_key(&mut app, KeyCode::Char('h'), now);
    assert_eq!(app.nav_index, 0);
}

#[tokio::test]
async fn test_enter_selects_highlighted_section() {
    let mut app = create_test_app();
    let now = Instant::now();
    handle_key(&mut app, KeyCode::Right, now);
    handle_key(&mut app, KeyCode::Enter, now);
    assert_eq!(
        app.active_section().map(|s| s.id),
        Some(SectionId::Education)
    );
}

#[tokio::test]
async fn test_info_modal_swallows_other_keys() {
    let mut app = create_test_app();
    let now = Instant::now();

    handle_key(&mut app, KeyCode::Char('i'), now);
    assert!(app.show_info);

    // Keys other than the close keys do nothing while the modal is up
    handle_key(&mut app, KeyCode::Char('1'), now);
    assert!(app.active_section().is_none());
    handle_key(&mut app, KeyCode::Char('q'), now);
    assert!(!app.should_quit);

    handle_key(&mut app, KeyCode::Esc, now);
    assert!(!app.show_info);
}

#[tokio::test]
async fn test_theme_key_cycles_theme() {
    let mut app = create_test_app();
    let before = app.theme.name;
    handle_key(&mut app, KeyCode::Char('t'), Instant::now());
    assert_ne!(app.theme.name, before);
}

#[tokio::test]
async fn test_selecting_twice_toggles_off() {
    let mut app = create_test_app();
    let now = Instant::now();
    handle_key(&mut app, KeyCode::Char('3'), now);
    handle_key(&mut app, KeyCode::Char('3'), now);
    assert!(app.active_section().is_none());
}
