//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//! Kept minimal — all intelligence lives in the pure layers.
//!
//! Scheduling model: the loop owns exactly one pending deadline at a time,
//! realized as the `recv_timeout` on the key channel. A timeout IS the
//! tick; after each tick the deadline is re-armed from the animator's
//! current state. While paused, no deadline is armed (the loop blocks on
//! input). Leaving the loop abandons the deadline, so nothing ever fires
//! against a torn-down model.

use std::io;
use std::sync::mpsc;
use std::thread;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::phrase::Phrases;
use crate::timing::Timing;

use super::state::{Action, App};
use super::update::{on_tick, update};
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char(' ') => Some(Action::TogglePause),
        KeyCode::Char('n') | KeyCode::Right => Some(Action::NextPhrase),
        KeyCode::Char('r') => Some(Action::Restart),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// BACKGROUND THREADS
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards key events to the channel.
fn spawn_key_reader(tx: mpsc::Sender<KeyEvent>) {
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(Event::Key(key)) => {
                    if tx.send(key).is_err() {
                        break; // receiver dropped, TUI is shutting down
                    }
                }
                Ok(_) => {} // ignore mouse, resize, etc.
                Err(_) => break,
            }
        }
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the fullscreen animation until the user quits.
///
/// Sets up the terminal, spawns a key-reader thread, and drives the
/// animation with a single re-armed deadline per iteration.
pub fn run(phrases: Phrases, timing: Timing, caret: String) -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::new(phrases, timing, caret);

    let (tx, rx) = mpsc::channel::<KeyEvent>();
    spawn_key_reader(tx);

    loop {
        // Render
        terminal.draw(|frame| render(&app, frame))?;

        // Check quit flag
        if app.should_quit {
            break;
        }

        if app.paused {
            // No deadline while paused: block until a key arrives
            match rx.recv() {
                Ok(key) => handle_key(key, &mut app),
                Err(_) => break, // sender dropped
            }
        } else {
            // The single pending deadline. A key arriving first re-arms it,
            // which is fine: every mapped key changes animation state anyway.
            match rx.recv_timeout(app.animator.delay(&app.timing)) {
                Ok(key) => handle_key(key, &mut app),
                Err(mpsc::RecvTimeoutError::Timeout) => {
                    on_tick(&mut app);
                }
                Err(mpsc::RecvTimeoutError::Disconnected) => break,
            }
        }
    }

    restore_terminal()?;
    Ok(())
}

fn handle_key(key: KeyEvent, app: &mut App) {
    if let Some(action) = map_key(key) {
        update(app, &action);
    }
}

// ============================================================================
// TESTS
// ============================================================================
