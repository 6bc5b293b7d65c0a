//! Pure state transitions: (App, Action) → App, plus tick handling.
//!
//! This is the core logic of the TUI. Fully testable without a terminal.
//! Actions mutate the model in place; the effects layer only decides when
//! to call in (key arrived, deadline expired) and re-renders afterwards.

use crate::engine::Tick;

use super::state::{Action, App};

/// Apply a semantic action to the model.
pub fn update(app: &mut App, action: &Action) {
    match action {
        Action::TogglePause => {
            app.paused = !app.paused;
        }
        Action::NextPhrase => {
            app.animator.skip();
        }
        Action::Restart => {
            app.animator.restart();
            app.paused = false;
        }
        Action::Quit => {
            app.should_quit = true;
        }
    }
}

/// Advance the animation by one tick, unless paused.
///
/// Returns what the tick did, or None when paused. The effects layer never
/// arms a deadline while paused, so this guard only matters for callers
/// driving the model directly (tests).
pub fn on_tick(app: &mut App) -> Option<Tick> {
    if app.paused {
        None
    } else {
        Some(app.animator.tick())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phrase::Phrases;
    use crate::timing::Timing;

    fn app() -> App {
        let phrases =
            Phrases::new(vec!["one".into(), "two".into(), "three".into()]).unwrap();
        App::new(phrases, Timing::default(), "▌".into())
    }

    // -- TogglePause --

    #[test]
    fn toggle_pause_flips_and_flips_back() {
        let mut app = app();
        update(&mut app, &Action::TogglePause);
        assert!(app.paused);
        update(&mut app, &Action::TogglePause);
        assert!(!app.paused);
    }

    // -- NextPhrase --

    #[test]
    fn next_phrase_skips_mid_word() {
        let mut app = app();
        on_tick(&mut app);
        on_tick(&mut app);
        update(&mut app, &Action::NextPhrase);
        assert_eq!(app.animator.index(), 1);
        assert_eq!(app.animator.visible_chars(), 0);
    }

    #[test]
    fn next_phrase_wraps_to_first() {
        let mut app = app();
        update(&mut app, &Action::NextPhrase);
        update(&mut app, &Action::NextPhrase);
        update(&mut app, &Action::NextPhrase);
        assert_eq!(app.animator.index(), 0);
    }

    // -- Restart --

    #[test]
    fn restart_rewinds_and_resumes() {
        let mut app = app();
        for _ in 0..5 {
            on_tick(&mut app);
        }
        update(&mut app, &Action::TogglePause);
        update(&mut app, &Action::Restart);
        assert_eq!(app.animator.index(), 0);
        assert_eq!(app.animator.visible_chars(), 0);
        assert!(!app.paused);
    }

    // -- Quit --

    #[test]
    fn quit_sets_the_flag() {
        let mut app = app();
        update(&mut app, &Action::Quit);
        assert!(app.should_quit);
    }

    // -- Ticks --

    #[test]
    fn tick_advances_the_animator() {
        let mut app = app();
        assert!(on_tick(&mut app).is_some());
        assert_eq!(app.animator.visible_chars(), 1);
        assert_eq!(app.animator.frame(), "o");
    }

    #[test]
    fn tick_is_inert_while_paused() {
        let mut app = app();
        update(&mut app, &Action::TogglePause);
        assert_eq!(on_tick(&mut app), None);
        assert_eq!(app.animator.visible_chars(), 0);
    }

    #[test]
    fn resume_continues_where_paused() {
        let mut app = app();
        on_tick(&mut app);
        update(&mut app, &Action::TogglePause);
        on_tick(&mut app);
        update(&mut app, &Action::TogglePause);
        on_tick(&mut app);
        assert_eq!(app.animator.frame(), "on");
    }
}
