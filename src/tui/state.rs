//! TUI state algebra: pure types, zero effects.
//!
//! One screen, one model. The animation state lives in the embedded
//! [`Animator`]; the model adds only what the surface itself owns — the
//! pause flag, the caret glyph, and the quit flag. The transition layer
//! and the rendering layer both program against these types.

use crate::engine::Animator;
use crate::phrase::Phrases;
use crate::timing::Timing;

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
///
/// The effects layer reads this to know what to render and when the next
/// tick is due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    /// The typewriter state machine.
    pub animator: Animator,
    /// Tick schedule for the animator.
    pub timing: Timing,
    /// Glyph rendered after the visible prefix.
    pub caret: String,
    /// While paused, no tick deadline is armed.
    pub paused: bool,
    /// Set to true when the app should exit on the next iteration.
    pub should_quit: bool,
}

impl App {
    /// Create an App at the start of the rotation, unpaused.
    pub fn new(phrases: Phrases, timing: Timing, caret: String) -> Self {
        App {
            animator: Animator::new(phrases),
            timing,
            caret,
            paused: false,
            should_quit: false,
        }
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
///
/// The effects layer maps key presses to Actions; the transition function
/// decides what each Action does to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Pause or resume the animation.
    TogglePause,
    /// Jump to the next phrase immediately.
    NextPhrase,
    /// Restart the rotation from the first phrase.
    Restart,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TESTS
// ============================================================================
