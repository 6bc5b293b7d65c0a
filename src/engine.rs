//! The typewriter rotation state machine.
//!
//! Pure data and transitions, zero effects. One `Animator` owns the entire
//! animation state: which phrase is current, how many characters are
//! visible, and whether we are typing or deleting. Every surface (TUI,
//! inline, timeline) drives the same machine by calling [`Animator::tick`]
//! once per scheduled callback and consulting [`Animator::delay`] for when
//! the next callback is due.
//!
//! States are keyed by the deleting flag and the boundary conditions on the
//! visible count:
//!
//! - Typing:    `!deleting && visible < len`  — tick reveals one more char
//! - Holding:   `!deleting && visible == len` — tick arms deletion
//! - Deleting:  `deleting && visible > 0`     — tick hides one char
//! - Advancing: `deleting && visible == 0`    — tick moves to the next
//!   phrase (wrapping) and flips back to typing
//!
//! Counts are Unicode scalar values, not bytes, so [`Animator::frame`]
//! always returns a valid char-boundary prefix.

use serde::Serialize;
use std::time::Duration;

use crate::phrase::Phrases;
use crate::timing::Timing;

// ============================================================================
// OBSERVABLE PHASE
// ============================================================================

/// The externally visible phase of the animation.
///
/// Derived from state, never stored. Advancing is not observable from the
/// outside: the advance happens inside a single tick and lands back in
/// Typing before anyone can look.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Revealing the current phrase one character per tick.
    Typing,
    /// Fully visible, waiting out the hold delay.
    Holding,
    /// Hiding the current phrase one character per tick.
    Deleting,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Phase::Typing => "typing",
            Phase::Holding => "holding",
            Phase::Deleting => "deleting",
        };
        f.write_str(label)
    }
}

// ============================================================================
// TICK OUTCOME
// ============================================================================

/// What a single tick did to the state.
///
/// Surfaces use this to count cycles (a cycle ends when `Advanced` wraps
/// back to index 0) without peeking at internals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// One more character became visible.
    Typed,
    /// The hold expired; the next ticks will delete.
    HoldExpired,
    /// One character was hidden.
    Deleted,
    /// The index moved to the next phrase (wrapping) and typing restarts.
    Advanced {
        /// True when the advance wrapped around to the first phrase.
        wrapped: bool,
    },
}

// ============================================================================
// ANIMATOR
// ============================================================================

/// The animation state machine.
///
/// Owns the phrase list and the mutable state triple. Inert data: it holds
/// no timers and schedules nothing itself. Whoever drives it owns exactly
/// one pending deadline at a time, computed via [`Animator::delay`], so
/// dropping the driver is all the teardown there is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animator {
    phrases: Phrases,
    index: usize,
    visible: usize,
    deleting: bool,
}

impl Animator {
    /// Start the animation: first phrase, nothing visible, typing.
    pub fn new(phrases: Phrases) -> Self {
        Animator {
            phrases,
            index: 0,
            visible: 0,
            deleting: false,
        }
    }

    /// The phrase currently being typed or deleted.
    pub fn phrase(&self) -> &str {
        self.phrases.get(self.index)
    }

    /// Index of the current phrase.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of phrases in rotation.
    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }

    /// Number of currently visible characters.
    pub fn visible_chars(&self) -> usize {
        self.visible
    }

    /// Character count of the current phrase.
    fn phrase_len(&self) -> usize {
        self.phrase().chars().count()
    }

    /// The externally visible phase, derived from state.
    pub fn phase(&self) -> Phase {
        if self.deleting {
            Phase::Deleting
        } else if self.visible == self.phrase_len() {
            Phase::Holding
        } else {
            Phase::Typing
        }
    }

    /// The currently visible prefix of the current phrase.
    ///
    /// Always a valid prefix: `visible` counts chars, and the slice ends on
    /// the corresponding char boundary.
    pub fn frame(&self) -> &str {
        let phrase = self.phrase();
        match phrase.char_indices().nth(self.visible) {
            Some((boundary, _)) => &phrase[..boundary],
            None => phrase,
        }
    }

    /// How long to wait before the next tick, given the current state.
    ///
    /// This is the single-slot schedule: the driver arms exactly one
    /// deadline with this value after every tick.
    pub fn delay(&self, timing: &Timing) -> Duration {
        if self.deleting {
            timing.delete_delay
        } else if self.visible == self.phrase_len() {
            timing.hold_delay
        } else {
            timing.type_delay
        }
    }

    /// Advance the machine by one scheduled-callback firing.
    ///
    /// Exactly one of the four transitions happens per call. The hold
    /// expiry only arms deletion; the first decrement is the *next* tick,
    /// so the fully visible frame survives the whole hold delay.
    pub fn tick(&mut self) -> Tick {
        if self.deleting {
            if self.visible > 0 {
                self.visible -= 1;
                Tick::Deleted
            } else {
                self.deleting = false;
                self.index = (self.index + 1) % self.phrases.len();
                Tick::Advanced {
                    wrapped: self.index == 0,
                }
            }
        } else if self.visible < self.phrase_len() {
            self.visible += 1;
            Tick::Typed
        } else {
            self.deleting = true;
            Tick::HoldExpired
        }
    }

    /// Jump to the next phrase immediately: blank frame, typing.
    ///
    /// Used by the interactive skip control. Equivalent to fast-forwarding
    /// the delete phase and the advance tick.
    pub fn skip(&mut self) {
        self.index = (self.index + 1) % self.phrases.len();
        self.visible = 0;
        self.deleting = false;
    }

    /// Reset to the initial state: first phrase, nothing visible, typing.
    pub fn restart(&mut self) {
        self.index = 0;
        self.visible = 0;
        self.deleting = false;
    }
}

// ============================================================================
// TESTS
// ============================================================================
