//! TUI style constants.
//!
//! Centralized so the rendering layer stays visually consistent. Pure data.
//!
//! Color semantics:
//! - Bold white: the animated phrase itself
//! - Cyan + slow blink: the caret (the terminal drives the blink, so the
//!   animation never needs a second timer for it)
//! - Yellow: paused indicator
//! - Dim: counters, help line

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// The animated phrase prefix.
pub const STYLE_PHRASE: Style = Style::new().add_modifier(Modifier::BOLD);

/// The caret glyph. Blink is declared here, not timed by us.
pub const STYLE_CARET: Style = Style::new()
    .fg(Color::Cyan)
    .add_modifier(Modifier::SLOW_BLINK);

/// Paused indicator.
pub const STYLE_PAUSED: Style = Style::new().fg(Color::Yellow);

/// De-emphasized metadata — counters, phase labels.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Title bar / header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caret_blinks_and_is_cyan() {
        assert_eq!(STYLE_CARET.fg, Some(Color::Cyan));
        assert!(STYLE_CARET.add_modifier.contains(Modifier::SLOW_BLINK));
    }

    #[test]
    fn phrase_style_is_bold() {
        assert!(STYLE_PHRASE.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn paused_style_is_yellow() {
        assert_eq!(STYLE_PAUSED.fg, Some(Color::Yellow));
    }
}
