//! Animation timing configuration.
//!
//! The three delays are presentation tuning, not contracts: every surface
//! accepts overrides, and the defaults match the classic feel — brisk
//! typing, a long readable hold, fast deletion.

use std::time::Duration;

use crate::phrase::Playlist;

/// Default per-character typing delay.
pub const DEFAULT_TYPE_DELAY: Duration = Duration::from_millis(150);

/// Default fully-visible hold delay.
pub const DEFAULT_HOLD_DELAY: Duration = Duration::from_millis(3500);

/// Default per-character deletion delay.
pub const DEFAULT_DELETE_DELAY: Duration = Duration::from_millis(60);

/// The three delays driving the state machine's schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Delay between revealed characters while typing.
    pub type_delay: Duration,
    /// Delay while the full phrase stays on screen.
    pub hold_delay: Duration,
    /// Delay between hidden characters while deleting.
    pub delete_delay: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Timing {
            type_delay: DEFAULT_TYPE_DELAY,
            hold_delay: DEFAULT_HOLD_DELAY,
            delete_delay: DEFAULT_DELETE_DELAY,
        }
    }
}

impl Timing {
    /// Apply a playlist's timing overrides on top of this timing.
    ///
    /// Fields absent from the playlist keep their current value.
    pub fn with_playlist(self, playlist: &Playlist) -> Self {
        Timing {
            type_delay: playlist
                .type_delay_ms
                .map_or(self.type_delay, Duration::from_millis),
            hold_delay: playlist
                .hold_delay_ms
                .map_or(self.hold_delay, Duration::from_millis),
            delete_delay: playlist
                .delete_delay_ms
                .map_or(self.delete_delay, Duration::from_millis),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_feel() {
        let timing = Timing::default();
        assert_eq!(timing.type_delay, Duration::from_millis(150));
        assert_eq!(timing.hold_delay, Duration::from_millis(3500));
        assert_eq!(timing.delete_delay, Duration::from_millis(60));
    }

    #[test]
    fn playlist_overrides_replace_only_present_fields() {
        let playlist = Playlist {
            phrases: vec!["x".into()],
            type_delay_ms: Some(10),
            hold_delay_ms: None,
            delete_delay_ms: Some(5),
        };

        let timing = Timing::default().with_playlist(&playlist);
        assert_eq!(timing.type_delay, Duration::from_millis(10));
        assert_eq!(timing.hold_delay, DEFAULT_HOLD_DELAY);
        assert_eq!(timing.delete_delay, Duration::from_millis(5));
    }

    #[test]
    fn empty_playlist_changes_nothing() {
        let playlist = Playlist {
            phrases: vec!["x".into()],
            ..Default::default()
        };
        assert_eq!(Timing::default().with_playlist(&playlist), Timing::default());
    }
}
