//! Phrase lists and playlist files.
//!
//! A [`Phrases`] is the ordered, immutable rotation list the animator
//! cycles through. Non-emptiness is enforced at construction, so the
//! animation core never has to reason about a zero-phrase machine.
//!
//! A playlist is a small JSON document supplying phrases (and optional
//! timing overrides) from disk instead of the command line.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// ERRORS
// ============================================================================

/// Failures constructing a phrase list or loading a playlist.
#[derive(Debug, Error)]
pub enum PhraseError {
    /// No phrases were supplied from any source.
    #[error("phrase list is empty: supply at least one phrase")]
    Empty,

    /// The playlist file could not be read.
    #[error("failed to read playlist {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The playlist file is not valid playlist JSON.
    #[error("invalid playlist {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

// ============================================================================
// PHRASES
// ============================================================================

/// An ordered, non-empty, immutable list of phrases.
///
/// The only invariant is non-emptiness; individual phrases may be empty
/// strings (they render as a blank frame for one hold cycle).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrases(Vec<String>);

impl Phrases {
    /// Build a phrase list, rejecting empty input.
    pub fn new(phrases: Vec<String>) -> Result<Self, PhraseError> {
        if phrases.is_empty() {
            Err(PhraseError::Empty)
        } else {
            Ok(Phrases(phrases))
        }
    }

    /// Number of phrases. Always at least 1.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// A phrase list is never empty; this exists for clippy's sake.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The phrase at `index`.
    ///
    /// Callers index with values in `[0, len)`; the animator maintains
    /// that invariant by always advancing modulo `len`.
    pub fn get(&self, index: usize) -> &str {
        &self.0[index]
    }

    /// Iterate the phrases in rotation order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

// ============================================================================
// PLAYLIST FILES
// ============================================================================

/// On-disk playlist: phrases plus optional timing overrides.
///
/// ```json
/// {
///   "phrases": ["Build.", "Ship.", "Repeat."],
///   "type_delay_ms": 120,
///   "hold_delay_ms": 2500,
///   "delete_delay_ms": 40
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Playlist {
    /// Phrases in rotation order.
    pub phrases: Vec<String>,
    /// Override for the per-character typing delay, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_delay_ms: Option<u64>,
    /// Override for the fully-visible hold delay, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hold_delay_ms: Option<u64>,
    /// Override for the per-character deletion delay, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_delay_ms: Option<u64>,
}

/// Load a playlist from a JSON file.
pub fn load_playlist(path: &Path) -> Result<Playlist, PhraseError> {
    let contents = fs::read_to_string(path).map_err(|source| PhraseError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| PhraseError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_list_is_rejected() {
        let result = Phrases::new(Vec::new());
        assert!(matches!(result, Err(PhraseError::Empty)));
    }

    #[test]
    fn single_phrase_is_accepted() {
        let phrases = Phrases::new(vec!["hello".into()]).unwrap();
        assert_eq!(phrases.len(), 1);
        assert_eq!(phrases.get(0), "hello");
    }

    #[test]
    fn order_is_preserved() {
        let phrases =
            Phrases::new(vec!["a".into(), "b".into(), "c".into()]).unwrap();
        let collected: Vec<&str> = phrases.iter().collect();
        assert_eq!(collected, vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_string_phrases_are_allowed() {
        let phrases = Phrases::new(vec!["".into()]).unwrap();
        assert_eq!(phrases.get(0), "");
    }

    #[test]
    fn load_playlist_with_all_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"phrases": ["one", "two"], "type_delay_ms": 100, "hold_delay_ms": 2000, "delete_delay_ms": 50}}"#
        )
        .unwrap();

        let playlist = load_playlist(file.path()).unwrap();
        assert_eq!(playlist.phrases, vec!["one", "two"]);
        assert_eq!(playlist.type_delay_ms, Some(100));
        assert_eq!(playlist.hold_delay_ms, Some(2000));
        assert_eq!(playlist.delete_delay_ms, Some(50));
    }

    #[test]
    fn load_playlist_timing_fields_are_optional() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"phrases": ["solo"]}}"#).unwrap();

        let playlist = load_playlist(file.path()).unwrap();
        assert_eq!(playlist.phrases, vec!["solo"]);
        assert_eq!(playlist.type_delay_ms, None);
        assert_eq!(playlist.hold_delay_ms, None);
        assert_eq!(playlist.delete_delay_ms, None);
    }

    #[test]
    fn load_playlist_missing_file_is_io_error() {
        let result = load_playlist(Path::new("/nonexistent/playlist.json"));
        assert!(matches!(result, Err(PhraseError::Io { .. })));
    }

    #[test]
    fn load_playlist_bad_json_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json at all").unwrap();

        let result = load_playlist(file.path());
        assert!(matches!(result, Err(PhraseError::Parse { .. })));
    }
}
