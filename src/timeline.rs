//! Deterministic frame timelines.
//!
//! Expands the state machine into the exact timestamped frame sequence a
//! live surface would render, without sleeping. Pure functions —
//! `(Phrases, Timing, cycles) → Timeline` and `(Timeline, OutputFormat) →
//! String`. No I/O, no side effects.
//!
//! This is the scriptable surface: pipe the JSON into other tools, or eyeball
//! the human format to tune delays.

use serde::Serialize;

use crate::engine::{Animator, Phase, Tick};
use crate::phrase::Phrases;
use crate::timing::Timing;

// ============================================================================
// TYPES
// ============================================================================

/// Output format for timelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable aligned columns.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

/// One rendered frame: what is visible, and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameEvent {
    /// Milliseconds since the animation started.
    pub at_ms: u64,
    /// Index of the phrase being shown.
    pub index: usize,
    /// Phase after this frame's tick.
    pub phase: Phase,
    /// The visible prefix.
    pub text: String,
}

/// A fully expanded animation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timeline {
    /// Every frame, starting with the blank initial frame at 0 ms.
    pub events: Vec<FrameEvent>,
    /// Timestamp of the last frame.
    pub total_ms: u64,
    /// Number of full rotations expanded.
    pub cycles: u32,
}

// ============================================================================
// EXPANSION
// ============================================================================

/// Expand `cycles` full rotations into a frame timeline.
///
/// A rotation completes when the advance wraps back to the first phrase.
/// `cycles == 0` yields just the initial blank frame.
pub fn expand(phrases: Phrases, timing: &Timing, cycles: u32) -> Timeline {
    let mut animator = Animator::new(phrases);
    let mut at_ms: u64 = 0;
    let mut completed: u32 = 0;

    let mut events = vec![snapshot(&animator, at_ms)];

    while completed < cycles {
        at_ms += animator.delay(timing).as_millis() as u64;
        let tick = animator.tick();
        events.push(snapshot(&animator, at_ms));

        if tick == (Tick::Advanced { wrapped: true }) {
            completed += 1;
        }
    }

    Timeline {
        total_ms: at_ms,
        events,
        cycles,
    }
}

fn snapshot(animator: &Animator, at_ms: u64) -> FrameEvent {
    FrameEvent {
        at_ms,
        index: animator.index(),
        phase: animator.phase(),
        text: animator.frame().to_string(),
    }
}

// ============================================================================
// FORMATTING
// ============================================================================

/// Format a timeline for output.
pub fn format_timeline(timeline: &Timeline, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(timeline),
        OutputFormat::Json => format_json(timeline),
    }
}

fn format_human(timeline: &Timeline) -> String {
    let mut out = String::new();

    out.push_str("=== Frames ===\n");
    for event in &timeline.events {
        out.push_str(&format!(
            "{:>8}ms  [{}] {:<8}  {:?}\n",
            event.at_ms,
            event.index + 1,
            event.phase.to_string(),
            event.text
        ));
    }
    out.push('\n');

    out.push_str("=== Summary ===\n");
    out.push_str(&format!("Frames:   {}\n", timeline.events.len()));
    out.push_str(&format!("Cycles:   {}\n", timeline.cycles));
    out.push_str(&format!(
        "Duration: {}\n",
        humantime::format_duration(std::time::Duration::from_millis(timeline.total_ms))
    ));

    out
}

fn format_json(timeline: &Timeline) -> String {
    serde_json::to_string_pretty(timeline).unwrap_or_else(|e| {
        // This should never happen with our types, but fail explicitly
        panic!("Failed to serialize timeline to JSON: {}", e)
    })
}

// ============================================================================
// TESTS
// ============================================================================
