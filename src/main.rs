//! typeloop CLI
//!
//! Looping typewriter animation for the terminal.

use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use typeloop::engine::{Animator, Tick};
use typeloop::phrase::{Phrases, load_playlist};
use typeloop::timeline::{OutputFormat, expand, format_timeline};
use typeloop::timing::Timing;
use typeloop::tui;

#[derive(Parser)]
#[command(name = "typeloop")]
#[command(about = "Looping typewriter animation for the terminal")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fullscreen animation (pause, skip, restart interactively)
    Play {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        timing: TimingArgs,

        /// Caret glyph rendered after the visible prefix
        #[arg(long, default_value = "▌")]
        caret: String,
    },

    /// Animate on the current line without taking over the terminal
    Inline {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        timing: TimingArgs,

        /// Caret glyph rendered after the visible prefix
        #[arg(long, default_value = "▌")]
        caret: String,

        /// Stop after this many full rotations (default: loop forever)
        #[arg(long)]
        cycles: Option<u32>,
    },

    /// Print the deterministic frame timeline and exit (no animation)
    Frames {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        timing: TimingArgs,

        /// Number of full rotations to expand
        #[arg(long, default_value_t = 1)]
        cycles: u32,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

/// Where the phrases come from.
#[derive(Args)]
struct SourceArgs {
    /// Phrases to rotate through (take precedence over the playlist's)
    phrases: Vec<String>,

    /// JSON playlist file with phrases and optional timing overrides
    #[arg(long)]
    playlist: Option<PathBuf>,
}

/// Delay overrides, parsed as humantime durations ("150ms", "3.5s").
#[derive(Args)]
struct TimingArgs {
    /// Delay between typed characters
    #[arg(long, value_parser = humantime::parse_duration)]
    type_delay: Option<Duration>,

    /// Delay while the full phrase stays on screen
    #[arg(long, value_parser = humantime::parse_duration)]
    hold_delay: Option<Duration>,

    /// Delay between deleted characters
    #[arg(long, value_parser = humantime::parse_duration)]
    delete_delay: Option<Duration>,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { source, timing, caret } => cmd_play(source, timing, caret),
        Commands::Inline { source, timing, caret, cycles } => {
            cmd_inline(source, timing, caret, cycles)
        }
        Commands::Frames { source, timing, cycles, format } => {
            cmd_frames(source, timing, cycles, format.into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// INPUT RESOLUTION
// ============================================================================

/// Merge CLI phrases, playlist contents, and timing flags.
///
/// Precedence: positional phrases over playlist phrases; explicit timing
/// flags over playlist overrides over defaults.
fn resolve_inputs(source: SourceArgs, timing_args: TimingArgs) -> Result<(Phrases, Timing), String> {
    let mut timing = Timing::default();
    let mut phrases = source.phrases;

    if let Some(path) = source.playlist {
        let playlist = load_playlist(&path).map_err(|e| e.to_string())?;
        timing = timing.with_playlist(&playlist);
        if phrases.is_empty() {
            phrases = playlist.phrases;
        }
    }

    if let Some(d) = timing_args.type_delay {
        timing.type_delay = d;
    }
    if let Some(d) = timing_args.hold_delay {
        timing.hold_delay = d;
    }
    if let Some(d) = timing_args.delete_delay {
        timing.delete_delay = d;
    }

    let phrases = Phrases::new(phrases).map_err(|e| e.to_string())?;
    Ok((phrases, timing))
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_play(source: SourceArgs, timing_args: TimingArgs, caret: String) -> Result<(), String> {
    let (phrases, timing) = resolve_inputs(source, timing_args)?;
    tui::run::run(phrases, timing, caret).map_err(|e| e.to_string())
}

fn cmd_inline(
    source: SourceArgs,
    timing_args: TimingArgs,
    caret: String,
    cycles: Option<u32>,
) -> Result<(), String> {
    let (phrases, timing) = resolve_inputs(source, timing_args)?;

    if cycles == Some(0) {
        return Ok(());
    }

    let line = inline_line();
    let mut animator = Animator::new(phrases);
    let mut completed: u32 = 0;

    loop {
        line.set_message(format!("{}{}", animator.frame(), caret));
        thread::sleep(animator.delay(&timing));

        if animator.tick() == (Tick::Advanced { wrapped: true }) {
            completed += 1;
            if cycles.is_some_and(|limit| completed >= limit) {
                break;
            }
        }
    }

    line.finish_and_clear();
    Ok(())
}

fn cmd_frames(
    source: SourceArgs,
    timing_args: TimingArgs,
    cycles: u32,
    format: OutputFormat,
) -> Result<(), String> {
    let (phrases, timing) = resolve_inputs(source, timing_args)?;
    let timeline = expand(phrases, &timing, cycles);
    print!("{}", format_timeline(&timeline, format));
    Ok(())
}

// ============================================================================
// INLINE RENDERING
// ============================================================================

/// A bare message line driven like a spinner, minus the spinner.
fn inline_line() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{msg}").unwrap());
    pb
}
