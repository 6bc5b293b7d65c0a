//! Pure rendering: map App state to ratatui widget trees.
//!
//! State in, widgets out; the only effect is `Frame::render_widget()`
//! writing to the terminal buffer. The animated line is the visible prefix
//! followed by the caret glyph — never any other substring.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::state::App;
use super::theme;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the app to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    // Common layout: title bar at top, stage in the middle, help at bottom
    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Min(0),    // stage
        Constraint::Length(1), // help
    ])
    .split(area);

    frame.render_widget(render_title(), chunks[0]);
    render_stage(app, frame, chunks[1]);
    frame.render_widget(render_help(), chunks[2]);
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

fn render_title() -> Paragraph<'static> {
    Paragraph::new(Span::styled(" typeloop", theme::STYLE_TITLE))
}

fn render_help() -> Paragraph<'static> {
    Paragraph::new(Span::styled(
        " [space] pause  [n] next  [r] restart  [q] quit",
        theme::STYLE_HELP,
    ))
}

// ============================================================================
// STAGE
// ============================================================================

/// The animated line, vertically centered, with a status line underneath.
fn render_stage(app: &App, frame: &mut Frame, area: Rect) {
    let rows = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Length(1), // phrase + caret
        Constraint::Length(1), // status
        Constraint::Min(0),
    ])
    .split(area);

    let line = Line::from(vec![
        Span::styled(app.animator.frame().to_string(), theme::STYLE_PHRASE),
        Span::styled(app.caret.clone(), theme::STYLE_CARET),
    ]);
    let phrase = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(phrase, rows[1]);

    frame.render_widget(render_status(app), rows[2]);
}

/// Phrase counter and phase, or the paused indicator.
fn render_status(app: &App) -> Paragraph<'static> {
    if app.paused {
        Paragraph::new(Span::styled("paused", theme::STYLE_PAUSED))
            .alignment(Alignment::Center)
    } else {
        let status = format!(
            "{}/{} · {}",
            app.animator.index() + 1,
            app.animator.phrase_count(),
            app.animator.phase()
        );
        Paragraph::new(Span::styled(status, theme::STYLE_DIM)).alignment(Alignment::Center)
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
    use crate::tui::update::on_tick;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn make_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(60, 20);
        Terminal::new(backend).unwrap()
    }

    fn app() -> App {
        let phrases = Phrases::new(vec!["Hello".into(), "World".into()]).unwrap();
        App::new(phrases, Timing::default(), "▌".into())
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect()
    }

    #[test]
    fn initial_frame_renders_without_panic() {
        let mut terminal = make_terminal();
        let app = app();
        terminal
            .draw(|frame| render(&app, frame))
            .expect("render should not panic");
    }

    #[test]
    fn typed_prefix_appears_in_the_buffer() {
        let mut terminal = make_terminal();
        let mut app = app();
        on_tick(&mut app);
        on_tick(&mut app);
        on_tick(&mut app);
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_text(&terminal);
        assert!(content.contains("Hel"), "Buffer should contain the prefix");
    }

    #[test]
    fn caret_follows_the_prefix() {
        let mut terminal = make_terminal();
        let mut app = app();
        on_tick(&mut app);
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_text(&terminal);
        assert!(content.contains("H▌"), "Caret should sit right after the prefix");
    }

    #[test]
    fn status_shows_counter_and_phase() {
        let mut terminal = make_terminal();
        let app = app();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_text(&terminal);
        assert!(content.contains("1/2"), "Should show the phrase counter");
        assert!(content.contains("typing"), "Should show the phase");
    }

    #[test]
    fn paused_indicator_replaces_the_status() {
        let mut terminal = make_terminal();
        let mut app = app();
        app.paused = true;
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_text(&terminal);
        assert!(content.contains("paused"));
    }

    #[test]
    fn help_line_lists_the_bindings() {
        let mut terminal = make_terminal();
        let app = app();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_text(&terminal);
        assert!(content.contains("[space] pause"));
        assert!(content.contains("[q] quit"));
    }

    #[test]
    fn tiny_terminal_renders_without_panic() {
        let backend = TestBackend::new(5, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = app();
        terminal
            .draw(|frame| render(&app, frame))
            .expect("render should not panic on tiny terminals");
    }

    #[test]
    fn custom_caret_glyph_is_rendered() {
        let mut terminal = make_terminal();
        let phrases = Phrases::new(vec!["Hi".into()]).unwrap();
        let app = App::new(phrases, Timing::default(), "_".into());
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_text(&terminal);
        assert!(content.contains('_'));
    }
}
