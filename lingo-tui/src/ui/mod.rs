//! UI rendering
//!
//! Pure rendering functions that transform state into terminal frames.
//! No side effects, no business logic; user intents are handled by the
//! event loop and reducer.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use tui_textarea::TextArea;

use crate::app::{AppState, Output};

mod picker;

/// Render the application UI
///
/// Main rendering entry point: input pane, output pane, status bar, plus
/// whichever overlay is open.
pub fn render(frame: &mut Frame, state: &AppState, textarea: &TextArea) {
    let area = frame.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Input editor
            Constraint::Min(3),         // Translation output
            Constraint::Length(4),      // Status bar
        ])
        .split(area);

    frame.render_widget(textarea.widget(), chunks[0]);
    render_output(frame, chunks[1], state);
    render_status_bar(frame, chunks[2], state);

    if state.picker.open {
        picker::render(frame, area, state);
    }

    if state.help_visible {
        render_help_overlay(frame, area, state);
    }
}

/// Style helper honoring the color toggle
fn fg(state: &AppState, color: Color) -> Style {
    if state.config.colors_enabled {
        Style::default().fg(color)
    } else {
        Style::default()
    }
}

/// Render the translation output pane
fn render_output(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Translation ")
        .borders(Borders::ALL)
        .border_style(match state.translator.output {
            Output::Pending => fg(state, Color::Yellow),
            Output::Failed(_) => fg(state, Color::Red),
            _ => Style::default(),
        });

    let content = match &state.translator.output {
        Output::Idle => Paragraph::new(Span::styled(
            "Translation will appear here",
            fg(state, Color::DarkGray),
        )),
        Output::Pending => Paragraph::new(Span::styled("Translating...", fg(state, Color::Yellow))),
        Output::Done(text) => Paragraph::new(text.as_str()),
        // The reason is in the log; the UI stays generic
        Output::Failed(_) => Paragraph::new(Span::styled(
            "Translation failed",
            fg(state, Color::Red),
        )),
    };

    frame.render_widget(content.block(block).wrap(Wrap { trim: false }), area);
}

/// Render status bar with the current target language and key hints
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let target_info = match state.translator.target_language() {
        Some(language) => format!("Target: {} ({})", language.name, language.code),
        None if !state.translator.languages_loaded => "Loading languages...".to_string(),
        None => "No languages available".to_string(),
    };

    let mut first_line = vec![Span::styled(
        target_info,
        fg(state, Color::Cyan).add_modifier(Modifier::BOLD),
    )];
    if let Some(ref message) = state.status.message {
        first_line.push(Span::raw(" | "));
        first_line.push(Span::raw(message.as_str()));
    }

    let hints = "Ctrl+T: Translate | Ctrl+L: Language | F1: Help | Ctrl+Q: Quit";

    let lines = vec![
        Line::from(first_line),
        Line::from(Span::styled(hints, fg(state, Color::Gray))),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL)),
        area,
    );
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect, state: &AppState) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Global:"),
        Line::from("  Ctrl+Q   - Quit"),
        Line::from("  F1       - Toggle help"),
        Line::from(""),
        Line::from("Translator:"),
        Line::from("  Ctrl+T   - Translate the input text"),
        Line::from("  Ctrl+L   - Choose target language"),
        Line::from(""),
        Line::from("Language picker:"),
        Line::from("  Up/Down  - Move highlight"),
        Line::from("  Enter    - Select"),
        Line::from("  Esc      - Close"),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(fg(state, Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

/// Helper to create centered rectangle
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
