//! Language picker overlay
//!
//! Centered list of the languages the service advertises, in service order.
//! The highlight lives in `PickerState`; the committed selection is a
//! language code resolved at render time.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::AppState;

use super::centered_rect;

/// Render the picker overlay
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let popup_area = centered_rect(40, 60, area);

    let block = Block::default()
        .title(" Target language ")
        .borders(Borders::ALL)
        .border_style(if state.config.colors_enabled {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        });

    frame.render_widget(Clear, popup_area);

    if state.translator.languages.is_empty() {
        let message = if state.translator.languages_loaded {
            "No languages available"
        } else {
            "Loading languages..."
        };

        frame.render_widget(
            Paragraph::new(message).block(block).alignment(Alignment::Center),
            popup_area,
        );
        return;
    }

    let items: Vec<ListItem> = state
        .translator
        .languages
        .iter()
        .map(|language| ListItem::new(format!("{} ({})", language.name, language.code)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(
        state
            .picker
            .highlighted
            .min(state.translator.languages.len() - 1),
    ));

    frame.render_stateful_widget(list, popup_area, &mut list_state);
}
