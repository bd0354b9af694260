//! lingo-tui - terminal client for LibreTranslate-compatible services
//!
//! Type text, pick a target language from the server-provided list, and
//! translate. All state lives in `AppState`; the loop below folds terminal
//! input and service completions through the reducer and issues network
//! requests as fire-and-forget tasks.

use crossterm::event::{KeyCode, KeyModifiers};
use tui_textarea::TextArea;

use liblingo::config::Config;
use lingo_tui::{
    app::{
        event::{EventHandler, TuiEvent},
        reduce, Action, AppState, Output,
    },
    error::Result,
    services::{ServiceEvent, ServiceHandle},
    terminal::{install_panic_hook, restore, setup, Tui},
    ui,
};

const INPUT_PLACEHOLDER: &str =
    "Type text to translate... (Ctrl+T to translate, Ctrl+L for languages, F1 for help)";

fn main() -> Result<()> {
    // Logging goes to stderr; initialize before the terminal takes over
    liblingo::logging::init();

    install_panic_hook();
    let mut terminal = setup()?;

    let result = run_app(&mut terminal);

    restore()?;
    result
}

fn run_app(terminal: &mut Tui) -> Result<()> {
    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!("Falling back to default config: {}", e);
        Config::default()
    });

    let mut state = AppState::new();

    // Service layer; the one-time language fetch starts immediately and its
    // result arrives through the event channel
    let services = ServiceHandle::from_config(&config)?;
    let service_rx = services.subscribe();
    services.load_languages();

    // Input editor (stateful widget)
    let mut textarea = TextArea::default();
    textarea.set_placeholder_text(INPUT_PLACEHOLDER);

    let event_handler = EventHandler::new(state.config.tick_rate_ms);

    // Main event loop
    loop {
        // Update input styling before render
        let border_style = if state.translator.output == Output::Pending
            && state.config.colors_enabled
        {
            ratatui::style::Style::default().fg(ratatui::style::Color::Yellow)
        } else {
            ratatui::style::Style::default()
        };
        textarea.set_block(
            ratatui::widgets::Block::default()
                .title(" Input ")
                .borders(ratatui::widgets::Borders::ALL)
                .border_style(border_style),
        );

        terminal.draw(|frame| ui::render(frame, &state, &textarea))?;

        let tui_event = event_handler.next()?;

        let action = match tui_event {
            TuiEvent::Key(key) => {
                let editing = !state.picker.open && !state.help_visible;

                // Chords and function keys are commands; everything else is
                // typing and belongs to the editor
                let is_command_key = key.modifiers.contains(KeyModifiers::CONTROL)
                    || matches!(key.code, KeyCode::F(_) | KeyCode::Esc);

                if editing
                    && key.code == KeyCode::Char('t')
                    && key.modifiers == KeyModifiers::CONTROL
                {
                    Action::TranslateRequested
                } else if editing && !is_command_key {
                    textarea.input(key);
                    Action::InputChanged(textarea.lines().join("\n"))
                } else {
                    Action::Key(key)
                }
            }
            other => other.into(),
        };

        state = reduce(state, action.clone());

        // Fold in service completions (language list, translation results)
        while let Ok(event) = service_rx.try_recv() {
            let action = match event {
                ServiceEvent::LanguagesLoaded(languages) => Action::LanguagesLoaded(languages),
                ServiceEvent::LanguagesFailed(error) => Action::LanguagesFailed(error),
                ServiceEvent::TranslationCompleted { seq, text } => {
                    Action::TranslateCompleted { seq, text }
                }
                ServiceEvent::TranslationFailed { seq, error } => {
                    Action::TranslateFailed { seq, error }
                }
            };
            state = reduce(state, action);
        }

        // Perform side effects
        if let Action::TranslateRequested = action {
            // With no resolvable target language (list empty because the
            // fetch failed, or still loading) this is a no-op: no request
            // is issued at all.
            if let Some(target) = state.translator.target_language().map(|l| l.code.clone()) {
                state = reduce(state, Action::TranslateStarted);
                services.translate(
                    state.translator.last_seq,
                    state.translator.input.clone(),
                    config.service.source_language.clone(),
                    target,
                );
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}
