//! Pure reducer function for state transitions
//!
//! The reducer is a pure function `(State, Action) -> State`: no network, no
//! I/O, no mutation. All side effects (issuing requests, logging) happen in
//! the event loop and service layer; their outcomes come back as actions.

use super::actions::Action;
use super::state::{AppState, Output, PickerState, StatusBarState, TranslatorState};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Pure reducer function
///
/// Takes current state and an action, returns new state. Deterministic:
/// same inputs, same output.
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === UI Events ===
        Action::Key(key) => handle_key(state, key),
        Action::Tick => state,
        Action::Resize(_, _) => state, // Terminal auto-handles resize

        // === Translator ===
        Action::InputChanged(input) => AppState {
            translator: TranslatorState {
                input,
                ..state.translator
            },
            ..state
        },

        Action::TranslateRequested => {
            // The request itself is a side effect handled outside the
            // reducer; state changes arrive via TranslateStarted.
            state
        }

        Action::TranslateStarted => AppState {
            translator: TranslatorState {
                last_seq: state.translator.last_seq + 1,
                output: Output::Pending,
                ..state.translator
            },
            ..state
        },

        Action::TranslateCompleted { seq, text } => {
            if seq != state.translator.last_seq {
                // Stale response from a superseded request
                return state;
            }
            AppState {
                translator: TranslatorState {
                    output: Output::Done(text),
                    ..state.translator
                },
                ..state
            }
        }

        Action::TranslateFailed { seq, error } => {
            if seq != state.translator.last_seq {
                return state;
            }
            AppState {
                translator: TranslatorState {
                    output: Output::Failed(error),
                    ..state.translator
                },
                ..state
            }
        }

        // === Language list ===
        Action::LanguagesLoaded(languages) => {
            // Default the selection to the first language the service lists
            let target_code = state
                .translator
                .target_code
                .clone()
                .or_else(|| languages.first().map(|l| l.code.clone()));

            let highlighted = state
                .picker
                .highlighted
                .min(languages.len().saturating_sub(1));

            AppState {
                translator: TranslatorState {
                    languages,
                    languages_loaded: true,
                    target_code,
                    ..state.translator
                },
                picker: PickerState {
                    highlighted,
                    ..state.picker
                },
                ..state
            }
        }

        Action::LanguagesFailed(_) => AppState {
            translator: TranslatorState {
                languages: Vec::new(),
                languages_loaded: true,
                ..state.translator
            },
            ..state
        },

        // === Language picker ===
        Action::OpenPicker => AppState {
            picker: PickerState {
                open: true,
                highlighted: state.translator.target_index().unwrap_or(0),
            },
            ..state
        },

        Action::ClosePicker => AppState {
            picker: PickerState {
                open: false,
                ..state.picker
            },
            ..state
        },

        Action::PickerUp => AppState {
            picker: PickerState {
                highlighted: state.picker.highlighted.saturating_sub(1),
                ..state.picker
            },
            ..state
        },

        Action::PickerDown => {
            let last = state.translator.languages.len().saturating_sub(1);
            AppState {
                picker: PickerState {
                    highlighted: (state.picker.highlighted + 1).min(last),
                    ..state.picker
                },
                ..state
            }
        }

        Action::PickerConfirmed => {
            let target_code = state
                .translator
                .languages
                .get(state.picker.highlighted)
                .map(|l| l.code.clone())
                .or(state.translator.target_code.clone());

            AppState {
                translator: TranslatorState {
                    target_code,
                    ..state.translator
                },
                picker: PickerState {
                    open: false,
                    ..state.picker
                },
                ..state
            }
        }

        // === Help ===
        Action::ShowHelp => AppState {
            help_visible: true,
            ..state
        },

        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },

        // === Status bar ===
        Action::SetStatus(message) => AppState {
            status: StatusBarState {
                message: Some(message),
            },
            ..state
        },

        Action::ClearStatus => AppState {
            status: StatusBarState { message: None },
            ..state
        },

        Action::Quit => AppState {
            should_quit: true,
            ..state
        },
    }
}

/// Handle keyboard input
///
/// Maps keys to high-level actions. This is where keybindings are defined;
/// plain typing never reaches the reducer because the event loop feeds it to
/// the input widget instead.
fn handle_key(state: AppState, key: KeyEvent) -> AppState {
    // Global keybindings (work everywhere)
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::CONTROL)
        | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            return reduce(state, Action::Quit);
        }

        // Help
        (KeyCode::F(1), _) => {
            let action = if state.help_visible {
                Action::HideHelp
            } else {
                Action::ShowHelp
            };
            return reduce(state, action);
        }

        // Dismiss overlays
        (KeyCode::Esc, _) if state.picker.open => {
            return reduce(state, Action::ClosePicker);
        }
        (KeyCode::Esc, _) if state.help_visible => {
            return reduce(state, Action::HideHelp);
        }

        _ => {}
    }

    if state.picker.open {
        return handle_picker_key(state, key);
    }

    match (key.code, key.modifiers) {
        // Translate (side effect handled in the event loop)
        (KeyCode::Char('t'), KeyModifiers::CONTROL) => reduce(state, Action::TranslateRequested),

        // Language picker
        (KeyCode::Char('l'), KeyModifiers::CONTROL) => reduce(state, Action::OpenPicker),

        _ => state,
    }
}

/// Handle keys while the picker overlay is open
fn handle_picker_key(state: AppState, key: KeyEvent) -> AppState {
    match key.code {
        KeyCode::Up => reduce(state, Action::PickerUp),
        KeyCode::Down => reduce(state, Action::PickerDown),
        KeyCode::Enter => reduce(state, Action::PickerConfirmed),
        _ => state,
    }
}
