//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions: user input, the periodic
//! tick, and completions coming back from the service layer.

use crossterm::event::KeyEvent;
use liblingo::types::Language;

/// Actions that trigger state transitions
#[derive(Debug, Clone)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Periodic tick
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Translator ===
    /// Input text changed
    InputChanged(String),

    /// User requested a translation (side effect handled outside the reducer)
    TranslateRequested,

    /// A translate request was issued; bumps the sequence number
    TranslateStarted,

    /// Translate request finished successfully
    TranslateCompleted { seq: u64, text: String },

    /// Translate request failed
    TranslateFailed { seq: u64, error: String },

    // === Language list ===
    /// Startup language fetch succeeded
    LanguagesLoaded(Vec<Language>),

    /// Startup language fetch failed; the list stays empty
    LanguagesFailed(String),

    // === Language picker ===
    /// Open the picker overlay
    OpenPicker,

    /// Close the picker without changing the selection
    ClosePicker,

    /// Move the picker highlight up one row
    PickerUp,

    /// Move the picker highlight down one row
    PickerDown,

    /// Select the highlighted language and close the picker
    PickerConfirmed,

    // === Help ===
    /// Show help overlay
    ShowHelp,

    /// Hide help overlay
    HideHelp,

    // === Status bar ===
    /// Update status message
    SetStatus(String),

    /// Clear status message
    ClearStatus,

    /// Quit the application
    Quit,
}
