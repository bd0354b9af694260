//! Application state
//!
//! Single source of truth for everything the UI renders. State transitions
//! happen through the reducer (see `reducer.rs`); the event loop is the only
//! writer.

use liblingo::types::Language;

/// Root application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Help overlay visible?
    pub help_visible: bool,

    /// Translator state (input, output, languages, selection)
    pub translator: TranslatorState,

    /// Language picker overlay state
    pub picker: PickerState,

    /// Status bar state
    pub status: StatusBarState,

    /// UI configuration
    pub config: UiConfig,
}

/// Translator state
#[derive(Debug, Clone)]
pub struct TranslatorState {
    /// Text the user wants translated
    pub input: String,

    /// Result of the most recent translation request
    pub output: Output,

    /// Languages advertised by the service, in service order. Fetched once
    /// at startup and never refreshed.
    pub languages: Vec<Language>,

    /// Whether the initial language fetch has finished (successfully or not)
    pub languages_loaded: bool,

    /// Code of the chosen target language. Stored as a code rather than a
    /// list index so a reloaded or shrunken list can never leave the
    /// selection pointing out of range.
    pub target_code: Option<String>,

    /// Sequence number of the most recently issued translate request.
    /// Completions carrying an older number are discarded.
    pub last_seq: u64,
}

/// Observable result of the translate operation.
///
/// A tagged value instead of an overloaded empty string, so "nothing
/// requested yet", "in flight", and "failed" all render distinctly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// No translation requested yet
    Idle,
    /// A request is in flight
    Pending,
    /// Last request succeeded
    Done(String),
    /// Last request failed; the message is for the log, the UI stays generic
    Failed(String),
}

/// Language picker overlay state (purely visual)
#[derive(Debug, Clone)]
pub struct PickerState {
    /// Overlay visible?
    pub open: bool,

    /// Highlighted row, always clamped to the language list
    pub highlighted: usize,
}

/// Status bar state
#[derive(Debug, Clone)]
pub struct StatusBarState {
    /// Current status message
    pub message: Option<String>,
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            should_quit: false,
            help_visible: false,
            translator: TranslatorState::default(),
            picker: PickerState::default(),
            status: StatusBarState::default(),
            config: UiConfig::default(),
        }
    }
}

impl Default for TranslatorState {
    fn default() -> Self {
        Self {
            input: String::new(),
            output: Output::Idle,
            languages: Vec::new(),
            languages_loaded: false,
            target_code: None,
            last_seq: 0,
        }
    }
}

impl Default for PickerState {
    fn default() -> Self {
        Self {
            open: false,
            highlighted: 0,
        }
    }
}

impl Default for StatusBarState {
    fn default() -> Self {
        Self { message: None }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        let colors_enabled = std::env::var("NO_COLOR").is_err()
            && std::env::var("LINGO_TUI_NO_COLOR").is_err();

        let tick_rate_ms = std::env::var("LINGO_TUI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(100);

        Self {
            colors_enabled,
            tick_rate_ms,
        }
    }
}

impl AppState {
    /// Create new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a translation can be issued right now.
    ///
    /// True only when the stored target code resolves against the current
    /// language list; with an empty list (fetch failed or still loading)
    /// this is always false and no network call is attempted.
    pub fn can_translate(&self) -> bool {
        self.translator.target_language().is_some()
    }
}

impl TranslatorState {
    /// Resolve the stored target code against the language list.
    pub fn target_language(&self) -> Option<&Language> {
        let code = self.target_code.as_deref()?;
        self.languages.iter().find(|l| l.code == code)
    }

    /// Position of the target language in the list, for rendering.
    pub fn target_index(&self) -> Option<usize> {
        let code = self.target_code.as_deref()?;
        self.languages.iter().position(|l| l.code == code)
    }
}
