//! Test translator state transitions
//!
//! Verifies that translator state updates correctly through input changes,
//! language-list arrival, and translation completions.

use liblingo::types::Language;
use lingo_tui::app::{reduce, Action, AppState, Output};

fn languages(codes: &[(&str, &str)]) -> Vec<Language> {
    codes
        .iter()
        .map(|(code, name)| Language {
            code: code.to_string(),
            name: name.to_string(),
        })
        .collect()
}

#[test]
fn test_input_change_replaces_text_unconditionally() {
    let state = AppState::new();

    let state = reduce(state, Action::InputChanged("first".to_string()));
    assert_eq!(state.translator.input, "first");

    let state = reduce(state, Action::InputChanged("second".to_string()));
    assert_eq!(state.translator.input, "second");
}

#[test]
fn test_input_change_does_not_touch_output() {
    let state = AppState::new();
    let state = reduce(state, Action::TranslateStarted);
    let state = reduce(
        state,
        Action::TranslateCompleted {
            seq: 1,
            text: "hola".to_string(),
        },
    );

    let state = reduce(state, Action::InputChanged("new text".to_string()));

    // The previous result stays visible until a new request resolves
    assert_eq!(state.translator.output, Output::Done("hola".to_string()));
}

#[test]
fn test_languages_loaded_preserves_service_order() {
    let state = AppState::new();

    let state = reduce(
        state,
        Action::LanguagesLoaded(languages(&[
            ("zh", "Chinese"),
            ("en", "English"),
            ("az", "Azerbaijani"),
        ])),
    );

    let codes: Vec<&str> = state
        .translator
        .languages
        .iter()
        .map(|l| l.code.as_str())
        .collect();
    assert_eq!(codes, vec!["zh", "en", "az"]);
    assert_eq!(state.translator.target_code.as_deref(), Some("zh"));
}

#[test]
fn test_languages_failed_is_silent_empty_list() {
    let state = AppState::new();

    let state = reduce(
        state,
        Action::LanguagesFailed("connection refused".to_string()),
    );

    // No distinct error surface: just an empty list and no translation
    assert!(state.translator.languages.is_empty());
    assert!(state.translator.languages_loaded);
    assert!(state.status.message.is_none());
    assert!(!state.can_translate());
}

#[test]
fn test_translation_success_flow() {
    let state = AppState::new();
    let state = reduce(state, Action::LanguagesLoaded(languages(&[("es", "Spanish")])));
    let state = reduce(state, Action::InputChanged("hello".to_string()));

    let state = reduce(state, Action::TranslateStarted);
    assert_eq!(state.translator.output, Output::Pending);

    let seq = state.translator.last_seq;
    let state = reduce(
        state,
        Action::TranslateCompleted {
            seq,
            text: "hola".to_string(),
        },
    );

    assert_eq!(state.translator.output, Output::Done("hola".to_string()));
    // Input is preserved for follow-up edits
    assert_eq!(state.translator.input, "hello");
}

#[test]
fn test_translation_failure_is_generic() {
    let state = AppState::new();
    let state = reduce(state, Action::TranslateStarted);

    let seq = state.translator.last_seq;
    let state = reduce(
        state,
        Action::TranslateFailed {
            seq,
            error: "Service returned status 500".to_string(),
        },
    );

    match &state.translator.output {
        Output::Failed(reason) => assert!(reason.contains("500")),
        other => panic!("Expected Failed, got {:?}", other),
    }
}

#[test]
fn test_out_of_order_completions_latest_issued_wins() {
    let state = AppState::new();

    // Two overlapping requests
    let state = reduce(state, Action::TranslateStarted); // seq 1
    let first_seq = state.translator.last_seq;
    let state = reduce(state, Action::TranslateStarted); // seq 2
    let second_seq = state.translator.last_seq;
    assert!(second_seq > first_seq);

    // They resolve out of order: the newer one first
    let state = reduce(
        state,
        Action::TranslateCompleted {
            seq: second_seq,
            text: "newer".to_string(),
        },
    );
    let state = reduce(
        state,
        Action::TranslateCompleted {
            seq: first_seq,
            text: "older".to_string(),
        },
    );

    // The older response must not overwrite the newer one
    assert_eq!(state.translator.output, Output::Done("newer".to_string()));
}

#[test]
fn test_unresolvable_target_code_blocks_translation() {
    let mut state = AppState::new();
    state = reduce(state, Action::LanguagesLoaded(languages(&[("en", "English")])));

    // A selection that no longer matches any listed language
    state.translator.target_code = Some("xx".to_string());

    assert!(state.translator.target_language().is_none());
    assert!(state.translator.target_index().is_none());
    assert!(!state.can_translate());
}
