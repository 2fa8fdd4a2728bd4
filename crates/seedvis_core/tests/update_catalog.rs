use std::sync::Once;

use pretty_assertions::assert_eq;
use seedvis_core::{update, AppState, CatalogRowView, Effect, Msg, PlaybackPhase};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

fn ingest(state: AppState, names: &[&str]) -> AppState {
    let names = names.iter().map(|name| name.to_string()).collect();
    let (state, effects) = update(state, Msg::OutputFilesIngested(names));
    assert!(effects.is_empty());
    state
}

fn file_names(state: &AppState) -> Vec<String> {
    state.view().files.into_iter().map(|row| row.name).collect()
}

#[test]
fn ingest_sorts_independent_of_input_order() {
    init_logging();
    let forward = ingest(AppState::new(), &["a.txt", "b.txt"]);
    let backward = ingest(AppState::new(), &["b.txt", "a.txt"]);

    assert_eq!(file_names(&forward), vec!["a.txt", "b.txt"]);
    assert_eq!(file_names(&backward), vec!["a.txt", "b.txt"]);
}

#[test]
fn ingest_uses_codepoint_order() {
    init_logging();
    let state = ingest(AppState::new(), &["b.txt", "B.txt", "a.txt", "10.txt", "9.txt"]);
    assert_eq!(
        file_names(&state),
        vec!["10.txt", "9.txt", "B.txt", "a.txt", "b.txt"]
    );
}

#[test]
fn ingest_derives_seed_per_file() {
    init_logging();
    let state = ingest(AppState::new(), &["abcd.txt", "abcd_1234.txt", "1234.txt"]);
    assert_eq!(
        state.view().files,
        vec![
            CatalogRowView {
                name: "1234.txt".to_string(),
                seed: Some(1234),
            },
            CatalogRowView {
                name: "abcd.txt".to_string(),
                seed: None,
            },
            CatalogRowView {
                name: "abcd_1234.txt".to_string(),
                seed: Some(1234),
            },
        ]
    );
}

#[test]
fn empty_ingest_disables_selector() {
    init_logging();
    let state = ingest(AppState::new(), &["a.txt"]);
    assert!(state.view().file_selector_enabled);

    let state = ingest(state, &[]);
    let view = state.view();
    assert!(!view.file_selector_enabled);
    assert!(view.files.is_empty());
    assert_eq!(view.selected_file, None);

    let (_state, effects) = update(state, Msg::OutputFileSelected(0));
    assert!(effects.is_empty());
}

#[test]
fn new_selection_replaces_instead_of_merging() {
    init_logging();
    let state = ingest(AppState::new(), &["a.txt", "b.txt"]);
    let state = ingest(state, &["c.txt"]);
    assert_eq!(file_names(&state), vec!["c.txt"]);
}

#[test]
fn selecting_requests_lazy_load() {
    init_logging();
    let state = ingest(AppState::new(), &["b.txt", "a.txt"]);
    let (state, effects) = update(state, Msg::OutputFileSelected(1));
    assert_eq!(
        effects,
        vec![Effect::LoadOutputFile {
            index: 1,
            name: "b.txt".to_string(),
        }]
    );
    assert_eq!(state.view().selected_file, Some(1));
}

#[test]
fn loaded_file_with_seed_regenerates_input_before_playback() {
    init_logging();
    let state = ingest(AppState::new(), &["out_0042.txt"]);
    let (state, _) = update(state, Msg::OutputFileSelected(0));
    let (state, effects) = update(
        state,
        Msg::OutputFileLoaded {
            index: 0,
            result: Ok("ok\nok\n".to_string()),
        },
    );

    // Playback waits for the matching input.
    assert_eq!(effects, vec![Effect::GenerateInput { seed: 42 }]);
    assert_eq!(state.view().seed, 42);
    assert_eq!(state.view().output, "ok\nok\n");
    assert_eq!(state.view().playback.phase, PlaybackPhase::Idle);

    let (state, effects) = update(
        state,
        Msg::InputGenerated {
            seed: 42,
            result: Ok("input 42".to_string()),
        },
    );
    assert_eq!(state.view().input, "input 42");
    assert!(matches!(
        effects.as_slice(),
        [Effect::ComputeMaxTurn { input, output, .. }]
            if &**input == "input 42" && &**output == "ok\nok\n"
    ));
}

#[test]
fn failed_generation_for_file_seed_leaves_playback_idle() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::InputEdited("input 1".to_string()));
    let state = ingest(state, &["abcd_0007.txt"]);
    let (state, _) = update(state, Msg::OutputFileSelected(0));
    let (state, _) = update(
        state,
        Msg::OutputFileLoaded {
            index: 0,
            result: Ok("ok\nok\nok\n".to_string()),
        },
    );
    let (state, effects) = update(
        state,
        Msg::InputGenerated {
            seed: 7,
            result: Err("seed rejected".to_string()),
        },
    );

    // No max-turn request: the old input is never paired with the new output.
    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.seed, 7);
    assert_eq!(view.input, "");
    assert_eq!(view.output, "ok\nok\nok\n");
    assert_eq!(view.playback.phase, PlaybackPhase::Idle);
    assert_eq!(view.playback.frame, None);
    assert_eq!(
        view.notice.as_deref(),
        Some("Input generation failed for seed 7: seed rejected")
    );
}

#[test]
fn loaded_file_without_seed_keeps_current_input() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::InputEdited("manual".to_string()));
    let state = ingest(state, &["answer.txt"]);
    let (state, _) = update(state, Msg::OutputFileSelected(0));
    let (state, effects) = update(
        state,
        Msg::OutputFileLoaded {
            index: 0,
            result: Ok("ok\n".to_string()),
        },
    );
    assert_eq!(state.view().seed, 0);
    assert!(matches!(
        effects.as_slice(),
        [Effect::ComputeMaxTurn { input, .. }] if &**input == "manual"
    ));
}

#[test]
fn load_for_unselected_entry_is_dropped() {
    init_logging();
    let state = ingest(AppState::new(), &["a.txt", "b.txt"]);
    let (state, _) = update(state, Msg::OutputFileSelected(0));
    let (state, _) = update(state, Msg::OutputFileSelected(1));
    let (state, effects) = update(
        state,
        Msg::OutputFileLoaded {
            index: 0,
            result: Ok("stale".to_string()),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.view().output, "");
}

#[test]
fn load_failure_is_reported_inline() {
    init_logging();
    let state = ingest(AppState::new(), &["a.txt"]);
    let (state, _) = update(state, Msg::OutputFileSelected(0));
    let (state, effects) = update(
        state,
        Msg::OutputFileLoaded {
            index: 0,
            result: Err("permission denied".to_string()),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(
        state.view().notice.as_deref(),
        Some("Could not read output file: permission denied")
    );
}
