use crate::{AppState, CaseCount, Effect, Msg, PlaybackState, CASE_COUNT_MAX, CASE_COUNT_MIN};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SeedChanged(seed) => {
            state.set_awaiting_input(false);
            vec![state.set_seed(seed)]
        }
        Msg::CaseCountChanged(value) => {
            match CaseCount::new(value) {
                Some(case_count) => state.set_case_count(case_count),
                None => state.set_notice(format!(
                    "#cases must be between {CASE_COUNT_MIN} and {CASE_COUNT_MAX}, got {value}"
                )),
            }
            Vec::new()
        }
        Msg::InputEdited(text) => {
            state.set_awaiting_input(false);
            state.set_input(text);
            state.reload_playback()
        }
        Msg::OutputEdited(text) => {
            state.set_output(text);
            if state.awaiting_input() {
                Vec::new()
            } else {
                state.reload_playback()
            }
        }
        Msg::InputGenerated { seed, result } => {
            if seed != state.seed() {
                // Answer for a seed the user already moved away from.
                return (state, Vec::new());
            }
            state.set_awaiting_input(false);
            match result {
                Ok(text) => state.set_input(text),
                Err(message) => {
                    // The previous input belongs to another seed; playback goes idle.
                    state.set_input(String::new());
                    state.set_notice(format!("Input generation failed for seed {seed}: {message}"));
                }
            }
            state.reload_playback()
        }
        Msg::DownloadClicked => {
            if state.archive_mut().begin() {
                state.mark_dirty();
                vec![Effect::BuildArchive {
                    seed: state.seed(),
                    case_count: state.case_count(),
                }]
            } else {
                Vec::new()
            }
        }
        Msg::ArchiveProgress(percent) => {
            if state.archive_mut().advance(percent) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ArchiveFinished(result) => {
            if state.archive_mut().finish() {
                match result {
                    Ok(filename) => state.set_notice(format!("Downloaded {filename}")),
                    Err(message) => state.set_notice(format!("Download failed: {message}")),
                }
            }
            Vec::new()
        }
        Msg::OutputFilesIngested(names) => {
            state.catalog_mut().ingest(names);
            state.mark_dirty();
            Vec::new()
        }
        Msg::OutputFileSelected(index) => match state.catalog_mut().select(index) {
            Some(entry) => {
                let name = entry.name.clone();
                state.mark_dirty();
                vec![Effect::LoadOutputFile { index, name }]
            }
            None => Vec::new(),
        },
        Msg::OutputFileLoaded { index, result } => {
            if state.catalog().selected() != Some(index) {
                return (state, Vec::new());
            }
            let seed = state.catalog().selected_entry().and_then(|entry| entry.seed);
            match result {
                Ok(content) => {
                    state.set_output(content);
                    match seed {
                        Some(seed) if seed != state.seed() => {
                            // Reload once the matching input exists.
                            state.set_awaiting_input(true);
                            vec![state.set_seed(seed)]
                        }
                        _ => state.reload_playback(),
                    }
                }
                Err(message) => {
                    state.set_notice(format!("Could not read output file: {message}"));
                    Vec::new()
                }
            }
        }
        Msg::MaxTurnComputed { revision, result } => {
            let effects = state.playback_mut().apply_max_turn(revision, result);
            state.mark_dirty();
            effects
        }
        Msg::FrameRendered {
            revision,
            turn,
            result,
        } => {
            let (applied, effects) = state.playback_mut().apply_frame(revision, turn, result);
            if applied {
                state.mark_dirty();
            }
            effects
        }
        Msg::PlayClicked => {
            let effects = state.playback_mut().play();
            if !effects.is_empty() {
                state.mark_dirty();
            }
            effects
        }
        Msg::PauseClicked => {
            let effects = state.playback_mut().pause();
            if !effects.is_empty() {
                state.mark_dirty();
            }
            effects
        }
        Msg::TurnChanged(turn) => with_playback_change(&mut state, |p| p.seek(turn)),
        Msg::StepForward => with_playback_change(&mut state, |p| p.step_forward()),
        Msg::StepBackward => with_playback_change(&mut state, |p| p.step_backward()),
        Msg::PlaybackTick { timer_id } => {
            let effects = state.playback_mut().tick(timer_id);
            if !effects.is_empty() {
                state.mark_dirty();
            }
            effects
        }
    };

    (state, effects)
}

fn with_playback_change(
    state: &mut AppState,
    change: impl FnOnce(&mut PlaybackState) -> Vec<Effect>,
) -> Vec<Effect> {
    let before = (state.playback().phase(), state.playback().turn());
    let effects = change(state.playback_mut());
    let after = (state.playback().phase(), state.playback().turn());
    if before != after || !effects.is_empty() {
        state.mark_dirty();
    }
    effects
}
