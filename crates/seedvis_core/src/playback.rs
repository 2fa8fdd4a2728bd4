//! Turn-indexed playback state machine.
//!
//! Every turn change clears the previous score/error/frame and asks the
//! engine for the new turn, so the view never pairs a turn with a frame that
//! was rendered for a different one.

use std::sync::Arc;

use crate::{Effect, Revision, TimerId, TurnOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackPhase {
    /// Input or output is empty.
    #[default]
    Idle,
    Ready,
    Playing,
    Paused,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlaybackState {
    input: Arc<str>,
    output: Arc<str>,
    phase: PlaybackPhase,
    turn: usize,
    max_turn: usize,
    revision: Revision,
    max_turn_pending: bool,
    /// Turn that `score`/`error`/`frame` were rendered for.
    rendered_turn: Option<usize>,
    score: Option<i64>,
    error: Option<String>,
    frame: Option<String>,
    timer: Option<TimerId>,
    next_timer_id: TimerId,
}

impl PlaybackState {
    pub fn phase(&self) -> PlaybackPhase {
        self.phase
    }

    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn max_turn(&self) -> usize {
        self.max_turn
    }

    pub fn revision(&self) -> Revision {
        self.revision
    }

    pub fn score(&self) -> Option<i64> {
        self.score
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn frame(&self) -> Option<&str> {
        self.frame.as_deref()
    }

    pub fn active_timer(&self) -> Option<TimerId> {
        self.timer
    }

    /// True once the engine has answered for the current turn.
    pub fn is_settled(&self) -> bool {
        !self.max_turn_pending
            && (self.rendered_turn == Some(self.turn) || self.error.is_some())
    }

    /// Installs a new input/output pair. Any running timer is cancelled first,
    /// then the turn range is recomputed from scratch.
    pub(crate) fn load(&mut self, input: Arc<str>, output: Arc<str>) -> Vec<Effect> {
        let mut effects = Vec::new();
        self.cancel_timer(&mut effects);

        self.revision += 1;
        self.input = input;
        self.output = output;
        self.turn = 0;
        self.max_turn = 0;
        self.max_turn_pending = false;
        self.clear_outcome();

        if self.input.trim().is_empty() || self.output.trim().is_empty() {
            self.phase = PlaybackPhase::Idle;
            return effects;
        }

        self.phase = PlaybackPhase::Ready;
        self.max_turn_pending = true;
        effects.push(Effect::ComputeMaxTurn {
            revision: self.revision,
            input: self.input.clone(),
            output: self.output.clone(),
        });
        effects
    }

    pub(crate) fn apply_max_turn(
        &mut self,
        revision: Revision,
        result: Result<usize, String>,
    ) -> Vec<Effect> {
        if revision != self.revision || !self.max_turn_pending {
            return Vec::new();
        }
        self.max_turn_pending = false;
        match result {
            Ok(max_turn) => {
                self.max_turn = max_turn;
                self.turn = self.turn.min(self.max_turn);
                vec![self.request_frame()]
            }
            Err(message) => {
                self.max_turn = 0;
                self.turn = 0;
                self.clear_outcome();
                self.error = Some(message);
                Vec::new()
            }
        }
    }

    /// Stores the engine's answer for `turn`. An error halts playback at
    /// that turn.
    pub(crate) fn apply_frame(
        &mut self,
        revision: Revision,
        turn: usize,
        result: Result<TurnOutcome, String>,
    ) -> (bool, Vec<Effect>) {
        if revision != self.revision || turn != self.turn || self.max_turn_pending {
            return (false, Vec::new());
        }
        self.rendered_turn = Some(turn);
        let failure = match result {
            Ok(outcome) if outcome.error.is_empty() => {
                self.score = Some(outcome.score);
                self.frame = Some(outcome.frame);
                self.error = None;
                None
            }
            Ok(outcome) => Some(outcome.error),
            Err(message) => Some(message),
        };

        let mut effects = Vec::new();
        if let Some(message) = failure {
            self.score = None;
            self.frame = None;
            self.error = Some(message);
            if self.phase == PlaybackPhase::Playing {
                self.phase = PlaybackPhase::Paused;
                self.cancel_timer(&mut effects);
            }
        }
        (true, effects)
    }

    pub(crate) fn play(&mut self) -> Vec<Effect> {
        let can_play = matches!(self.phase, PlaybackPhase::Ready | PlaybackPhase::Paused)
            && self.max_turn > 0
            && !self.max_turn_pending;
        if !can_play {
            return Vec::new();
        }

        let mut effects = Vec::new();
        if self.turn == self.max_turn {
            self.turn = 0;
            effects.push(self.request_frame());
        } else if self.error.is_some() {
            // Halted on a failing turn; only a manual turn change moves past it.
            return Vec::new();
        }

        self.phase = PlaybackPhase::Playing;
        let timer_id = self.next_timer_id;
        self.next_timer_id += 1;
        self.timer = Some(timer_id);
        effects.push(Effect::StartTimer { timer_id });
        effects
    }

    pub(crate) fn pause(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.phase == PlaybackPhase::Playing {
            self.phase = PlaybackPhase::Paused;
            self.cancel_timer(&mut effects);
        }
        effects
    }

    /// Manual turn change: always leaves playback paused.
    pub(crate) fn seek(&mut self, turn: usize) -> Vec<Effect> {
        if self.phase == PlaybackPhase::Idle || self.max_turn_pending {
            return Vec::new();
        }
        let mut effects = Vec::new();
        self.cancel_timer(&mut effects);
        self.phase = PlaybackPhase::Paused;

        let target = turn.min(self.max_turn);
        if target != self.turn || !self.is_settled() {
            self.turn = target;
            effects.push(self.request_frame());
        }
        effects
    }

    pub(crate) fn step_forward(&mut self) -> Vec<Effect> {
        self.seek(self.turn.saturating_add(1))
    }

    pub(crate) fn step_backward(&mut self) -> Vec<Effect> {
        self.seek(self.turn.saturating_sub(1))
    }

    /// Periodic advance. Waits while the current frame is unresolved and
    /// pauses on reaching the last turn instead of looping.
    pub(crate) fn tick(&mut self, timer_id: TimerId) -> Vec<Effect> {
        if self.phase != PlaybackPhase::Playing || self.timer != Some(timer_id) {
            return Vec::new();
        }
        if self.rendered_turn != Some(self.turn) || self.error.is_some() {
            return Vec::new();
        }

        let mut effects = Vec::new();
        if self.turn < self.max_turn {
            self.turn += 1;
            effects.push(self.request_frame());
        }
        if self.turn >= self.max_turn {
            self.phase = PlaybackPhase::Paused;
            self.cancel_timer(&mut effects);
        }
        effects
    }

    fn request_frame(&mut self) -> Effect {
        self.clear_outcome();
        Effect::Visualize {
            revision: self.revision,
            turn: self.turn,
            input: self.input.clone(),
            output: self.output.clone(),
        }
    }

    fn clear_outcome(&mut self) {
        self.rendered_turn = None;
        self.score = None;
        self.error = None;
        self.frame = None;
    }

    fn cancel_timer(&mut self, effects: &mut Vec<Effect>) {
        if let Some(timer_id) = self.timer.take() {
            effects.push(Effect::CancelTimer { timer_id });
        }
    }
}
