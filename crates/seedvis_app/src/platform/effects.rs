use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use engine_logging::{engine_error, engine_info, engine_warn};
use seedvis_core::{CaseCount, Effect, Msg, TurnOutcome};
use seedvis_engine::{
    build_seed_archive, DownloadSink, EngineHandle, OutputFileStore, VisOutcome,
};

use super::timer::Ticker;

/// Executes core effects and turns their results back into messages.
///
/// Playback and input engine calls run synchronously on the dispatching
/// thread; the returned messages must be dispatched before anything else
/// queued. Archive jobs and timers report back through `msg_tx` instead.
pub struct EffectRunner {
    engine: EngineHandle,
    store: OutputFileStore,
    sink: Arc<dyn DownloadSink>,
    ticker: Box<dyn Ticker>,
    msg_tx: mpsc::Sender<Msg>,
    interval: Duration,
}

impl EffectRunner {
    pub fn new(
        engine: EngineHandle,
        sink: Box<dyn DownloadSink>,
        ticker: Box<dyn Ticker>,
        msg_tx: mpsc::Sender<Msg>,
        interval: Duration,
    ) -> Self {
        Self {
            engine,
            store: OutputFileStore::default(),
            sink: Arc::from(sink),
            ticker,
            msg_tx,
            interval,
        }
    }

    /// Swaps in the files of a new directory selection.
    pub fn replace_store(&mut self, store: OutputFileStore) {
        self.store = store;
    }

    pub fn store(&self) -> &OutputFileStore {
        &self.store
    }

    pub fn run(&mut self, effect: Effect) -> Vec<Msg> {
        match effect {
            Effect::GenerateInput { seed } => {
                let result = self.engine.gen(seed).map_err(|err| {
                    engine_warn!("{}", err);
                    err.fault.message
                });
                vec![Msg::InputGenerated { seed, result }]
            }
            Effect::BuildArchive { seed, case_count } => {
                self.spawn_archive(seed, case_count);
                Vec::new()
            }
            Effect::LoadOutputFile { index, name } => {
                let result = self.store.load(index, &name).map_err(|err| {
                    engine_warn!("Loading {} failed: {}", name, err);
                    err.to_string()
                });
                vec![Msg::OutputFileLoaded { index, result }]
            }
            Effect::ComputeMaxTurn {
                revision,
                input,
                output,
            } => {
                let result = self.engine.max_turn(&input, &output).map_err(|fault| {
                    engine_warn!("max_turn failed: {}", fault);
                    fault.message
                });
                vec![Msg::MaxTurnComputed { revision, result }]
            }
            Effect::Visualize {
                revision,
                turn,
                input,
                output,
            } => {
                let result = match self.engine.vis(&input, &output, turn) {
                    Ok(outcome) => {
                        if !outcome.err.is_empty() {
                            engine_warn!("vis reported error at turn {}: {}", turn, outcome.err);
                        }
                        Ok(map_outcome(outcome))
                    }
                    Err(fault) => {
                        engine_warn!("vis failed at turn {}: {}", turn, fault);
                        Err(fault.message)
                    }
                };
                vec![Msg::FrameRendered {
                    revision,
                    turn,
                    result,
                }]
            }
            Effect::StartTimer { timer_id } => {
                self.ticker
                    .start(timer_id, self.interval, self.msg_tx.clone());
                Vec::new()
            }
            Effect::CancelTimer { timer_id } => {
                self.ticker.cancel(timer_id);
                Vec::new()
            }
        }
    }

    /// Packs the batch on a worker thread and hands it to the download sink.
    /// Each progress step is sent as soon as it is reported, then exactly one
    /// `ArchiveFinished`.
    fn spawn_archive(&self, seed: u64, case_count: CaseCount) {
        let engine = self.engine.clone();
        let sink = Arc::clone(&self.sink);
        let msg_tx = self.msg_tx.clone();

        thread::spawn(move || {
            let report = |percent: f64| {
                let _ = msg_tx.send(Msg::ArchiveProgress(percent));
            };
            let result = build_seed_archive(&engine, seed, case_count, &report).and_then(
                |archive| {
                    sink.deliver(&archive.filename, &archive.bytes)?;
                    Ok(archive.filename)
                },
            );

            let finished = match result {
                Ok(filename) => {
                    engine_info!("Download of {} triggered", filename);
                    Msg::ArchiveFinished(Ok(filename))
                }
                Err(err) => {
                    engine_error!("Archive for seed {} aborted: {}", seed, err);
                    Msg::ArchiveFinished(Err(err.to_string()))
                }
            };
            let _ = msg_tx.send(finished);
        });
    }
}

fn map_outcome(outcome: VisOutcome) -> TurnOutcome {
    TurnOutcome {
        score: outcome.score,
        error: outcome.err,
        frame: outcome.svg,
    }
}
