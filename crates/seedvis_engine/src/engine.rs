use std::sync::Arc;

use engine_logging::{engine_debug, engine_error, engine_info};

use crate::{EngineFault, EngineInitError, GenerationEngine, GenerationError, VisOutcome};

/// Ready-to-use engine capability.
///
/// The only way to obtain one is [`EngineHandle::initialize`], so holding a
/// handle proves `init` has completed. Clones share the same engine.
#[derive(Clone)]
pub struct EngineHandle {
    engine: Arc<dyn GenerationEngine>,
}

impl EngineHandle {
    pub fn initialize(engine: Arc<dyn GenerationEngine>) -> Result<Self, EngineInitError> {
        if let Err(fault) = engine.init() {
            engine_error!("Engine initialization failed: {}", fault);
            return Err(EngineInitError(fault));
        }
        engine_info!("Engine ready");
        Ok(Self { engine })
    }

    pub fn gen(&self, seed: u64) -> Result<String, GenerationError> {
        self.engine
            .gen(seed)
            .map_err(|fault| GenerationError { seed, fault })
    }

    pub fn max_turn(&self, input: &str, output: &str) -> Result<usize, EngineFault> {
        let result = self.engine.max_turn(input, output);
        engine_debug!(
            "max_turn input_len={} output_len={} -> {:?}",
            input.len(),
            output.len(),
            result
        );
        result
    }

    pub fn vis(&self, input: &str, output: &str, turn: usize) -> Result<VisOutcome, EngineFault> {
        self.engine.vis(input, output, turn)
    }
}

impl std::fmt::Debug for EngineHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineHandle").finish_non_exhaustive()
    }
}
