// crates/collatz-core/src/dynamics/engine.rs

use crate::adic::{valuation::odd_part, AdicProfile, VPair};
use crate::dynamics::run::{AdicRun, StopReason};
use crate::dynamics::state::{CycleInfo, StateKey, VisitedMap};
use crate::dynamics::step::{step_full, step_odd_only, OddStep};
use crate::error::{CollatzError, Result};
use crate::profile::profile::{CollatzParams, RunConfig, TraceMode};
use crate::validate::{validate_params, validate_run_config};

/// State-cycle generator for one start value.
///
/// `Generator::new` does the odd normalization, then seeds residues and the
/// visited map from `sequence[0]`. `step` advances one transition.
pub struct Generator {
    params: CollatzParams,
    config: RunConfig,
    sequence: Vec<i64>,
    current: i64,
    steps: u64,
    visited: VisitedMap,
    adic: Option<AdicProfile>,
    cycle: Option<CycleInfo>,
}

impl Generator {
    pub fn new(start: i64, params: CollatzParams, config: RunConfig) -> Result<Self> {
        validate_params(&params)?;
        validate_run_config(&config)?;
        if start <= 0 {
            return Err(CollatzError::Validation(format!(
                "start value must be positive (got {start})"
            )));
        }

        let current = match config.mode {
            TraceMode::Full => start,
            TraceMode::OddOnly => odd_part(start),
        };

        let mut adic = config
            .track_adic
            .then(|| AdicProfile::new(config.mode, &config.residue_bits));
        if let Some(a) = adic.as_mut() {
            a.push_residues(current);
        }

        let mut visited = VisitedMap::new();
        if config.stop_on_state_cycle {
            visited.visit(StateKey::for_value(config.mode, current, &config.residue_bits), 0);
        }

        let cap = config.max_steps.min(4096) as usize + 1;
        let mut sequence = Vec::with_capacity(cap);
        sequence.push(current);

        Ok(Self {
            params,
            config,
            sequence,
            current,
            steps: 0,
            visited,
            adic,
            cycle: None,
        })
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn sequence(&self) -> &[i64] {
        &self.sequence
    }

    /// Advance one transition. Returns Some(reason) once the run is over;
    /// the budget check is left to the caller.
    pub fn step(&mut self) -> Option<StopReason> {
        let p = self.params;

        let (next, pre_division) = match self.config.mode {
            TraceMode::Full => match step_full(self.current, p.divisor, p.multiplier, p.increment) {
                Some(n) if n > 0 => (n, n),
                _ => return Some(StopReason::NonFiniteOrNegative),
            },
            TraceMode::OddOnly => {
                let s = step_odd_only(self.current, p.multiplier, p.increment);
                if let Some(a) = self.adic.as_mut() {
                    a.k_profile.push(s.k());
                }
                match s {
                    OddStep::Valid { raw, value, .. } => (value, raw),
                    OddStep::Invalid { .. } => return Some(StopReason::NonFiniteOrNegative),
                }
            }
        };

        self.current = next;
        self.sequence.push(next);
        self.steps += 1;

        if let Some(a) = self.adic.as_mut() {
            a.push_residues(next);
            a.v_profile.push(VPair::of(pre_division as u64));
        }

        if self.config.stop_on_state_cycle {
            let key = StateKey::for_value(self.config.mode, next, &self.config.residue_bits);
            let index = self.sequence.len() - 1;
            if let Some(c) = self.visited.visit(key, index) {
                self.cycle = Some(c);
                return Some(StopReason::CycleDetected);
            }
        }

        None
    }

    pub fn finish(self, stopped_because: StopReason) -> AdicRun {
        let detected_cycle = self
            .cycle
            .as_ref()
            .map(|c| self.sequence[c.start_index..].to_vec());

        let adic = self.adic.map(|mut a| {
            a.cycle_by_state = self.cycle.clone();
            a
        });

        AdicRun {
            sequence: self.sequence,
            steps: self.steps,
            stopped_because,
            cycle: self.cycle,
            detected_cycle,
            adic,
        }
    }
}

/// Run the state-cycle generator from `start`.
///
/// Bad parameters are errors. A start value <= 0 is a normal result with
/// `NonFiniteOrNegative` and a one-element sequence.
pub fn generate(start: i64, params: &CollatzParams, config: &RunConfig) -> Result<AdicRun> {
    validate_params(params)?;
    validate_run_config(config)?;

    if start <= 0 {
        return Ok(AdicRun {
            sequence: vec![start],
            steps: 0,
            stopped_because: StopReason::NonFiniteOrNegative,
            cycle: None,
            detected_cycle: None,
            adic: config
                .track_adic
                .then(|| AdicProfile::new(config.mode, &config.residue_bits)),
        });
    }

    let mut g = Generator::new(start, *params, config.clone())?;
    while g.steps() < config.max_steps {
        if let Some(reason) = g.step() {
            return Ok(g.finish(reason));
        }
    }
    Ok(g.finish(StopReason::MaxStepsReached))
}
