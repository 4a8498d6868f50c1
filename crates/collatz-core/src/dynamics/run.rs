// crates/collatz-core/src/dynamics/run.rs

use std::fmt;

use crate::adic::AdicProfile;
use crate::dynamics::state::CycleInfo;
use crate::dynamics::tail::TailCycle;

/// Why a run stopped. None of these are errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StopReason {
    CycleDetected,
    MaxStepsReached,
    /// Start value or a produced value was <= 0 or left the i64 range.
    NonFiniteOrNegative,
}

impl StopReason {
    /// camelCase label used by the state-cycle generator.
    pub fn label(self) -> &'static str {
        match self {
            StopReason::CycleDetected => "cycleDetected",
            StopReason::MaxStepsReached => "maxStepsReached",
            StopReason::NonFiniteOrNegative => "nonFiniteOrNegative",
        }
    }

    /// snake_case label used by the tail-cycle generator.
    pub fn legacy_label(self) -> &'static str {
        match self {
            StopReason::CycleDetected => "cycle_detected",
            StopReason::MaxStepsReached => "max_steps_reached",
            StopReason::NonFiniteOrNegative => "non_finite_or_negative",
        }
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of the state-cycle generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdicRun {
    /// Start (odd-normalized in odd-only mode) followed by one value per step.
    pub sequence: Vec<i64>,
    pub steps: u64,
    pub stopped_because: StopReason,
    pub cycle: Option<CycleInfo>,
    /// `sequence[cycle.start_index..]` when a cycle was found.
    pub detected_cycle: Option<Vec<i64>>,
    pub adic: Option<AdicProfile>,
}

/// Result of the tail-cycle generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimpleRun {
    /// Retained buffer: at most `max_tail` values, trimmed to one copy of the
    /// cycle when trimming is on.
    pub sequence: Vec<i64>,
    /// Transitions performed, independent of buffer truncation.
    pub steps: u64,
    pub stopped_because: StopReason,
    /// Position is relative to `sequence`, not the logical trajectory.
    pub cycle: Option<TailCycle>,
    pub detected_cycle: Option<Vec<i64>>,
}
