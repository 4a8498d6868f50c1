// crates/collatz-core/src/profile/profile.rs

use crate::error::{CollatzError, Result};
use crate::profile::defaults::PROFILE_VERSION;

/// Map parameters: n -> n/d when d | n, else q*n + t.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollatzParams {
    /// d (must be >= 2)
    pub divisor: i64,
    /// q
    pub multiplier: i64,
    /// t
    pub increment: i64,
}

impl Default for CollatzParams {
    fn default() -> Self {
        Self {
            divisor: 2,
            multiplier: 3,
            increment: 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TraceMode {
    /// One map application per step.
    #[default]
    Full,
    /// q*n + t followed by stripping every factor of 2.
    OddOnly,
}

impl TraceMode {
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(TraceMode::Full),
            "oddonly" | "odd-only" | "odd_only" | "odd" => Ok(TraceMode::OddOnly),
            _ => Err(CollatzError::Validation(format!("unknown trace mode: {s}"))),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TraceMode::Full => "full",
            TraceMode::OddOnly => "oddOnly",
        }
    }
}

/// Knobs for the state-cycle generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    pub max_steps: u64,
    pub mode: TraceMode,
    /// Collect k-profile / v-profile / residue buckets.
    pub track_adic: bool,
    /// Bucket widths b for `n mod 2^b`, in reporting order.
    pub residue_bits: Vec<u8>,
    pub stop_on_state_cycle: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_steps: 200_000,
            mode: TraceMode::Full,
            track_adic: true,
            residue_bits: vec![8, 12, 16],
            stop_on_state_cycle: true,
        }
    }
}

/// Knobs for the bounded-buffer tail-cycle generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimpleConfig {
    pub max_steps: u64,
    /// Buffer cap; older values are dropped from the front.
    pub max_tail: usize,
    pub auto_trim_tail: bool,
}

impl Default for SimpleConfig {
    fn default() -> Self {
        Self {
            max_steps: 50_000,
            max_tail: 2_000,
            auto_trim_tail: true,
        }
    }
}

/// Everything needed to reproduce a state-cycle run apart from the start value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunProfile {
    pub version: u16,
    pub params: CollatzParams,
    pub config: RunConfig,
}

impl Default for RunProfile {
    fn default() -> Self {
        Self {
            version: PROFILE_VERSION,
            params: CollatzParams::default(),
            config: RunConfig::default(),
        }
    }
}
