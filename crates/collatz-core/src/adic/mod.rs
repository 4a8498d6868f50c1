// crates/collatz-core/src/adic/mod.rs

pub mod residue;
pub mod valuation;

use crate::adic::residue::ResidueBucket;
use crate::dynamics::state::CycleInfo;
use crate::profile::profile::TraceMode;

/// Exponent pair of one transition's pre-division value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct VPair {
    pub v2: u32,
    pub v3: u32,
}

impl VPair {
    pub fn of(x: u64) -> Self {
        Self {
            v2: valuation::v2(x),
            v3: valuation::v3(x),
        }
    }
}

/// 2-adic diagnostics gathered while a run progresses. On early termination
/// it holds whatever was accumulated up to the stop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdicProfile {
    pub mode: TraceMode,
    /// One entry per odd-only step: the power of 2 divided out.
    /// Empty in full mode.
    pub k_profile: Vec<u32>,
    /// One entry per accepted step.
    pub v_profile: Vec<VPair>,
    /// One bucket per configured width, each with one residue per
    /// sequence value.
    pub residues: Vec<ResidueBucket>,
    pub cycle_by_state: Option<CycleInfo>,
}

impl AdicProfile {
    pub fn new(mode: TraceMode, residue_bits: &[u8]) -> Self {
        Self {
            mode,
            k_profile: Vec::new(),
            v_profile: Vec::new(),
            residues: residue_bits.iter().map(|&b| ResidueBucket::new(b)).collect(),
            cycle_by_state: None,
        }
    }

    pub fn push_residues(&mut self, value: i64) {
        for bucket in &mut self.residues {
            bucket.push(value);
        }
    }

    /// Residue sequence for width `bits`, if that width is tracked.
    pub fn bucket(&self, bits: u8) -> Option<&[u64]> {
        self.residues
            .iter()
            .find(|b| b.bits == bits)
            .map(|b| b.values.as_slice())
    }
}
