// crates/collatz-core/src/dynamics/state.rs

use std::collections::HashMap;
use std::fmt;

use crate::adic::residue::residue_vector;
use crate::profile::profile::TraceMode;

/// What has to repeat for the remaining trajectory to repeat.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum StateKey {
    /// Full mode: the value plus its residues at every tracked width.
    Full { value: i64, residues: Box<[u64]> },
    /// Odd-only mode: the (already odd) value alone.
    Odd(i64),
}

impl StateKey {
    pub fn for_value(mode: TraceMode, value: i64, residue_bits: &[u8]) -> Self {
        match mode {
            TraceMode::Full => StateKey::Full {
                value,
                residues: residue_vector(value, residue_bits),
            },
            TraceMode::OddOnly => StateKey::Odd(value),
        }
    }

    pub fn value(&self) -> i64 {
        match *self {
            StateKey::Full { value, .. } | StateKey::Odd(value) => value,
        }
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateKey::Full { value, residues } => {
                write!(f, "n:{value}|r:")?;
                for (i, r) in residues.iter().enumerate() {
                    if i > 0 {
                        f.write_str("|")?;
                    }
                    write!(f, "{r}")?;
                }
                Ok(())
            }
            StateKey::Odd(value) => write!(f, "odd:{value}"),
        }
    }
}

/// First repeated state: `sequence[start_index..]` closes on itself after
/// `length` steps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CycleInfo {
    pub start_index: usize,
    pub length: usize,
    pub state_key: StateKey,
}

/// StateKey -> first sequence index it was seen at. Never shrinks.
#[derive(Debug, Default)]
pub struct VisitedMap {
    seen: HashMap<StateKey, usize>,
}

impl VisitedMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `key` at `index`, or report the cycle if it was already seen.
    /// Index 0 counts as seen like any other.
    pub fn visit(&mut self, key: StateKey, index: usize) -> Option<CycleInfo> {
        if let Some(&prev) = self.seen.get(&key) {
            return Some(CycleInfo {
                start_index: prev,
                length: index - prev,
                state_key: key,
            });
        }
        self.seen.insert(key, index);
        None
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeat_at_seed_index_is_a_cycle() {
        let mut m = VisitedMap::new();
        assert!(m.visit(StateKey::Odd(1), 0).is_none());
        assert!(m.visit(StateKey::Odd(5), 1).is_none());
        let c = m.visit(StateKey::Odd(1), 2).unwrap();
        assert_eq!(c.start_index, 0);
        assert_eq!(c.length, 2);
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn display_matches_fingerprint_layout() {
        let k = StateKey::for_value(TraceMode::Full, 300, &[8, 12]);
        assert_eq!(k.to_string(), "n:300|r:44|300");
        assert_eq!(StateKey::for_value(TraceMode::OddOnly, 7, &[8]).to_string(), "odd:7");
    }
}
