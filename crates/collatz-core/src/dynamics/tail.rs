// crates/collatz-core/src/dynamics/tail.rs
//
// Bounded-buffer generator with tail-periodicity cycle detection.
//
// After every append the buffer is checked for the smallest k with
//   seq[n-k..n] == seq[n-2k..n-k]
// and the last k values are taken as the cycle. This is a heuristic on raw
// slices (a short accidental repeat counts), but on a trajectory of a
// deterministic map any such repeat is a real cycle.

use std::collections::VecDeque;

use crate::dynamics::run::{SimpleRun, StopReason};
use crate::dynamics::step::step_full;
use crate::error::Result;
use crate::profile::profile::{CollatzParams, SimpleConfig};
use crate::validate::{validate_params, validate_simple_config};

/// A periodic tail: `seq[start_index..]` is one period of `length` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TailCycle {
    pub start_index: usize,
    pub length: usize,
}

/// Smallest k in 1..=n/2 whose last k values repeat the k before them.
pub fn find_tail_cycle(seq: &[i64]) -> Option<TailCycle> {
    let n = seq.len();
    (1..=n / 2)
        .find(|&k| seq[n - k..] == seq[n - 2 * k..n - k])
        .map(|k| TailCycle {
            start_index: n - k,
            length: k,
        })
}

/// Drop trailing repeats of the last `k` values until exactly one copy is
/// left after the non-repeating prefix.
pub fn trim_tail(seq: &mut Vec<i64>, k: usize) {
    if k == 0 {
        return;
    }
    while seq.len() >= 2 * k {
        let n = seq.len();
        if seq[n - k..] != seq[n - 2 * k..n - k] {
            break;
        }
        seq.truncate(n - k);
    }
}

/// Full-step generator keeping only the last `max_tail` values.
///
/// Bad parameters or config are errors; a start value <= 0 is a normal
/// result with `NonFiniteOrNegative`.
pub fn generate_simple(start: i64, params: &CollatzParams, config: &SimpleConfig) -> Result<SimpleRun> {
    validate_params(params)?;
    validate_simple_config(config)?;

    if start <= 0 {
        return Ok(SimpleRun {
            sequence: vec![start],
            steps: 0,
            stopped_because: StopReason::NonFiniteOrNegative,
            cycle: None,
            detected_cycle: None,
        });
    }

    let mut buf: VecDeque<i64> = VecDeque::with_capacity(config.max_tail.min(4096) + 1);
    buf.push_back(start);
    let mut current = start;

    for steps in 0..config.max_steps {
        let next = match step_full(current, params.divisor, params.multiplier, params.increment) {
            Some(n) if n > 0 => n,
            _ => {
                return Ok(SimpleRun {
                    sequence: buf.into(),
                    steps,
                    stopped_because: StopReason::NonFiniteOrNegative,
                    cycle: None,
                    detected_cycle: None,
                })
            }
        };

        buf.push_back(next);
        if buf.len() > config.max_tail {
            buf.pop_front();
        }
        current = next;

        let found = find_tail_cycle(buf.make_contiguous());
        if let Some(tc) = found {
            let mut sequence: Vec<i64> = buf.into();
            if config.auto_trim_tail {
                trim_tail(&mut sequence, tc.length);
            }
            let start_index = sequence.len() - tc.length;
            let detected_cycle = sequence[start_index..].to_vec();
            return Ok(SimpleRun {
                sequence,
                steps: steps + 1,
                stopped_because: StopReason::CycleDetected,
                cycle: Some(TailCycle {
                    start_index,
                    length: tc.length,
                }),
                detected_cycle: Some(detected_cycle),
            });
        }
    }

    Ok(SimpleRun {
        sequence: buf.into(),
        steps: config.max_steps,
        stopped_because: StopReason::MaxStepsReached,
        cycle: None,
        detected_cycle: None,
    })
}
