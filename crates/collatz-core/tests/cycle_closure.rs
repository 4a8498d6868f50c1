// crates/collatz-core/tests/cycle_closure.rs

use collatz_core::dynamics::step::{step_full, step_odd_only};
use collatz_core::{generate, CollatzParams, RunConfig, TraceMode};

fn closes(cycle: &[i64], length: usize, p: &CollatzParams, mode: TraceMode) -> bool {
    let first = cycle[0];
    let mut v = *cycle.last().unwrap();
    assert_eq!(first, v, "detected cycle must start and end on the repeated state");
    // Walking `length` steps from the repeated value returns to it.
    for _ in 0..length {
        v = match mode {
            TraceMode::Full => step_full(v, p.divisor, p.multiplier, p.increment).unwrap(),
            TraceMode::OddOnly => step_odd_only(v, p.multiplier, p.increment).value().unwrap(),
        };
    }
    v == first
}

#[test]
fn detected_cycles_are_suffixes_that_close() {
    let maps = [
        CollatzParams { divisor: 2, multiplier: 3, increment: 1 },
        CollatzParams { divisor: 2, multiplier: 3, increment: -1 },
        CollatzParams { divisor: 2, multiplier: 5, increment: 1 },
        CollatzParams { divisor: 3, multiplier: 2, increment: 1 },
    ];

    for p in maps {
        for mode in [TraceMode::Full, TraceMode::OddOnly] {
            let cfg = RunConfig {
                mode,
                max_steps: 5_000,
                ..RunConfig::default()
            };
            for start in 1i64..=60 {
                let r = generate(start, &p, &cfg).unwrap();
                let (Some(c), Some(cycle)) = (r.cycle.as_ref(), r.detected_cycle.as_ref()) else {
                    continue;
                };
                assert_eq!(&r.sequence[c.start_index..], cycle.as_slice());
                assert_eq!(cycle.len(), c.length + 1);
                assert_eq!(c.state_key.value(), cycle[0]);
                // odd-only ignores the divisor, so only close with d=2 there
                if mode == TraceMode::Full || p.divisor == 2 {
                    assert!(closes(cycle, c.length, &p, mode), "p={p:?} start={start} mode={mode:?}");
                }
            }
        }
    }
}

#[test]
fn residue_fingerprint_agrees_with_value_only_key() {
    // Same value implies same residues, so dropping the residue widths must
    // not change where the cycle is reported.
    let p = CollatzParams::default();
    let with = RunConfig::default();
    let without = RunConfig {
        residue_bits: Vec::new(),
        ..RunConfig::default()
    };
    for start in 1i64..=200 {
        let a = generate(start, &p, &with).unwrap();
        let b = generate(start, &p, &without).unwrap();
        assert_eq!(a.sequence, b.sequence);
        assert_eq!(
            a.cycle.as_ref().map(|c| (c.start_index, c.length)),
            b.cycle.as_ref().map(|c| (c.start_index, c.length))
        );
    }
}
