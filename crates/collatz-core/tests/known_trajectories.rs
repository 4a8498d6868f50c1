// crates/collatz-core/tests/known_trajectories.rs

use collatz_core::{generate, CollatzParams, RunConfig, StopReason, TraceMode};

fn classic() -> CollatzParams {
    CollatzParams::default()
}

#[test]
fn start_one_reports_trivial_cycle() {
    let r = generate(1, &classic(), &RunConfig::default()).unwrap();
    assert_eq!(r.stopped_because, StopReason::CycleDetected);
    assert_eq!(r.detected_cycle, Some(vec![1, 4, 2, 1]));
    assert_eq!(r.stopped_because.label(), "cycleDetected");
}

#[test]
fn twenty_seven_full_mode() {
    let cfg = RunConfig {
        mode: TraceMode::Full,
        max_steps: 200_000,
        ..RunConfig::default()
    };
    let r = generate(27, &classic(), &cfg).unwrap();

    // 111 steps to reach 1; the state of 4 (index 109) repeats one step later.
    assert_eq!(r.sequence[111], 1);
    assert_eq!(r.steps, 112);
    assert_eq!(r.sequence.len(), 113);
    assert_eq!(r.stopped_because, StopReason::CycleDetected);
    assert_eq!(*r.sequence.iter().max().unwrap(), 9232);

    let c = r.cycle.unwrap();
    assert_eq!(c.start_index, 109);
    assert_eq!(c.length, 3);
    assert_eq!(r.detected_cycle, Some(vec![4, 2, 1, 4]));
    assert_eq!(c.state_key.to_string(), "n:4|r:4|4|4");
}

#[test]
fn six_odd_only_normalizes_start() {
    let cfg = RunConfig {
        mode: TraceMode::OddOnly,
        track_adic: true,
        ..RunConfig::default()
    };
    let r = generate(6, &classic(), &cfg).unwrap();
    assert_eq!(r.sequence, vec![3, 5, 1, 1]);
    assert_eq!(r.steps, 3);

    let adic = r.adic.unwrap();
    assert_eq!(adic.k_profile, vec![1, 4, 2]);
    assert_eq!(adic.k_profile.len() as u64, r.steps);
    // Residues start from the normalized value, not the raw input.
    assert_eq!(adic.bucket(8).unwrap()[0], 3);

    let c = adic.cycle_by_state.unwrap();
    assert_eq!((c.start_index, c.length), (2, 1));
}

#[test]
fn odd_only_seed_uses_normalized_value() {
    // 8 -> 1 after normalization; 1 -> 4 -> 1 must hit the seed at index 0.
    let cfg = RunConfig {
        mode: TraceMode::OddOnly,
        ..RunConfig::default()
    };
    let r = generate(8, &classic(), &cfg).unwrap();
    assert_eq!(r.sequence, vec![1, 1]);
    assert_eq!(r.cycle.unwrap().start_index, 0);
    assert_eq!(r.adic.unwrap().residues[0].values, vec![1, 1]);
}

#[test]
fn three_n_minus_one_cycles() {
    let p = CollatzParams {
        divisor: 2,
        multiplier: 3,
        increment: -1,
    };

    let r = generate(5, &p, &RunConfig::default()).unwrap();
    assert_eq!(r.detected_cycle, Some(vec![5, 14, 7, 20, 10, 5]));

    let r = generate(17, &p, &RunConfig::default()).unwrap();
    let c = r.cycle.unwrap();
    assert_eq!((c.start_index, c.length), (0, 18));
}

#[test]
fn divisor_three_map() {
    let p = CollatzParams {
        divisor: 3,
        multiplier: 2,
        increment: 1,
    };
    let r = generate(27, &p, &RunConfig::default()).unwrap();
    assert_eq!(r.steps, 4);
    assert_eq!(r.detected_cycle, Some(vec![3, 1, 3]));
}

#[test]
fn five_n_plus_one_overflow_stops_cleanly() {
    let p = CollatzParams {
        divisor: 2,
        multiplier: 5,
        increment: 1,
    };
    let r = generate(7, &p, &RunConfig::default()).unwrap();
    assert_eq!(r.stopped_because, StopReason::NonFiniteOrNegative);
    assert_eq!(r.steps, 732);
    assert_eq!(r.sequence.len(), 733);
    assert_eq!(*r.sequence.last().unwrap(), 3_326_758_719_153_445_233);
    assert!(r.detected_cycle.is_none());

    let adic = r.adic.unwrap();
    assert_eq!(adic.v_profile.len(), 732);
    assert_eq!(adic.residues[2].values.len(), 733);
}

#[test]
fn five_n_plus_one_odd_only_overflow_appends_sentinel_k() {
    let p = CollatzParams {
        divisor: 2,
        multiplier: 5,
        increment: 1,
    };
    let cfg = RunConfig {
        mode: TraceMode::OddOnly,
        ..RunConfig::default()
    };
    let r = generate(7, &p, &cfg).unwrap();
    assert_eq!(r.stopped_because, StopReason::NonFiniteOrNegative);
    assert_eq!(r.steps, 238);
    let adic = r.adic.unwrap();
    assert_eq!(adic.k_profile.len(), 239);
    assert_eq!(*adic.k_profile.last().unwrap(), 0);
}

#[test]
fn max_steps_budget() {
    let cfg = RunConfig {
        max_steps: 10,
        ..RunConfig::default()
    };
    let r = generate(27, &classic(), &cfg).unwrap();
    assert_eq!(r.stopped_because, StopReason::MaxStepsReached);
    assert_eq!(r.steps, 10);
    assert_eq!(r.sequence.len(), 11);
    assert!(r.cycle.is_none());
}

#[test]
fn no_state_cycle_runs_to_budget() {
    let cfg = RunConfig {
        max_steps: 20,
        stop_on_state_cycle: false,
        ..RunConfig::default()
    };
    let r = generate(1, &classic(), &cfg).unwrap();
    assert_eq!(r.stopped_because, StopReason::MaxStepsReached);
    assert_eq!(r.sequence.len(), 21);
    assert_eq!(&r.sequence[18..], &[1, 4, 2]);
}

#[test]
fn non_positive_start_is_a_result_not_an_error() {
    for start in [0i64, -5] {
        let r = generate(start, &classic(), &RunConfig::default()).unwrap();
        assert_eq!(r.sequence, vec![start]);
        assert_eq!(r.steps, 0);
        assert_eq!(r.stopped_because, StopReason::NonFiniteOrNegative);
    }
}

#[test]
fn bad_params_are_errors_in_both_generators() {
    let p = CollatzParams {
        divisor: 1,
        ..CollatzParams::default()
    };
    assert!(generate(7, &p, &RunConfig::default()).is_err());
    assert!(collatz_core::generate_simple(7, &p, &Default::default()).is_err());
}

#[test]
fn track_adic_off_omits_profile() {
    let cfg = RunConfig {
        track_adic: false,
        ..RunConfig::default()
    };
    let r = generate(27, &classic(), &cfg).unwrap();
    assert!(r.adic.is_none());
    assert_eq!(r.steps, 112);
}
