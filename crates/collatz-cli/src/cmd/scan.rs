// crates/collatz-cli/src/cmd/scan.rs

use std::collections::HashMap;
use std::io::Write;

use clap::Args;
use collatz_core::profile::checksum::trajectory_digest_hex;
use collatz_core::{generate, StopReason};

use crate::cmd::args::TraceArgs;

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// First start value (inclusive)
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub from: i64,

    /// Last start value (inclusive)
    #[arg(long, allow_negative_numbers = true)]
    pub to: i64,

    /// Stride between start values
    #[arg(long, default_value_t = 1)]
    pub step: i64,

    #[command(flatten)]
    pub trace: TraceArgs,
}

pub fn run(a: ScanArgs) -> anyhow::Result<()> {
    if a.step <= 0 {
        anyhow::bail!("--step must be > 0");
    }
    if a.from > a.to {
        anyhow::bail!("--from must be <= --to");
    }

    let profile = a.trace.resolve()?;

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    writeln!(out, "start,steps,stopped_because,cycle_start,cycle_len,max_value,digest")?;

    let mut by_reason: HashMap<StopReason, usize> = HashMap::new();
    // distinct cycles keyed by their smallest member
    let mut cycles: HashMap<i64, usize> = HashMap::new();
    let mut longest = (0i64, 0u64);
    let mut scanned = 0usize;

    let mut start = a.from;
    loop {
        let r = generate(start, &profile.params, &profile.config)?;

        let (cs, cl) = match &r.cycle {
            Some(c) => (c.start_index.to_string(), c.length.to_string()),
            None => (String::new(), String::new()),
        };
        let max_value = r.sequence.iter().max().copied().unwrap_or(start);
        writeln!(
            out,
            "{},{},{},{},{},{},{}",
            start,
            r.steps,
            r.stopped_because,
            cs,
            cl,
            max_value,
            trajectory_digest_hex(&r.sequence)
        )?;

        *by_reason.entry(r.stopped_because).or_insert(0) += 1;
        if let Some(cycle) = &r.detected_cycle {
            if let Some(&min) = cycle.iter().min() {
                *cycles.entry(min).or_insert(0) += 1;
            }
        }
        if r.steps > longest.1 {
            longest = (start, r.steps);
        }
        scanned += 1;

        match start.checked_add(a.step) {
            Some(next) if next <= a.to => start = next,
            _ => break,
        }
    }
    out.flush()?;

    let mut mins: Vec<_> = cycles.into_iter().collect();
    mins.sort_unstable();

    eprintln!("starts_scanned  = {}", scanned);
    for reason in [
        StopReason::CycleDetected,
        StopReason::MaxStepsReached,
        StopReason::NonFiniteOrNegative,
    ] {
        eprintln!(
            "{:<15} = {}",
            reason.label(),
            by_reason.get(&reason).copied().unwrap_or(0)
        );
    }
    eprintln!("distinct_cycles = {}", mins.len());
    for (min, count) in mins {
        eprintln!("  cycle_min={} starts={}", min, count);
    }
    eprintln!("longest         = start {} ({} steps)", longest.0, longest.1);
    Ok(())
}
