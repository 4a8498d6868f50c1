// crates/collatz-cli/src/cmd/simple.rs

use std::io::Write;

use clap::Args;
use collatz_core::profile::checksum::trajectory_digest_hex;
use collatz_core::{generate_simple, CollatzParams, SimpleConfig};

use crate::cmd::args::MapArgs;
use crate::io::jsonl;

#[derive(Args, Debug)]
pub struct SimpleArgs {
    /// Start value (values <= 0 stop immediately)
    #[arg(long, allow_negative_numbers = true)]
    pub start: i64,

    #[command(flatten)]
    pub map: MapArgs,

    /// Step budget
    #[arg(long, default_value_t = 50_000)]
    pub max_steps: u64,

    /// Keep only the last N values in memory
    #[arg(long, default_value_t = 2_000)]
    pub max_tail: usize,

    /// Leave repeated copies of the cycle at the tail
    #[arg(long)]
    pub no_trim: bool,
}

pub fn run(a: SimpleArgs) -> anyhow::Result<()> {
    let d = CollatzParams::default();
    let params = CollatzParams {
        divisor: a.map.divisor.unwrap_or(d.divisor),
        multiplier: a.map.multiplier.unwrap_or(d.multiplier),
        increment: a.map.increment.unwrap_or(d.increment),
    };
    let cfg = SimpleConfig {
        max_steps: a.max_steps,
        max_tail: a.max_tail,
        auto_trim_tail: !a.no_trim,
    };

    let r = generate_simple(a.start, &params, &cfg)?;

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    jsonl::write_sequence(&mut out, &r.sequence)?;
    out.flush()?;

    eprintln!("start           = {}", a.start);
    eprintln!("stopped_because = {}", r.stopped_because.legacy_label());
    eprintln!("steps           = {}", r.steps);
    eprintln!("retained        = {}", r.sequence.len());
    if let (Some(c), Some(cycle)) = (&r.cycle, &r.detected_cycle) {
        eprintln!("cycle_start     = {}", c.start_index);
        eprintln!("cycle_len       = {}", c.length);
        eprintln!("cycle           = {:?}", cycle);
    }
    eprintln!("digest          = {}", trajectory_digest_hex(&r.sequence));
    Ok(())
}
