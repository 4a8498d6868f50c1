// crates/collatz-cli/src/cmd/run.rs

use std::io::Write;

use clap::{Args, ValueEnum};
use collatz_core::profile::checksum::trajectory_digest_hex;
use collatz_core::{generate, AdicRun};

use crate::cmd::args::TraceArgs;
use crate::io::jsonl;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Emit {
    /// {"i":N,"n":V} per sequence value
    Sequence,
    /// {"i":N,"k":K} per odd-only step
    Kprofile,
    /// {"i":N,"v2":A,"v3":B} per step
    Vprofile,
    /// {"i":N,"r8":..} per sequence value
    Residues,
    /// Summary only (stderr)
    None,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Start value (values <= 0 stop immediately)
    #[arg(long, allow_negative_numbers = true)]
    pub start: i64,

    #[command(flatten)]
    pub trace: TraceArgs,

    /// What to write to stdout
    #[arg(long, value_enum, default_value_t = Emit::Sequence)]
    pub emit: Emit,
}

pub fn run(args: RunArgs) -> anyhow::Result<()> {
    let profile = args.trace.resolve()?;
    let r = generate(args.start, &profile.params, &profile.config)?;

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    match args.emit {
        Emit::Sequence => jsonl::write_sequence(&mut out, &r.sequence)?,
        Emit::Kprofile | Emit::Vprofile | Emit::Residues => {
            let Some(adic) = r.adic.as_ref() else {
                anyhow::bail!("--emit {:?} needs adic tracking (drop --no-adic)", args.emit);
            };
            match args.emit {
                Emit::Kprofile => jsonl::write_k_profile(&mut out, &adic.k_profile)?,
                Emit::Vprofile => jsonl::write_v_profile(&mut out, &adic.v_profile)?,
                _ => jsonl::write_residues(&mut out, &adic.residues)?,
            }
        }
        Emit::None => {}
    }
    out.flush()?;

    print_summary(args.start, profile.config.mode.label(), &r);
    Ok(())
}

pub fn print_summary(start: i64, mode: &str, r: &AdicRun) {
    eprintln!("start           = {}", start);
    eprintln!("mode            = {}", mode);
    eprintln!("stopped_because = {}", r.stopped_because);
    eprintln!("steps           = {}", r.steps);
    eprintln!("len             = {}", r.sequence.len());
    if let Some(max) = r.sequence.iter().max() {
        eprintln!("max_value       = {}", max);
    }
    if let Some(c) = &r.cycle {
        eprintln!("cycle_start     = {}", c.start_index);
        eprintln!("cycle_len       = {}", c.length);
        eprintln!("state_key       = {}", c.state_key);
    }
    eprintln!("digest          = {}", trajectory_digest_hex(&r.sequence));
}
