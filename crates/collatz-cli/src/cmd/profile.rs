// crates/collatz-cli/src/cmd/profile.rs

use clap::{Args, Subcommand};
use collatz_core::profile::format as profile_format;
use collatz_core::{RunProfile, TraceMode};

use crate::cmd::args::TraceArgs;
use crate::io::profile_file;

#[derive(Args)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub cmd: ProfileCmd,
}

#[derive(Subcommand)]
pub enum ProfileCmd {
    /// Write a .czp from flags (on top of --profile or the built-in default)
    Save(SaveArgs),

    /// Print all profile fields and the profile id
    Inspect(InspectArgs),
}

#[derive(Args)]
pub struct SaveArgs {
    /// Output path (.czp)
    #[arg(long)]
    pub out: String,

    #[command(flatten)]
    pub trace: TraceArgs,
}

#[derive(Args)]
pub struct InspectArgs {
    /// Profile path (.czp)
    #[arg(long = "in")]
    pub r#in: String,
}

pub fn run(args: ProfileArgs) -> anyhow::Result<()> {
    match args.cmd {
        ProfileCmd::Save(a) => cmd_save(a),
        ProfileCmd::Inspect(a) => cmd_inspect(a),
    }
}

fn cmd_save(a: SaveArgs) -> anyhow::Result<()> {
    let p = a.trace.resolve()?;
    profile_file::save_czp(&a.out, &p)?;
    eprintln!("saved profile: {} (profile_id={})", a.out, profile_format::profile_id_hex(&p));
    Ok(())
}

fn cmd_inspect(a: InspectArgs) -> anyhow::Result<()> {
    let p: RunProfile = profile_file::load_czp(&a.r#in)?;

    println!("profile_path        = {}", a.r#in);
    println!("profile_id          = {}", profile_format::profile_id_hex(&p));
    println!("version             = {}", p.version);
    println!("divisor             = {}", p.params.divisor);
    println!("multiplier          = {}", p.params.multiplier);
    println!("increment           = {}", p.params.increment);
    println!("max_steps           = {}", p.config.max_steps);
    println!("mode                = {}", p.config.mode.label());
    println!("track_adic          = {}", p.config.track_adic);
    println!("residue_bits        = {:?}", p.config.residue_bits);
    println!("stop_on_state_cycle = {}", p.config.stop_on_state_cycle);

    if p.config.residue_bits.is_empty() && p.config.mode == TraceMode::Full {
        eprintln!("warn: no residue widths; full-mode state keys are value-only");
    }
    if !p.config.stop_on_state_cycle {
        eprintln!("warn: state-cycle stop disabled; runs always use the full step budget");
    }
    Ok(())
}
