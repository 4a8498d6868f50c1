// crates/collatz-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "collatz-cli")]
#[command(about = "Generalized Collatz sequence engine CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Trace one start value with state-cycle detection (sequence / adic output)
    Run(cmd::run::RunArgs),

    /// Trace one start value with the bounded-buffer tail-cycle detector
    Simple(cmd::simple::SimpleArgs),

    /// Trace a range of start values and print one CSV row per start
    Scan(cmd::scan::ScanArgs),

    /// Run profile tools (.czp)
    Profile(cmd::profile::ProfileArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Run(args) => cmd::run::run(args),
        Commands::Simple(args) => cmd::simple::run(args),
        Commands::Scan(args) => cmd::scan::run(args),
        Commands::Profile(args) => cmd::profile::run(args),
    }
}
