// crates/collatz-cli/src/cmd/args.rs
//
// Flags shared by run / scan / profile save. Every knob is optional so a
// loaded .czp profile can supply the base values; explicit flags win.

use clap::Args;
use collatz_core::{RunProfile, TraceMode};

use crate::io::profile_file;

#[derive(Args, Debug, Clone, Default)]
pub struct MapArgs {
    /// Divisor d (>= 2) [default: 2]
    #[arg(long, allow_negative_numbers = true)]
    pub divisor: Option<i64>,

    /// Multiplier q [default: 3]
    #[arg(long, allow_negative_numbers = true)]
    pub multiplier: Option<i64>,

    /// Increment t [default: 1]
    #[arg(long, allow_negative_numbers = true)]
    pub increment: Option<i64>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct TraceArgs {
    /// Base run profile (.czp). Flags below override its fields.
    #[arg(long)]
    pub profile: Option<String>,

    #[command(flatten)]
    pub map: MapArgs,

    /// Step budget [default: 200000]
    #[arg(long)]
    pub max_steps: Option<u64>,

    /// Trace mode: full | odd-only [default: full]
    #[arg(long)]
    pub mode: Option<String>,

    /// Residue widths b for n mod 2^b, comma-separated [default: 8,12,16]
    #[arg(long)]
    pub residue_bits: Option<String>,

    /// Do not collect k-profile / v-profile / residues
    #[arg(long)]
    pub no_adic: bool,

    /// Keep stepping after a state repeats (runs to the budget)
    #[arg(long)]
    pub no_state_cycle: bool,
}

impl TraceArgs {
    /// Effective profile: loaded (or built-in default) profile plus overrides.
    pub fn resolve(&self) -> anyhow::Result<RunProfile> {
        let mut p = match &self.profile {
            Some(path) => profile_file::load_czp(path)?,
            None => RunProfile::default(),
        };

        if let Some(d) = self.map.divisor {
            p.params.divisor = d;
        }
        if let Some(q) = self.map.multiplier {
            p.params.multiplier = q;
        }
        if let Some(t) = self.map.increment {
            p.params.increment = t;
        }
        if let Some(n) = self.max_steps {
            p.config.max_steps = n;
        }
        if let Some(m) = &self.mode {
            p.config.mode = TraceMode::parse(m)?;
        }
        if let Some(bits) = &self.residue_bits {
            p.config.residue_bits = parse_bits(bits)?;
        }
        if self.no_adic {
            p.config.track_adic = false;
        }
        if self.no_state_cycle {
            p.config.stop_on_state_cycle = false;
        }

        collatz_core::validate::validate_profile(&p)?;
        Ok(p)
    }
}

/// "8,12,16" -> [8, 12, 16]. Empty string -> no widths.
pub fn parse_bits(s: &str) -> anyhow::Result<Vec<u8>> {
    let t = s.trim();
    if t.is_empty() {
        return Ok(Vec::new());
    }
    t.split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<u8>()
                .map_err(|e| anyhow::anyhow!("bad residue width {part:?}: {e}"))
        })
        .collect()
}
