// crates/collatz-core/src/profile/defaults.rs

use crate::profile::profile::{CollatzParams, RunConfig, RunProfile, SimpleConfig};

/// Current `.czp` layout version.
pub const PROFILE_VERSION: u16 = 1;

pub fn default_params() -> CollatzParams {
    CollatzParams::default()
}

pub fn default_run_config() -> RunConfig {
    RunConfig::default()
}

pub fn default_simple_config() -> SimpleConfig {
    SimpleConfig::default()
}

/// Classic 3n+1 with full-step tracing, residues at 8/12/16 bits and
/// state-cycle stopping.
pub fn default_profile() -> RunProfile {
    RunProfile::default()
}
