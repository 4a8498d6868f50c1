// crates/collatz-cli/src/io/profile_file.rs

use anyhow::{Context, Result};
use collatz_core::profile::format as profile_format;
use collatz_core::RunProfile;

/// Load a .czp file and decode it into a RunProfile.
pub fn load_czp(path: &str) -> Result<RunProfile> {
    let bytes = std::fs::read(path).with_context(|| format!("read profile {path}"))?;
    let profile = profile_format::decode(&bytes).with_context(|| format!("decode profile {path}"))?;
    Ok(profile)
}

/// Save a RunProfile as a .czp file.
pub fn save_czp(path: &str, profile: &RunProfile) -> Result<()> {
    let bytes = profile_format::encode(profile);
    std::fs::write(path, bytes).with_context(|| format!("write profile {path}"))?;
    Ok(())
}
