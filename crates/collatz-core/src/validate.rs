use crate::error::{CollatzError, Result};
use crate::profile::profile::{CollatzParams, RunConfig, RunProfile, SimpleConfig};

/// Widest residue bucket we can reduce into without overflowing `i64::rem_euclid`.
pub const MAX_RESIDUE_BITS: u8 = 63;

pub fn validate_params(p: &CollatzParams) -> Result<()> {
    // n/d branch never fires for d=1 and d<=0 is not a divisor at all.
    if p.divisor < 2 {
        return Err(CollatzError::Validation(format!(
            "divisor must be >= 2 (got {})",
            p.divisor
        )));
    }
    Ok(())
}

pub fn validate_run_config(c: &RunConfig) -> Result<()> {
    for &b in &c.residue_bits {
        if b == 0 || b > MAX_RESIDUE_BITS {
            return Err(CollatzError::Validation(format!(
                "residue width must be in 1..={MAX_RESIDUE_BITS} (got {b})"
            )));
        }
    }
    Ok(())
}

pub fn validate_simple_config(c: &SimpleConfig) -> Result<()> {
    // Periodicity needs at least two copies of a 1-cycle in the buffer.
    if c.max_tail < 2 {
        return Err(CollatzError::Validation(format!(
            "max_tail must be >= 2 (got {})",
            c.max_tail
        )));
    }
    Ok(())
}

pub fn validate_profile(p: &RunProfile) -> Result<()> {
    validate_params(&p.params)?;
    validate_run_config(&p.config)?;
    if p.config.residue_bits.len() > u8::MAX as usize {
        return Err(CollatzError::Validation(
            "too many residue widths (max 255)".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divisor_one_is_rejected() {
        let p = CollatzParams {
            divisor: 1,
            ..CollatzParams::default()
        };
        assert!(validate_params(&p).is_err());
    }

    #[test]
    fn residue_width_bounds() {
        let mut c = RunConfig::default();
        c.residue_bits = vec![0];
        assert!(validate_run_config(&c).is_err());
        c.residue_bits = vec![64];
        assert!(validate_run_config(&c).is_err());
        c.residue_bits = vec![1, 63];
        assert!(validate_run_config(&c).is_ok());
        c.residue_bits.clear();
        assert!(validate_run_config(&c).is_ok());
    }
}
