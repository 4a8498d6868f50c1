// crates/collatz-cli/src/io/jsonl.rs

use std::io::Write;

use anyhow::Context;
use collatz_core::adic::{residue::ResidueBucket, VPair};

/// Format: {"i":N,"n":V}
pub fn write_sequence<W: Write>(w: &mut W, seq: &[i64]) -> anyhow::Result<()> {
    for (i, n) in seq.iter().enumerate() {
        writeln!(w, "{{\"i\":{i},\"n\":{n}}}").context("write sequence jsonl")?;
    }
    Ok(())
}

/// Format: {"i":N,"k":K}
pub fn write_k_profile<W: Write>(w: &mut W, ks: &[u32]) -> anyhow::Result<()> {
    for (i, k) in ks.iter().enumerate() {
        writeln!(w, "{{\"i\":{i},\"k\":{k}}}").context("write k-profile jsonl")?;
    }
    Ok(())
}

/// Format: {"i":N,"v2":A,"v3":B}
pub fn write_v_profile<W: Write>(w: &mut W, vs: &[VPair]) -> anyhow::Result<()> {
    for (i, v) in vs.iter().enumerate() {
        writeln!(w, "{{\"i\":{i},\"v2\":{},\"v3\":{}}}", v.v2, v.v3)
            .context("write v-profile jsonl")?;
    }
    Ok(())
}

/// Format: {"i":N,"r8":A,"r12":B,...} in bucket order.
pub fn write_residues<W: Write>(w: &mut W, buckets: &[ResidueBucket]) -> anyhow::Result<()> {
    let rows = buckets.iter().map(|b| b.values.len()).min().unwrap_or(0);
    for i in 0..rows {
        let mut line = format!("{{\"i\":{i}");
        for b in buckets {
            line.push_str(&format!(",\"r{}\":{}", b.bits, b.values[i]));
        }
        line.push('}');
        writeln!(w, "{line}").context("write residues jsonl")?;
    }
    Ok(())
}
