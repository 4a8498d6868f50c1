// crates/collatz-core/src/profile/format.rs

use crate::error::{CollatzError, Result};
use crate::profile::checksum::{blake3_16, crc32, hex16};
use crate::profile::defaults::PROFILE_VERSION;
use crate::profile::profile::{CollatzParams, RunConfig, RunProfile, TraceMode};
use crate::validate::validate_profile;

const MAGIC: &[u8; 4] = b"CZP1";

const FLAG_ODD_ONLY: u16 = 1 << 0;
const FLAG_TRACK_ADIC: u16 = 1 << 1;
const FLAG_STOP_ON_STATE: u16 = 1 << 2;
const FLAG_KNOWN: u16 = FLAG_ODD_ONLY | FLAG_TRACK_ADIC | FLAG_STOP_ON_STATE;

/// Binary run profile (owned).
/// Layout (little-endian):
/// MAGIC[4]
/// version:u16
/// flags:u16          (bit0 odd-only, bit1 track_adic, bit2 stop_on_state_cycle)
/// divisor:i64 multiplier:i64 increment:i64
/// max_steps:u64
/// residue_bits_len:u8
/// residue_bits:[u8; residue_bits_len]
/// crc32:u32          (over everything before crc32)
/// blake3_16:[16]     (over everything before blake3)
///
/// `residue_bits` longer than 255 entries is truncated; `validate_profile`
/// rejects such profiles before they get here in practice.
pub fn encode(p: &RunProfile) -> Vec<u8> {
    let mut b = Vec::with_capacity(64);
    b.extend_from_slice(MAGIC);

    b.extend_from_slice(&p.version.to_le_bytes());
    b.extend_from_slice(&pack_flags(&p.config).to_le_bytes());

    b.extend_from_slice(&p.params.divisor.to_le_bytes());
    b.extend_from_slice(&p.params.multiplier.to_le_bytes());
    b.extend_from_slice(&p.params.increment.to_le_bytes());

    b.extend_from_slice(&p.config.max_steps.to_le_bytes());

    let bits_len: u8 = p.config.residue_bits.len().min(u8::MAX as usize) as u8;
    b.push(bits_len);
    b.extend_from_slice(&p.config.residue_bits[..bits_len as usize]);

    let c = crc32(&b);
    b.extend_from_slice(&c.to_le_bytes());

    let h = blake3_16(&b);
    b.extend_from_slice(&h);

    b
}

pub fn decode(bytes: &[u8]) -> Result<RunProfile> {
    let mut i = 0usize;
    if bytes.len() < 4 || &bytes[0..4] != MAGIC {
        return Err(CollatzError::ProfileFormat("bad magic".into()));
    }
    i += 4;

    let version = read_u16(bytes, &mut i)?;
    if version == 0 || version > PROFILE_VERSION {
        return Err(CollatzError::ProfileFormat(format!(
            "unsupported profile version {version}"
        )));
    }

    let flags = read_u16(bytes, &mut i)?;
    if flags & !FLAG_KNOWN != 0 {
        return Err(CollatzError::ProfileFormat(format!(
            "unknown flag bits 0x{:04x}",
            flags & !FLAG_KNOWN
        )));
    }

    let divisor = read_i64(bytes, &mut i)?;
    let multiplier = read_i64(bytes, &mut i)?;
    let increment = read_i64(bytes, &mut i)?;
    let max_steps = read_u64(bytes, &mut i)?;

    let bits_len = read_u8(bytes, &mut i)? as usize;
    need(bytes, i, bits_len)?;
    let residue_bits = bytes[i..i + bits_len].to_vec();
    i += bits_len;

    // Verify crc32
    let crc_expected = read_u32(bytes, &mut i)?;
    let crc_actual = crc32(&bytes[0..(i - 4)]);
    if crc_expected != crc_actual {
        return Err(CollatzError::ProfileFormat("crc32 mismatch".into()));
    }

    // Verify blake3_16
    if bytes.len() < i + 16 {
        return Err(CollatzError::ProfileFormat("missing blake3".into()));
    }
    let mut h_expected = [0u8; 16];
    h_expected.copy_from_slice(&bytes[i..i + 16]);
    let h_actual = blake3_16(&bytes[0..i]);
    if h_expected != h_actual {
        return Err(CollatzError::ProfileFormat("blake3 mismatch".into()));
    }
    i += 16;

    if i != bytes.len() {
        return Err(CollatzError::ProfileFormat(format!(
            "{} trailing bytes after profile",
            bytes.len() - i
        )));
    }

    let profile = RunProfile {
        version,
        params: CollatzParams {
            divisor,
            multiplier,
            increment,
        },
        config: RunConfig {
            max_steps,
            mode: if flags & FLAG_ODD_ONLY != 0 {
                TraceMode::OddOnly
            } else {
                TraceMode::Full
            },
            track_adic: flags & FLAG_TRACK_ADIC != 0,
            residue_bits,
            stop_on_state_cycle: flags & FLAG_STOP_ON_STATE != 0,
        },
    };

    validate_profile(&profile)?;
    Ok(profile)
}

/// A stable profile identifier: the trailing blake3_16 that `encode()` appends.
pub fn profile_id_16(p: &RunProfile) -> [u8; 16] {
    let enc = encode(p);
    let mut out = [0u8; 16];
    out.copy_from_slice(&enc[enc.len() - 16..]);
    out
}

pub fn profile_id_hex(p: &RunProfile) -> String {
    hex16(&profile_id_16(p))
}

fn pack_flags(c: &RunConfig) -> u16 {
    let mut f = 0u16;
    if c.mode == TraceMode::OddOnly {
        f |= FLAG_ODD_ONLY;
    }
    if c.track_adic {
        f |= FLAG_TRACK_ADIC;
    }
    if c.stop_on_state_cycle {
        f |= FLAG_STOP_ON_STATE;
    }
    f
}

fn need(bytes: &[u8], i: usize, n: usize) -> Result<()> {
    if bytes.len() < i + n {
        return Err(CollatzError::ProfileFormat("unexpected eof".into()));
    }
    Ok(())
}

fn take<const N: usize>(bytes: &[u8], i: &mut usize) -> Result<[u8; N]> {
    need(bytes, *i, N)?;
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes[*i..*i + N]);
    *i += N;
    Ok(out)
}

fn read_u8(bytes: &[u8], i: &mut usize) -> Result<u8> {
    Ok(take::<1>(bytes, i)?[0])
}

fn read_u16(bytes: &[u8], i: &mut usize) -> Result<u16> {
    Ok(u16::from_le_bytes(take(bytes, i)?))
}

fn read_u32(bytes: &[u8], i: &mut usize) -> Result<u32> {
    Ok(u32::from_le_bytes(take(bytes, i)?))
}

fn read_u64(bytes: &[u8], i: &mut usize) -> Result<u64> {
    Ok(u64::from_le_bytes(take(bytes, i)?))
}

fn read_i64(bytes: &[u8], i: &mut usize) -> Result<i64> {
    Ok(i64::from_le_bytes(take(bytes, i)?))
}
