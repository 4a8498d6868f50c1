pub fn crc32(bytes: &[u8]) -> u32 {
    let mut h = crc32fast::Hasher::new();
    h.update(bytes);
    h.finalize()
}

pub fn blake3_16(bytes: &[u8]) -> [u8; 16] {
    let hash = blake3::hash(bytes);
    let mut out = [0u8; 16];
    out.copy_from_slice(&hash.as_bytes()[0..16]);
    out
}

/// Stable fingerprint of a trajectory: blake3 over the little-endian values.
pub fn trajectory_digest_16(seq: &[i64]) -> [u8; 16] {
    let mut h = blake3::Hasher::new();
    for v in seq {
        h.update(&v.to_le_bytes());
    }
    let mut out = [0u8; 16];
    out.copy_from_slice(&h.finalize().as_bytes()[0..16]);
    out
}

pub fn trajectory_digest_hex(seq: &[i64]) -> String {
    hex16(&trajectory_digest_16(seq))
}

pub fn hex16(id: &[u8; 16]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut s = String::with_capacity(32);
    for &b in id {
        s.push(HEX[(b >> 4) as usize] as char);
        s.push(HEX[(b & 0x0F) as usize] as char);
    }
    s
}
