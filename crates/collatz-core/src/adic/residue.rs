// crates/collatz-core/src/adic/residue.rs

/// `value mod 2^bits`, always in `0..2^bits`. Callers keep `bits` in 1..=63.
#[inline]
pub fn residue(value: i64, bits: u8) -> u64 {
    let m = 1i128 << bits;
    (value as i128).rem_euclid(m) as u64
}

/// Residues of `value` for every configured width, in configured order.
pub fn residue_vector(value: i64, bits: &[u8]) -> Box<[u64]> {
    bits.iter().map(|&b| residue(value, b)).collect()
}

/// Sequence of `value mod 2^bits` across a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResidueBucket {
    pub bits: u8,
    pub values: Vec<u64>,
}

impl ResidueBucket {
    pub fn new(bits: u8) -> Self {
        Self {
            bits,
            values: Vec::new(),
        }
    }

    #[inline]
    pub fn push(&mut self, value: i64) {
        self.values.push(residue(value, self.bits));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn residues_are_non_negative() {
        assert_eq!(residue(-1, 8), 255);
        assert_eq!(residue(-1, 63), (1u64 << 63) - 1);
        assert_eq!(residue(300, 8), 44);
        assert_eq!(residue(i64::MAX, 63), i64::MAX as u64);
        assert_eq!(&*residue_vector(65_537, &[8, 12, 16]), &[1, 1, 1]);
    }
}
