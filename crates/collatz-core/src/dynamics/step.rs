// crates/collatz-core/src/dynamics/step.rs

use crate::adic::valuation::v2;

/// One full generalized step: n/d when d | n, else q*n + t.
/// `None` when q*n + t leaves the i64 range.
#[inline]
pub fn step_full(n: i64, d: i64, q: i64, t: i64) -> Option<i64> {
    if n % d == 0 {
        Some(n / d)
    } else {
        q.checked_mul(n)?.checked_add(t)
    }
}

/// Outcome of one accelerated (odd-only) step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OddStep {
    /// a = q*n + t was a positive integer; `value = a / 2^k` is odd.
    Valid { raw: i64, value: i64, k: u32 },
    /// a overflowed (`raw == None`) or was <= 0. Terminates the run.
    Invalid { raw: Option<i64> },
}

impl OddStep {
    /// Stripped exponent; 0 for the invalid sentinel.
    #[inline]
    pub fn k(&self) -> u32 {
        match *self {
            OddStep::Valid { k, .. } => k,
            OddStep::Invalid { .. } => 0,
        }
    }

    #[inline]
    pub fn value(&self) -> Option<i64> {
        match *self {
            OddStep::Valid { value, .. } => Some(value),
            OddStep::Invalid { .. } => None,
        }
    }
}

/// Accelerated step from an odd positive `n_odd`: a = q*n + t, then divide out
/// 2^v2(a) in one go.
pub fn step_odd_only(n_odd: i64, q: i64, t: i64) -> OddStep {
    let raw = match q.checked_mul(n_odd).and_then(|qn| qn.checked_add(t)) {
        Some(a) => a,
        None => return OddStep::Invalid { raw: None },
    };
    if raw <= 0 {
        return OddStep::Invalid { raw: Some(raw) };
    }

    let k = v2(raw as u64);
    OddStep::Valid {
        raw,
        value: raw >> k,
        k,
    }
}
