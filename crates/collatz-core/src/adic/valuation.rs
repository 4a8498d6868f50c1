// crates/collatz-core/src/adic/valuation.rs
//
// p-adic valuations of positive integers.
//
//   v_p(x) = max { k : p^k | x }
//
// v2 has a bit-trick fast path (trailing zeros); the general form divides by
// p until a remainder shows up. Both agree on every u64 > 0.

/// Exponent of 2 in `x`. `v2(0)` is reported as 0.
#[inline]
pub fn v2(x: u64) -> u32 {
    if x == 0 {
        return 0;
    }
    x.trailing_zeros()
}

/// Exponent of `p` in `x` by repeated division. `valuation(0, p)` is 0, and so
/// is any `p < 2`.
pub fn valuation(mut x: u64, p: u64) -> u32 {
    if x == 0 || p < 2 {
        return 0;
    }
    let mut k = 0u32;
    while x % p == 0 {
        x /= p;
        k += 1;
    }
    k
}

/// Exponent of 3 in `x`.
#[inline]
pub fn v3(x: u64) -> u32 {
    valuation(x, 3)
}

/// Odd part of a positive value: strip every factor of 2.
#[inline]
pub fn odd_part(x: i64) -> i64 {
    if x <= 0 {
        return x;
    }
    x >> x.trailing_zeros()
}
