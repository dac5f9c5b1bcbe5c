/// Basis points per unit.
pub const BPS_DENOMINATOR: u128 = 10_000;

/// `value * bps / 10_000`, rounded down. `None` if the product overflows.
pub fn bps_mul(value: u128, bps: u128) -> Option<u128> {
    value.checked_mul(bps).map(|product| product / BPS_DENOMINATOR)
}

/// Full 256-bit product of two `u128`s as `(high, low)` halves.
///
/// Tuples order lexicographically, so two results compare like the products.
pub fn widening_mul(a: u128, b: u128) -> (u128, u128) {
    const MASK: u128 = u64::MAX as u128;
    let (a_hi, a_lo) = (a >> 64, a & MASK);
    let (b_hi, b_lo) = (b >> 64, b & MASK);

    let lo_lo = a_lo * b_lo;
    let lo_hi = a_lo * b_hi;
    let hi_lo = a_hi * b_lo;
    let hi_hi = a_hi * b_hi;

    let mid = (lo_lo >> 64) + (lo_hi & MASK) + (hi_lo & MASK);
    let low = (lo_lo & MASK) | ((mid & MASK) << 64);
    let high = hi_hi + (lo_hi >> 64) + (hi_lo >> 64) + (mid >> 64);
    (high, low)
}
