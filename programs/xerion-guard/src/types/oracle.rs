use anchor_lang::prelude::*;

/// A single oracle report as published on-chain.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricePoint {
    /// Fixed-point price; must be positive to be admitted
    pub price: i128,
    /// Confidence band in the same units as `price`
    pub confidence: i128,
    /// Slot the price was published at
    pub publish_slot: u64,
}

/// Caller-supplied admission bounds.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdmissionPolicy {
    pub max_staleness_slots: u64,
    /// Upper bound on `confidence / price`, in basis points
    pub max_confidence_bps: u64,
}

impl AdmissionPolicy {
    pub const SIZE: usize = 8 + 8;
}

impl PricePoint {
    pub const SIZE: usize = 16 + 16 + 8;
}
