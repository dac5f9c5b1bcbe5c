use crate::errors::XerionError;
use crate::types::{AdmissionPolicy, PricePoint};
use crate::validation::math::{widening_mul, BPS_DENOMINATOR};

/// Admit an oracle price for use in transaction construction.
///
/// Checks run in order and the first failure is returned:
/// staleness, positive price, non-negative confidence, then the
/// confidence bound `confidence * 10_000 <= price * max_confidence_bps`.
/// Equality at the confidence bound is admitted.
pub fn admit(
    current_slot: u64,
    price: &PricePoint,
    policy: &AdmissionPolicy,
) -> Result<(), XerionError> {
    // Signed: a publish slot ahead of `current_slot` gives negative staleness,
    // which passes this check like any fresh price.
    let staleness_slots = i128::from(current_slot) - i128::from(price.publish_slot);
    if staleness_slots > i128::from(policy.max_staleness_slots) {
        return Err(XerionError::Stale {
            current_slot,
            publish_slot: price.publish_slot,
            staleness_slots,
            max_staleness_slots: policy.max_staleness_slots,
        });
    }

    if price.price <= 0 {
        return Err(XerionError::InvalidPrice { price: price.price });
    }

    if price.confidence < 0 {
        return Err(XerionError::InvalidConfidence {
            confidence: price.confidence,
        });
    }

    // Non-negative after the sign checks above; compared as full 256-bit products.
    let lhs = widening_mul(price.confidence as u128, BPS_DENOMINATOR);
    let rhs = widening_mul(price.price as u128, u128::from(policy.max_confidence_bps));
    if lhs > rhs {
        return Err(XerionError::ConfidenceExceeded {
            confidence: price.confidence,
            price: price.price,
            max_confidence_bps: policy.max_confidence_bps,
        });
    }

    Ok(())
}
