use std::collections::BTreeMap;

use anchor_lang::prelude::*;

/// Structured diagnostic payload attached to every rejection.
pub type ErrorContext = BTreeMap<&'static str, String>;

/// Build an [`ErrorContext`] from literal key/value pairs.
pub fn context<const N: usize>(pairs: [(&'static str, String); N]) -> ErrorContext {
    BTreeMap::from(pairs)
}

/// Stable error kinds, exposed to on-chain callers as Anchor error codes.
#[error_code]
pub enum XerionErrorCode {
    #[msg("Malformed or structurally invalid configuration")]
    ConfigError,

    #[msg("Oracle price rejected")]
    OracleStale,

    #[msg("Invariant violation")]
    InvariantViolation,

    #[msg("Account owned by unexpected program")]
    AccountOwnership,

    #[msg("Transaction build input rejected")]
    TransactionBuild,
}

/// A typed verdict failure carrying the values that caused it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum XerionError {
    #[error("configuration error: {message}")]
    Config {
        message: String,
        context: ErrorContext,
    },

    #[error(
        "oracle price is stale: {staleness_slots} slots old (current {current_slot}, \
         published {publish_slot}, max {max_staleness_slots})"
    )]
    Stale {
        current_slot: u64,
        publish_slot: u64,
        /// Signed; negative when the publish slot is ahead of the current slot.
        staleness_slots: i128,
        max_staleness_slots: u64,
    },

    #[error("oracle price must be > 0, got {price}")]
    InvalidPrice { price: i128 },

    #[error("oracle confidence must be >= 0, got {confidence}")]
    InvalidConfidence { confidence: i128 },

    #[error(
        "oracle confidence interval exceeds configured bound: confidence {confidence}, \
         price {price}, max {max_confidence_bps} bps"
    )]
    ConfidenceExceeded {
        confidence: i128,
        price: i128,
        max_confidence_bps: u64,
    },

    #[error("PDA bump verification failed for program {program_id} (claimed bump {claimed_bump})")]
    PdaMismatch {
        program_id: Pubkey,
        claimed_address: Pubkey,
        claimed_bump: u8,
        /// Canonical derivation for the seeds.
        derived_address: Pubkey,
        derived_bump: u8,
        /// Direct derivation with the claimed bump; `None` if it lands on the curve.
        rederived_address: Option<Pubkey>,
    },

    #[error("account {account} is owned by {actual_owner}, expected {expected_owner}")]
    AccountOwnership {
        account: Pubkey,
        expected_owner: Pubkey,
        actual_owner: Pubkey,
    },

    #[error("invariant violation: {message}")]
    InvariantViolation {
        message: String,
        context: ErrorContext,
    },
}

impl XerionError {
    pub fn config(message: impl Into<String>, context: ErrorContext) -> Self {
        XerionError::Config {
            message: message.into(),
            context,
        }
    }

    pub fn invariant(message: impl Into<String>, context: ErrorContext) -> Self {
        XerionError::InvariantViolation {
            message: message.into(),
            context,
        }
    }

    /// Stable kind of this error.
    pub fn code(&self) -> XerionErrorCode {
        match self {
            XerionError::Config { .. } => XerionErrorCode::ConfigError,
            XerionError::Stale { .. }
            | XerionError::InvalidPrice { .. }
            | XerionError::InvalidConfidence { .. }
            | XerionError::ConfidenceExceeded { .. } => XerionErrorCode::OracleStale,
            XerionError::PdaMismatch { .. } => XerionErrorCode::TransactionBuild,
            XerionError::AccountOwnership { .. } => XerionErrorCode::AccountOwnership,
            XerionError::InvariantViolation { .. } => XerionErrorCode::InvariantViolation,
        }
    }

    /// The offending values, keyed by name, for diagnostics.
    pub fn context(&self) -> ErrorContext {
        match self {
            XerionError::Config { context, .. }
            | XerionError::InvariantViolation { context, .. } => context.clone(),
            XerionError::Stale {
                current_slot,
                publish_slot,
                staleness_slots,
                max_staleness_slots,
            } => context([
                ("currentSlot", current_slot.to_string()),
                ("publishSlot", publish_slot.to_string()),
                ("stalenessSlots", staleness_slots.to_string()),
                ("maxStalenessSlots", max_staleness_slots.to_string()),
            ]),
            XerionError::InvalidPrice { price } => context([("price", price.to_string())]),
            XerionError::InvalidConfidence { confidence } => {
                context([("confidence", confidence.to_string())])
            }
            XerionError::ConfidenceExceeded {
                confidence,
                price,
                max_confidence_bps,
            } => context([
                ("confidence", confidence.to_string()),
                ("price", price.to_string()),
                ("maxConfidenceBps", max_confidence_bps.to_string()),
            ]),
            XerionError::PdaMismatch {
                program_id,
                claimed_address,
                claimed_bump,
                derived_address,
                derived_bump,
                rederived_address,
            } => context([
                ("programId", program_id.to_string()),
                ("claimedAddress", claimed_address.to_string()),
                ("claimedBump", claimed_bump.to_string()),
                ("derivedAddress", derived_address.to_string()),
                ("derivedBump", derived_bump.to_string()),
                (
                    "rederivedAddress",
                    rederived_address
                        .map(|a| a.to_string())
                        .unwrap_or_else(|| "on-curve".to_string()),
                ),
            ]),
            XerionError::AccountOwnership {
                account,
                expected_owner,
                actual_owner,
            } => context([
                ("account", account.to_string()),
                ("expectedOwner", expected_owner.to_string()),
                ("actualOwner", actual_owner.to_string()),
            ]),
        }
    }
}

impl From<XerionError> for anchor_lang::error::Error {
    fn from(err: XerionError) -> Self {
        msg!("{} {:?}", err, err.context());
        err.code().into()
    }
}
