use anchor_lang::prelude::*;
use solana_program::pubkey::{MAX_SEEDS, MAX_SEED_LEN};

use crate::errors::{context, XerionError};
use crate::types::{DerivedAddress, VerifiedPda};

/// Derive the canonical PDA for `seeds` and re-derive it from the found bump
/// before trusting it.
pub fn find_program_address_verified(
    program_id: &Pubkey,
    seeds: &[&[u8]],
) -> std::result::Result<VerifiedPda, XerionError> {
    check_seeds(seeds)?;
    let (address, bump) = find_canonical(program_id, seeds)?;
    // Re-derive even though the search just produced this pair; a search and a
    // direct derivation that disagree must never yield a trusted address.
    let rederived = create_with_bump(program_id, seeds, bump);
    if rederived != Some(address) {
        return Err(XerionError::PdaMismatch {
            program_id: *program_id,
            claimed_address: address,
            claimed_bump: bump,
            derived_address: address,
            derived_bump: bump,
            rederived_address: rederived,
        });
    }
    Ok(VerifiedPda::new(address, bump))
}

/// Check a claimed (address, bump) pair against the seeds it should derive from.
///
/// The pair is accepted only if the claimed bump re-derives the claimed address
/// directly and that address is also the canonical (highest off-curve bump)
/// derivation. A non-canonical bump is rejected even when it yields a valid
/// off-curve address.
pub fn verify(
    program_id: &Pubkey,
    seeds: &[&[u8]],
    claimed: &DerivedAddress,
) -> std::result::Result<VerifiedPda, XerionError> {
    check_seeds(seeds)?;
    let (derived_address, derived_bump) = find_canonical(program_id, seeds)?;
    let rederived = create_with_bump(program_id, seeds, claimed.bump);

    let consistent = rederived == Some(claimed.address)
        && derived_address == claimed.address
        && derived_bump == claimed.bump;
    if !consistent {
        return Err(XerionError::PdaMismatch {
            program_id: *program_id,
            claimed_address: claimed.address,
            claimed_bump: claimed.bump,
            derived_address,
            derived_bump,
            rederived_address: rederived,
        });
    }
    Ok(VerifiedPda::new(claimed.address, claimed.bump))
}

fn check_seeds(seeds: &[&[u8]]) -> std::result::Result<(), XerionError> {
    // One seed slot is taken by the bump.
    if seeds.len() >= MAX_SEEDS {
        return Err(XerionError::config(
            "too many PDA seeds",
            context([
                ("seedCount", seeds.len().to_string()),
                ("maxSeeds", (MAX_SEEDS - 1).to_string()),
            ]),
        ));
    }
    if let Some((index, seed)) = seeds
        .iter()
        .enumerate()
        .find(|(_, seed)| seed.len() > MAX_SEED_LEN)
    {
        return Err(XerionError::config(
            "PDA seed exceeds maximum length",
            context([
                ("seedIndex", index.to_string()),
                ("seedLen", seed.len().to_string()),
                ("maxSeedLen", MAX_SEED_LEN.to_string()),
            ]),
        ));
    }
    Ok(())
}

fn find_canonical(
    program_id: &Pubkey,
    seeds: &[&[u8]],
) -> std::result::Result<(Pubkey, u8), XerionError> {
    Pubkey::try_find_program_address(seeds, program_id).ok_or_else(|| {
        XerionError::invariant(
            "no viable PDA bump seed",
            context([
                ("programId", program_id.to_string()),
                ("seedCount", seeds.len().to_string()),
            ]),
        )
    })
}

/// Direct (non-searching) derivation; `None` if the result lands on the curve.
fn create_with_bump(program_id: &Pubkey, seeds: &[&[u8]], bump: u8) -> Option<Pubkey> {
    let bump = [bump];
    let mut seeds_with_bump = seeds.to_vec();
    seeds_with_bump.push(&bump);
    Pubkey::create_program_address(&seeds_with_bump, program_id).ok()
}
