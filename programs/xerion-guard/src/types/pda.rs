use anchor_lang::prelude::*;

/// An (address, bump) pair as claimed by an untrusted source.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct DerivedAddress {
    pub address: Pubkey,
    pub bump: u8,
}

impl DerivedAddress {
    pub const SIZE: usize = 32 + 1;
}

/// A PDA that has been re-derived from its seeds and checked.
///
/// Only the verifier in [`crate::validation::pda`] can construct one, so holding
/// a `VerifiedPda` is proof the pair derives from the seeds it was checked with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerifiedPda {
    address: Pubkey,
    bump: u8,
}

impl VerifiedPda {
    pub(crate) fn new(address: Pubkey, bump: u8) -> Self {
        Self { address, bump }
    }

    pub fn address(&self) -> Pubkey {
        self.address
    }

    pub fn bump(&self) -> u8 {
        self.bump
    }
}

impl From<VerifiedPda> for DerivedAddress {
    fn from(pda: VerifiedPda) -> Self {
        DerivedAddress {
            address: pda.address,
            bump: pda.bump,
        }
    }
}
