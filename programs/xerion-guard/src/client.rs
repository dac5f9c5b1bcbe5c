use anchor_lang::prelude::*;

use crate::errors::{context, XerionError};
use crate::types::*;
use crate::validation;

/// Collaborators and settings a [`XerionClient`] is built from.
pub struct XerionClientConfig {
    pub wallet: Box<dyn XerionWallet>,
    /// Cluster name, e.g. "devnet"
    pub cluster: String,
    /// Commitment level, e.g. "confirmed"
    pub commitment: String,
    pub program_registry: Box<dyn ProgramRegistry>,
    pub oracle_registry: Box<dyn OracleRegistry>,
}

/// Validated client wiring. Every price and PDA passes through the
/// guards in [`crate::validation`] before it is handed back.
pub struct XerionClient {
    wallet: Box<dyn XerionWallet>,
    cluster: Cluster,
    commitment: Commitment,
    program_registry: Box<dyn ProgramRegistry>,
    oracle_registry: Box<dyn OracleRegistry>,
}

impl XerionClient {
    pub fn new(config: XerionClientConfig) -> std::result::Result<Self, XerionError> {
        let wallet_key = config.wallet.pubkey();
        validation::assert_condition(
            wallet_key != Pubkey::default(),
            "wallet pubkey must be a valid public key",
            context([("wallet", wallet_key.to_string())]),
        )?;

        let cluster: Cluster = config.cluster.parse()?;
        let commitment: Commitment = config.commitment.parse()?;

        msg!(
            "Xerion client ready: wallet={} cluster={} commitment={}",
            wallet_key,
            cluster,
            commitment
        );

        Ok(Self {
            wallet: config.wallet,
            cluster,
            commitment,
            program_registry: config.program_registry,
            oracle_registry: config.oracle_registry,
        })
    }

    pub fn wallet(&self) -> Pubkey {
        self.wallet.pubkey()
    }

    pub fn cluster(&self) -> Cluster {
        self.cluster
    }

    pub fn commitment(&self) -> Commitment {
        self.commitment
    }

    pub fn program_id(&self, role: &str) -> std::result::Result<Pubkey, XerionError> {
        self.program_registry.program_id(role).map_err(log_rejection)
    }

    pub fn feed_address(&self, role: &str) -> std::result::Result<Pubkey, XerionError> {
        self.oracle_registry.feed_address(role).map_err(log_rejection)
    }

    /// Run the price admission gate for a feed read at `current_slot`.
    pub fn admit_price(
        &self,
        current_slot: u64,
        price: &PricePoint,
        policy: &AdmissionPolicy,
    ) -> std::result::Result<(), XerionError> {
        validation::admit(current_slot, price, policy).map_err(log_rejection)
    }

    /// Derive and verify the canonical PDA for `seeds` under the program
    /// registered for `program_role`.
    pub fn derive_pda(
        &self,
        program_role: &str,
        seeds: &[&[u8]],
    ) -> std::result::Result<VerifiedPda, XerionError> {
        let program_id = self.program_id(program_role)?;
        validation::find_program_address_verified(&program_id, seeds).map_err(log_rejection)
    }

    /// Verify a PDA supplied by an outside party.
    pub fn verify_pda(
        &self,
        program_role: &str,
        seeds: &[&[u8]],
        claimed: &DerivedAddress,
    ) -> std::result::Result<VerifiedPda, XerionError> {
        let program_id = self.program_id(program_role)?;
        validation::verify(&program_id, seeds, claimed).map_err(log_rejection)
    }

    /// Require `account` to be owned by the program registered for `program_role`.
    pub fn check_account_owner(
        &self,
        account: &Pubkey,
        actual_owner: &Pubkey,
        program_role: &str,
    ) -> std::result::Result<(), XerionError> {
        let expected_owner = self.program_id(program_role)?;
        if *actual_owner != expected_owner {
            return Err(log_rejection(XerionError::AccountOwnership {
                account: *account,
                expected_owner,
                actual_owner: *actual_owner,
            }));
        }
        Ok(())
    }
}

fn log_rejection(err: XerionError) -> XerionError {
    msg!("Rejected ({}): {} {:?}", err.code(), err, err.context());
    err
}
