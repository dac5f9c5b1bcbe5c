use std::collections::BTreeMap;

use anchor_lang::prelude::*;

use crate::errors::{context, XerionError};

/// Resolves a logical program role (e.g. "vault") to its program id.
pub trait ProgramRegistry: Send + Sync {
    fn program_id(&self, role: &str) -> std::result::Result<Pubkey, XerionError>;
}

/// Resolves a logical feed role (e.g. "SOL/USD") to its price account.
pub trait OracleRegistry: Send + Sync {
    fn feed_address(&self, role: &str) -> std::result::Result<Pubkey, XerionError>;
}

/// Identity of the signer the client acts for.
pub trait XerionWallet: Send + Sync {
    fn pubkey(&self) -> Pubkey;
}

impl XerionWallet for Pubkey {
    fn pubkey(&self) -> Pubkey {
        *self
    }
}

/// Fixed role table, usable as either registry.
#[derive(Clone, Debug, Default)]
pub struct StaticRegistry {
    entries: BTreeMap<String, Pubkey>,
}

impl StaticRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, role: impl Into<String>, key: Pubkey) -> Self {
        self.entries.insert(role.into(), key);
        self
    }

    fn lookup(&self, role: &str, kind: &'static str) -> std::result::Result<Pubkey, XerionError> {
        self.entries.get(role).copied().ok_or_else(|| {
            XerionError::config(
                format!("no {kind} registered for role"),
                context([("role", role.to_string())]),
            )
        })
    }
}

impl ProgramRegistry for StaticRegistry {
    fn program_id(&self, role: &str) -> std::result::Result<Pubkey, XerionError> {
        self.lookup(role, "program")
    }
}

impl OracleRegistry for StaticRegistry {
    fn feed_address(&self, role: &str) -> std::result::Result<Pubkey, XerionError> {
        self.lookup(role, "oracle feed")
    }
}
