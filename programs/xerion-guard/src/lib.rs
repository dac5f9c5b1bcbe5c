//! Guards that sit in front of Xerion transaction construction.
//!
//! Two pure checks form the trust boundary:
//! - [`validation::admit`] decides whether an oracle price is fresh and tight
//!   enough to use, with exact integer arithmetic.
//! - [`validation::verify`] re-derives a program-derived address from its seeds
//!   and only hands back a [`types::VerifiedPda`] when the claimed bump matches.
//!
//! [`client::XerionClient`] wires registries and wallet identity around them.

pub mod client;
pub mod errors;
pub mod types;
pub mod validation;

pub use client::{XerionClient, XerionClientConfig};
pub use errors::{ErrorContext, XerionError, XerionErrorCode};
pub use types::*;
pub use validation::{admit, bps_mul, find_program_address_verified, verify};
