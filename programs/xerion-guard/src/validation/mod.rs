pub mod assert;
pub mod math;
pub mod oracle;
pub mod pda;

pub use assert::*;
pub use math::*;
pub use oracle::*;
pub use pda::*;
