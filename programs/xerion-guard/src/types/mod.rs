pub mod cluster;
pub mod oracle;
pub mod pda;
pub mod registry;

pub use cluster::*;
pub use oracle::*;
pub use pda::*;
pub use registry::*;
