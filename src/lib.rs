// hypervisor identifier naming, for diagnostics in virtualized environments
mod error;
mod hypervisor;

pub use crate::error::IdentError;
pub use crate::hypervisor::Hypervisor;
