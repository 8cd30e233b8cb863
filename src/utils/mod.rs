//! Utils Module - Shared Constants & the Usage Ledger

pub mod constants;
pub mod ledger;

pub use constants::*;
pub use ledger::*;
