//! Providers Module - External Data Sources
//!
//! The Webacy risk API is the only upstream today.

pub mod webacy;

pub use webacy::*;
