//! Core Module - Audit Pipeline Business Logic
//!
//! Classification, score normalization, finding formatting, report
//! composition, and the orchestrator that runs them in order.

pub mod auditor;
pub mod classifier;
pub mod findings;
pub mod report;
pub mod scoring;

pub use auditor::*;
pub use classifier::*;
pub use findings::*;
pub use report::*;
pub use scoring::*;
