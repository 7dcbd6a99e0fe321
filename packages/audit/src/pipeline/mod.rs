//! The sequential audit pipeline.

pub mod run;

pub use run::{run_audit, RunSummary};
