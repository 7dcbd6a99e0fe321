//! Gap canonicalization, aggregation, and rationale generation.
//!
//! The analytical core of the library: free-text gap phrases from the
//! inference engine are normalized into canonical categories, tallied
//! across the corpus, and ranked into a remediation report.

pub mod aggregate;
pub mod canonical;
pub mod rationale;

pub use aggregate::{aggregate, calculate_priority, rank_gaps, GapAnalyzer, RankedGap};
