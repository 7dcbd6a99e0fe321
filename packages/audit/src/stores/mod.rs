//! Storage implementations.

pub mod json_dir;
pub mod memory;
pub mod report_csv;

pub use json_dir::JsonDirStore;
pub use memory::MemoryStore;
pub use report_csv::{CsvReportSink, GAP_REPORT_HEADERS};
