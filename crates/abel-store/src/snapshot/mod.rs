//! Snapshot and operation list import
//!
//! Provides:
//! - Format v0 schemas for entity snapshots and manual operation lists
//! - YAML parsers with validation

pub mod format_v0;
pub mod parser;

pub use format_v0::{OperationEntryV0, OperationsV0, SnapshotV0};
pub use parser::{
    parse_operations_file, parse_operations_str, parse_snapshot_file, parse_snapshot_str,
};
