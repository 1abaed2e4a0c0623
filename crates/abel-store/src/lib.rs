//! ABEL Store - snapshot and operation list loading
//!
//! Provides:
//! - Snapshot Format v0 schema (entity graph as YAML)
//! - Manual operation list Format v0 schema
//! - YAML parsers with validation, producing core `Model` and
//!   `EntityOperation` values
//! - Diff configuration file loading

pub mod config_file;
pub mod errors;
pub mod snapshot;

// Re-export key types
pub use config_file::{load_diff_config, parse_diff_config_str};
pub use errors::Result;
pub use snapshot::{
    parse_operations_file, parse_operations_str, parse_snapshot_file, parse_snapshot_str,
};
