//! Reconcile command
//!
//! Usage: abel reconcile --current <FILE> --updated <FILE> --operations <FILE>

use clap::Args;
use std::path::PathBuf;

use abel_core::diff::compute_final_operations;
use abel_core::errors::ExError;
use abel_core_types::RequestId;
use abel_store::{parse_operations_file, parse_snapshot_file};

use super::common::{tagged, CommonArgs};

#[derive(Debug, Args)]
pub struct ReconcileArgs {
    /// Snapshot derived from the live building config
    #[arg(long)]
    pub current: PathBuf,

    /// Newly authored snapshot
    #[arg(long)]
    pub updated: PathBuf,

    /// Manually authored operation list
    #[arg(long)]
    pub operations: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Execute reconcile command
pub fn execute(args: ReconcileArgs) -> Result<(), Box<dyn std::error::Error>> {
    args.common.init_logging();
    let request_id = RequestId::new();
    let _span = tracing::info_span!("reconcile", request_id = %request_id).entered();

    let config = args.common.diff_config().map_err(tagged(&request_id))?;
    let current = parse_snapshot_file(&args.current).map_err(tagged(&request_id))?;
    let updated = parse_snapshot_file(&args.updated).map_err(tagged(&request_id))?;
    let manual = parse_operations_file(&args.operations, &updated, &current)
        .map_err(tagged(&request_id))?;

    let operations = compute_final_operations(&current, &updated, &manual, &config)
        .map_err(ExError::from)
        .map_err(tagged(&request_id))?;

    args.common.emit(&operations)
}
