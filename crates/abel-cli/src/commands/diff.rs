//! Diff command
//!
//! Usage: abel diff --current <FILE> --updated <FILE>

use clap::Args;
use std::path::PathBuf;

use abel_core::diff::determine_entity_operations_with_config;
use abel_core::errors::ExError;
use abel_core_types::RequestId;
use abel_store::parse_snapshot_file;

use super::common::{tagged, CommonArgs};

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Snapshot derived from the live building config
    #[arg(long)]
    pub current: PathBuf,

    /// Newly authored snapshot
    #[arg(long)]
    pub updated: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Execute diff command
pub fn execute(args: DiffArgs) -> Result<(), Box<dyn std::error::Error>> {
    args.common.init_logging();
    let request_id = RequestId::new();
    let _span = tracing::info_span!("diff", request_id = %request_id).entered();

    let config = args.common.diff_config().map_err(tagged(&request_id))?;
    let current = parse_snapshot_file(&args.current).map_err(tagged(&request_id))?;
    let updated = parse_snapshot_file(&args.updated).map_err(tagged(&request_id))?;

    let operations = determine_entity_operations_with_config(&current, &updated, &config)
        .map_err(ExError::from)
        .map_err(tagged(&request_id))?;

    args.common.emit(&operations)
}
