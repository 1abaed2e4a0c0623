//! Options shared by every subcommand

use std::path::PathBuf;

use abel_core::diff::{render_operation_summary, OperationRecord};
use abel_core::errors::ExError;
use abel_core::logging_facility::{init, Profile};
use abel_core::model::EntityOperation;
use abel_core::DiffConfig;
use abel_core_types::RequestId;
use clap::{Args, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// JSON array of operation records
    Json,
    /// Markdown table
    Summary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogProfile {
    /// Human-readable logs on stderr
    Development,
    /// JSON logs on stderr
    Production,
}

#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Diff configuration YAML file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Link similarity threshold, overrides the config file
    #[arg(long)]
    pub link_threshold: Option<f64>,

    /// Log which fields caused TRANSLATION and LINKS flags
    #[arg(long)]
    pub trace_masks: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    #[arg(long, value_enum, default_value_t = LogProfile::Production)]
    pub log: LogProfile,
}

impl CommonArgs {
    pub fn init_logging(&self) {
        init(match self.log {
            LogProfile::Development => Profile::Development,
            LogProfile::Production => Profile::Production,
        });
    }

    /// Resolve the effective config: file (or defaults), then flag overrides
    pub fn diff_config(&self) -> Result<DiffConfig, ExError> {
        let mut config = match &self.config {
            Some(path) => abel_store::load_diff_config(path)?,
            None => DiffConfig::default(),
        };
        if let Some(threshold) = self.link_threshold {
            config = config.with_link_similarity_threshold(threshold);
        }
        if self.trace_masks {
            config = config.with_trace_mask_details(true);
        }
        config.validate()?;
        Ok(config)
    }

    pub fn emit(&self, operations: &[EntityOperation]) -> Result<(), Box<dyn std::error::Error>> {
        match self.format {
            OutputFormat::Json => {
                let records: Vec<OperationRecord> =
                    operations.iter().map(OperationRecord::from).collect();
                println!("{}", serde_json::to_string_pretty(&records)?);
            }
            OutputFormat::Summary => print!("{}", render_operation_summary(operations)),
        }
        Ok(())
    }
}

/// Tag an error with the run's request id
pub fn tagged(request_id: &RequestId) -> impl Fn(ExError) -> ExError + '_ {
    move |err| err.with_request_id(request_id.clone())
}
