//! Entity operation diff and reconciliation engine.
//!
//! Compares a current and an updated [`Model`] and produces the entity
//! operations needed to bring the current state up to date, then merges
//! them with a manually authored operation list.
//!
//! ## Entry points
//!
//! ```ignore
//! use abel_core::diff::{determine_entity_operations, reconcile_operations};
//!
//! let generated = determine_entity_operations(&current, &updated)?;
//! let final_ops = reconcile_operations(&manual, &generated);
//! ```
//!
//! ## Guarantees
//!
//! - **Purity**: no I/O; every result is a function of the arguments.
//! - **Order**: generated operations follow the updated model's entity
//!   order; reconciled operations follow the manual list's order.
//! - **No inferred deletes**: entities missing from the updated model never
//!   produce an operation.

pub mod engine;
pub mod link_score;
pub mod reconcile;
pub mod report;
pub mod update_mask;

pub use engine::{determine_entity_operations, determine_entity_operations_with_config};
pub use link_score::link_score;
pub use reconcile::{
    reconcile_operations, reconcile_operations_with_decisions, ReconcileDecision,
    ReconciledOperation,
};
pub use report::{render_operation_summary, OperationRecord};
pub use update_mask::{
    determine_reporting_entity_update_mask, determine_virtual_entity_update_mask,
};

use crate::config::DiffConfig;
use crate::errors::Result;
use crate::model::{EntityOperation, Model};

/// Diff two models and reconcile the result against manual operations.
///
/// # Errors
///
/// Propagates errors from [`determine_entity_operations_with_config`].
pub fn compute_final_operations(
    current_model: &Model,
    updated_model: &Model,
    model_operations: &[EntityOperation],
    config: &DiffConfig,
) -> Result<Vec<EntityOperation>> {
    let generated_operations =
        determine_entity_operations_with_config(current_model, updated_model, config)?;
    Ok(reconcile_operations(model_operations, &generated_operations)
        .into_iter()
        .cloned()
        .collect())
}
