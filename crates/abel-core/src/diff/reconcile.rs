//! Operation reconciliation.
//!
//! Two lists of operations exist for a set of entities: one authored by hand
//! (spreadsheet or building config) and one generated by
//! [`determine_entity_operations`](crate::diff::engine::determine_entity_operations).
//! DELETE and EXPORT can only come from the manual list, because structural
//! comparison cannot infer them.
//!
//! Precedence, per manual operation:
//!
//! 1. no generated operation for the guid → manual operation
//! 2. manual DELETE → manual operation
//! 3. manual EXPORT, generated anything else → generated operation
//! 4. otherwise → generated operation
//!
//! The manual list defines the universe: generated operations whose guid
//! never appears in it are dropped.

use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::time::Instant;

use crate::model::{EntityOperation, EntityOperationType};
use crate::{log_op_end, log_op_start};

const OP_RECONCILE: &str = "reconcile_operations";

/// Which precedence rule selected an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReconcileDecision {
    /// Rule 1: nothing was generated for the guid
    NoGeneratedOperation,
    /// Rule 2: a manual DELETE always wins
    ManualDeleteWins,
    /// Rule 3: a detected change supersedes a manual EXPORT marker
    GeneratedSupersedesExport,
    /// Rule 4: the generated operation replaces the manual one
    GeneratedReplacesManual,
}

impl ReconcileDecision {
    /// True when the manual operation was kept
    pub fn keeps_manual(&self) -> bool {
        matches!(
            self,
            ReconcileDecision::NoGeneratedOperation | ReconcileDecision::ManualDeleteWins
        )
    }
}

/// Apply the precedence rules to one manual operation
pub fn decide(
    model_operation: &EntityOperation,
    generated_operation: Option<&EntityOperation>,
) -> ReconcileDecision {
    let Some(generated_operation) = generated_operation else {
        return ReconcileDecision::NoGeneratedOperation;
    };
    match (model_operation.operation(), generated_operation.operation()) {
        (EntityOperationType::Delete, _) => ReconcileDecision::ManualDeleteWins,
        (EntityOperationType::Export, generated) if generated != EntityOperationType::Export => {
            ReconcileDecision::GeneratedSupersedesExport
        }
        _ => ReconcileDecision::GeneratedReplacesManual,
    }
}

/// One reconciled operation with the rule that selected it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReconciledOperation<'a> {
    pub operation: &'a EntityOperation,
    pub decision: ReconcileDecision,
}

/// Reconcile manual and generated operations, reporting the rule applied to
/// each output item.
///
/// Output order and length follow `model_operations`. If the generated list
/// contains the same guid more than once, the last occurrence is used.
pub fn reconcile_operations_with_decisions<'a>(
    model_operations: &'a [EntityOperation],
    generated_operations: &'a [EntityOperation],
) -> Vec<ReconciledOperation<'a>> {
    let start = Instant::now();
    log_op_start!(
        OP_RECONCILE,
        model_len = model_operations.len(),
        generated_len = generated_operations.len()
    );

    let generated_operation_map: HashMap<&str, &EntityOperation> = generated_operations
        .iter()
        .map(|operation| (operation.bc_guid(), operation))
        .collect();

    let reconciled: Vec<ReconciledOperation<'a>> = model_operations
        .iter()
        .map(|model_operation| {
            let generated_operation = generated_operation_map
                .get(model_operation.bc_guid())
                .copied();
            let decision = decide(model_operation, generated_operation);
            let operation = match (decision.keeps_manual(), generated_operation) {
                (false, Some(generated)) => generated,
                _ => model_operation,
            };
            tracing::debug!(
                component = module_path!(),
                bc_guid = model_operation.bc_guid(),
                manual = %model_operation.operation(),
                selected = %operation.operation(),
                decision = ?decision,
                "reconciled"
            );
            ReconciledOperation {
                operation,
                decision,
            }
        })
        .collect();

    let in_scope: HashSet<&str> = model_operations.iter().map(|op| op.bc_guid()).collect();
    let out_of_scope = generated_operation_map
        .keys()
        .filter(|guid| !in_scope.contains(*guid))
        .count();

    log_op_end!(
        OP_RECONCILE,
        duration_ms = start.elapsed().as_millis() as u64,
        operation_count = reconciled.len(),
        out_of_scope = out_of_scope
    );
    reconciled
}

/// Reconcile manual and generated operations.
///
/// Returns references into the two input lists; no operation is modified.
pub fn reconcile_operations<'a>(
    model_operations: &'a [EntityOperation],
    generated_operations: &'a [EntityOperation],
) -> Vec<&'a EntityOperation> {
    reconcile_operations_with_decisions(model_operations, generated_operations)
        .into_iter()
        .map(|reconciled| reconciled.operation)
        .collect()
}
