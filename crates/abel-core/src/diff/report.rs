//! Output views over entity operations.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::{
    EntityAttributes, EntityKind, EntityOperation, EntityOperationType, EntityUpdateMaskAttribute,
};

/// Flat, serializable view of one operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationRecord {
    pub bc_guid: String,
    pub code: String,
    pub kind: EntityKind,
    pub operation: EntityOperationType,
    pub update_mask: Vec<EntityUpdateMaskAttribute>,
}

impl From<&EntityOperation> for OperationRecord {
    fn from(operation: &EntityOperation) -> Self {
        Self {
            bc_guid: operation.bc_guid().to_string(),
            code: operation.entity().code().to_string(),
            kind: operation.entity().kind(),
            operation: operation.operation(),
            update_mask: operation.update_mask().iter().collect(),
        }
    }
}

/// Render a human-readable summary of a list of operations.
///
/// Informational only; counts are grouped by operation type and entities
/// are listed in input order.
pub fn render_operation_summary(operations: &[EntityOperation]) -> String {
    let mut out = String::new();

    out.push_str("## Entity Operations\n\n");

    if operations.is_empty() {
        out.push_str("_No operations._\n");
        return out;
    }

    let mut counts: BTreeMap<EntityOperationType, usize> = BTreeMap::new();
    for operation in operations {
        *counts.entry(operation.operation()).or_default() += 1;
    }
    let totals: Vec<String> = counts
        .iter()
        .map(|(operation, count)| format!("{operation}: {count}"))
        .collect();
    out.push_str(&format!(
        "**Total**: {} ({})\n\n",
        operations.len(),
        totals.join(", ")
    ));

    out.push_str("| Operation | Code | Kind | GUID | Mask |\n|---|---|---|---|---|\n");
    for operation in operations {
        let mask = if operation.update_mask().is_empty() {
            "-".to_string()
        } else {
            operation.update_mask().to_string()
        };
        out.push_str(&format!(
            "| {} | {} | {} | `{}` | {} |\n",
            operation.operation(),
            operation.entity().code(),
            operation.entity().kind(),
            operation.bc_guid(),
            mask
        ));
    }

    out
}
