//! Snapshot and operation list parsers with validation
//!
//! Parses YAML and validates schema version, guid uniqueness, and that every
//! manual operation targets an entity known to one of the snapshots

#![allow(clippy::result_large_err)]

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::Instant;

use abel_core::errors::AbelError;
use abel_core::model::{EntityOperation, Model, UpdateMask};
use abel_core::{log_op_end, log_op_error, log_op_start};

use crate::errors::{
    invalid_entry, io_error, operations_validation, snapshot_validation, Result,
    OP_OPERATIONS_PARSE, OP_SNAPSHOT_PARSE,
};
use crate::snapshot::format_v0::{OperationsV0, SnapshotV0};

const SUPPORTED_SCHEMA_VERSION: u32 = 0;

/// Parse a snapshot file from a path
///
/// # Errors
///
/// `Io` if the file cannot be read, otherwise as [`parse_snapshot_str`].
pub fn parse_snapshot_file(path: &Path) -> Result<Model> {
    let start = Instant::now();
    log_op_start!(OP_SNAPSHOT_PARSE, path = %path.display());

    let result = fs::read_to_string(path)
        .map_err(|e| io_error(OP_SNAPSHOT_PARSE, e))
        .and_then(|content| parse_snapshot_str(&content));

    match &result {
        Ok(model) => {
            log_op_end!(
                OP_SNAPSHOT_PARSE,
                duration_ms = start.elapsed().as_millis() as u64,
                entity_count = model.len()
            );
        }
        Err(err) => {
            log_op_error!(
                OP_SNAPSHOT_PARSE,
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
        }
    }
    result
}

/// Parse a snapshot from a string
///
/// # Errors
///
/// `InvalidInput` on malformed YAML, an unsupported schema version or a
/// duplicate guid.
pub fn parse_snapshot_str(content: &str) -> Result<Model> {
    let snapshot: SnapshotV0 = serde_yaml::from_str(content)
        .map_err(|e| snapshot_validation(&format!("YAML parse error: {}", e)))?;

    if snapshot.schema_version != SUPPORTED_SCHEMA_VERSION {
        return Err(snapshot_validation(&format!(
            "Unsupported schema_version: {}. Expected {}",
            snapshot.schema_version, SUPPORTED_SCHEMA_VERSION
        )));
    }

    Model::new(snapshot.entities).map_err(|e| invalid_entry(OP_SNAPSHOT_PARSE, e))
}

/// Parse a manual operation list file from a path
///
/// See [`parse_operations_str`] for how guids are resolved.
///
/// # Errors
///
/// `Io` if the file cannot be read, otherwise as [`parse_operations_str`].
pub fn parse_operations_file(
    path: &Path,
    updated_model: &Model,
    current_model: &Model,
) -> Result<Vec<EntityOperation>> {
    let start = Instant::now();
    log_op_start!(OP_OPERATIONS_PARSE, path = %path.display());

    let result = fs::read_to_string(path)
        .map_err(|e| io_error(OP_OPERATIONS_PARSE, e))
        .and_then(|content| parse_operations_str(&content, updated_model, current_model));

    match &result {
        Ok(operations) => {
            log_op_end!(
                OP_OPERATIONS_PARSE,
                duration_ms = start.elapsed().as_millis() as u64,
                operation_count = operations.len()
            );
        }
        Err(err) => {
            log_op_error!(
                OP_OPERATIONS_PARSE,
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
        }
    }
    result
}

/// Parse a manual operation list from a string
///
/// Each entry's guid is resolved against `updated_model` first and then
/// `current_model`, so a DELETE may target an entity that only exists in the
/// current snapshot. The resulting operation wraps the resolved entity.
///
/// # Errors
///
/// `InvalidInput` on malformed YAML, an unsupported schema version, a guid
/// listed twice, a guid found in neither model, or a mask that does not fit
/// the operation.
pub fn parse_operations_str(
    content: &str,
    updated_model: &Model,
    current_model: &Model,
) -> Result<Vec<EntityOperation>> {
    let operations: OperationsV0 = serde_yaml::from_str(content)
        .map_err(|e| operations_validation(&format!("YAML parse error: {}", e)))?;

    if operations.schema_version != SUPPORTED_SCHEMA_VERSION {
        return Err(operations_validation(&format!(
            "Unsupported schema_version: {}. Expected {}",
            operations.schema_version, SUPPORTED_SCHEMA_VERSION
        )));
    }

    let mut seen = HashSet::new();
    let mut resolved = Vec::with_capacity(operations.operations.len());

    for entry in operations.operations {
        if !seen.insert(entry.bc_guid.clone()) {
            return Err(operations_validation(&format!(
                "Duplicate operation for bc_guid {}",
                entry.bc_guid
            ))
            .with_entity_id(entry.bc_guid));
        }

        let entity = updated_model
            .get_entity(&entry.bc_guid)
            .or_else(|| current_model.get_entity(&entry.bc_guid))
            .ok_or_else(|| {
                invalid_entry(
                    OP_OPERATIONS_PARSE,
                    AbelError::EntityNotFound {
                        bc_guid: entry.bc_guid.clone(),
                    },
                )
            })?;

        let update_mask: UpdateMask = entry.update_mask.into_iter().collect();
        let operation = EntityOperation::new(entity.clone(), entry.operation, update_mask)
            .map_err(|e| invalid_entry(OP_OPERATIONS_PARSE, e))?;
        resolved.push(operation);
    }

    tracing::debug!(
        operation_count = resolved.len(),
        "Resolved manual operations"
    );

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use abel_core::errors::ExErrorKind;
    use abel_core::model::{EntityOperationType, ReportingEntity};

    fn models() -> (Model, Model) {
        let current = Model::new(vec![
            ReportingEntity::new("g1", "VAV-1", "HVAC/VAV").into(),
            ReportingEntity::new("g-old", "VAV-OLD", "HVAC/VAV").into(),
        ])
        .unwrap();
        let updated = Model::new(vec![ReportingEntity::new("g1", "VAV-1B", "HVAC/VAV").into()])
            .unwrap();
        (current, updated)
    }

    #[test]
    fn test_operation_wraps_updated_entity_first() {
        let (current, updated) = models();
        let yaml = "schema_version: 0\noperations:\n  - bc_guid: g1\n    operation: EXPORT\n";

        let operations = parse_operations_str(yaml, &updated, &current).unwrap();

        assert_eq!(operations[0].operation(), EntityOperationType::Export);
        assert_eq!(
            operations[0].entity().as_reporting().map(|e| e.code.as_str()),
            Some("VAV-1B")
        );
    }

    #[test]
    fn test_delete_may_target_current_only_entity() {
        let (current, updated) = models();
        let yaml = "schema_version: 0\noperations:\n  - bc_guid: g-old\n    operation: DELETE\n";

        let operations = parse_operations_str(yaml, &updated, &current).unwrap();
        assert_eq!(operations[0].bc_guid(), "g-old");
    }

    #[test]
    fn test_unknown_guid_is_rejected() {
        let (current, updated) = models();
        let yaml = "schema_version: 0\noperations:\n  - bc_guid: nope\n    operation: ADD\n";

        let err = parse_operations_str(yaml, &updated, &current).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidInput);
        assert_eq!(err.entity_id(), Some("nope"));
        assert_eq!(
            err.source_error().map(|e| e.kind()),
            Some(ExErrorKind::NotFound)
        );
    }
}
