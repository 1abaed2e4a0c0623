//! Operation differ.
//!
//! The core entry point is [`determine_entity_operations`], which walks the
//! updated model and classifies each entity against the current model.

use std::time::Instant;

use crate::config::DiffConfig;
use crate::diff::update_mask::{
    determine_reporting_entity_update_mask, determine_virtual_entity_update_mask,
};
use crate::errors::{AbelError, Result};
use crate::model::{Entity, EntityAttributes, EntityOperation, Model};
use crate::{log_op_end, log_op_error, log_op_start};

const OP_DETERMINE: &str = "determine_entity_operations";

/// Determine the operations that bring `current_model` up to `updated_model`,
/// using the default [`DiffConfig`].
///
/// # Errors
///
/// See [`determine_entity_operations_with_config`].
pub fn determine_entity_operations(
    current_model: &Model,
    updated_model: &Model,
) -> Result<Vec<EntityOperation>> {
    determine_entity_operations_with_config(current_model, updated_model, &DiffConfig::default())
}

/// Determine entity operations between two models.
///
/// For each entity of `updated_model`, in model order:
/// - guid unknown to `current_model` → ADD
/// - otherwise the variant's mask calculator runs, and a non-empty mask
///   yields UPDATE; an empty mask yields nothing.
///
/// Entities that exist only in `current_model` are never visited, so no
/// DELETE is ever generated here.
///
/// # Errors
///
/// - `VariantConflict` if a guid is a virtual entity on one side and a
///   reporting entity on the other. No partial result is returned.
/// - `InvalidConfig` if `config` fails [`DiffConfig::validate`].
pub fn determine_entity_operations_with_config(
    current_model: &Model,
    updated_model: &Model,
    config: &DiffConfig,
) -> Result<Vec<EntityOperation>> {
    let start = Instant::now();
    log_op_start!(
        OP_DETERMINE,
        current_len = current_model.len(),
        updated_len = updated_model.len()
    );

    match config
        .validate()
        .and_then(|()| diff_models(current_model, updated_model, config))
    {
        Ok(operations) => {
            log_op_end!(
                OP_DETERMINE,
                duration_ms = start.elapsed().as_millis() as u64,
                operation_count = operations.len()
            );
            Ok(operations)
        }
        Err(err) => {
            log_op_error!(
                OP_DETERMINE,
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            Err(err)
        }
    }
}

fn diff_models(
    current_model: &Model,
    updated_model: &Model,
    config: &DiffConfig,
) -> Result<Vec<EntityOperation>> {
    let mut operations = Vec::new();

    for import_entity in updated_model {
        let Some(export_entity) = current_model.get_entity(import_entity.bc_guid()) else {
            operations.push(EntityOperation::add(import_entity.clone()));
            continue;
        };

        let update_mask = match (export_entity, import_entity) {
            (Entity::Virtual(current), Entity::Virtual(updated)) => {
                determine_virtual_entity_update_mask(current, updated, config)
            }
            (Entity::Reporting(current), Entity::Reporting(updated)) => {
                determine_reporting_entity_update_mask(current, updated, config)
            }
            (Entity::Virtual(_), Entity::Reporting(_))
            | (Entity::Reporting(_), Entity::Virtual(_)) => {
                return Err(AbelError::VariantConflict {
                    bc_guid: import_entity.bc_guid().to_string(),
                    current_kind: export_entity.kind(),
                    updated_kind: import_entity.kind(),
                });
            }
        };

        if !update_mask.is_empty() {
            operations.push(EntityOperation::update(
                import_entity.clone(),
                update_mask,
            )?);
        }
    }

    Ok(operations)
}
