//! Snapshot Format v0 schema
//!
//! Defines the YAML structure for entity snapshots and manual operation
//! lists

use abel_core::model::{Entity, EntityOperationType, EntityUpdateMaskAttribute};
use serde::{Deserialize, Serialize};

/// Top-level snapshot file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotV0 {
    /// Schema version (must be 0 for this format)
    pub schema_version: u32,

    /// Entities in snapshot order, each tagged with `kind: virtual | reporting`
    #[serde(default)]
    pub entities: Vec<Entity>,
}

/// Top-level manual operation list structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationsV0 {
    /// Schema version (must be 0 for this format)
    pub schema_version: u32,

    #[serde(default)]
    pub operations: Vec<OperationEntryV0>,
}

/// One manually authored operation
///
/// The entity itself is not repeated here; it is looked up by guid in the
/// loaded snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationEntryV0 {
    pub bc_guid: String,

    pub operation: EntityOperationType,

    /// Changed attributes (UPDATE only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub update_mask: Vec<EntityUpdateMaskAttribute>,
}
