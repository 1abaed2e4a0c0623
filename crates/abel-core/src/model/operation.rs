use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::entity::{Entity, EntityAttributes};
use crate::errors::{AbelError, Result};

/// Operation applied to one entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityOperationType {
    Add,
    Update,
    Delete,
    Export,
}

impl std::fmt::Display for EntityOperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            EntityOperationType::Add => "ADD",
            EntityOperationType::Update => "UPDATE",
            EntityOperationType::Delete => "DELETE",
            EntityOperationType::Export => "EXPORT",
        };
        f.write_str(label)
    }
}

/// Attribute category detected as changed between two snapshots of an entity
///
/// Declaration order is the canonical mask order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityUpdateMaskAttribute {
    Code,
    Type,
    Connections,
    Translation,
    Links,
}

impl std::fmt::Display for EntityUpdateMaskAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            EntityUpdateMaskAttribute::Code => "CODE",
            EntityUpdateMaskAttribute::Type => "TYPE",
            EntityUpdateMaskAttribute::Connections => "CONNECTIONS",
            EntityUpdateMaskAttribute::Translation => "TRANSLATION",
            EntityUpdateMaskAttribute::Links => "LINKS",
        };
        f.write_str(label)
    }
}

/// Ordered set of changed attribute categories
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UpdateMask(BTreeSet<EntityUpdateMaskAttribute>);

impl UpdateMask {
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Mark an attribute as changed
    pub fn insert(&mut self, attribute: EntityUpdateMaskAttribute) {
        self.0.insert(attribute);
    }

    pub fn contains(&self, attribute: EntityUpdateMaskAttribute) -> bool {
        self.0.contains(&attribute)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = EntityUpdateMaskAttribute> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<EntityUpdateMaskAttribute> for UpdateMask {
    fn from_iter<I: IntoIterator<Item = EntityUpdateMaskAttribute>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::fmt::Display for UpdateMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let labels: Vec<String> = self.iter().map(|a| a.to_string()).collect();
        write!(f, "{{{}}}", labels.join(", "))
    }
}

/// EntityOperation - an immutable (entity, operation, mask) record
///
/// Only UPDATE operations carry a mask, and an UPDATE mask is never empty.
/// Both rules are enforced at construction; the record exposes no mutators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityOperation {
    entity: Entity,
    operation: EntityOperationType,
    update_mask: UpdateMask,
}

impl EntityOperation {
    /// Create an operation, validating the mask against the operation type
    ///
    /// # Errors
    ///
    /// - `EmptyUpdateMask` if `operation` is UPDATE and `update_mask` is empty
    /// - `UnexpectedUpdateMask` if `operation` is not UPDATE and a mask is given
    pub fn new(
        entity: Entity,
        operation: EntityOperationType,
        update_mask: UpdateMask,
    ) -> Result<Self> {
        match operation {
            EntityOperationType::Update if update_mask.is_empty() => {
                Err(AbelError::EmptyUpdateMask {
                    bc_guid: entity.bc_guid().to_string(),
                })
            }
            EntityOperationType::Add | EntityOperationType::Delete | EntityOperationType::Export
                if !update_mask.is_empty() =>
            {
                Err(AbelError::UnexpectedUpdateMask {
                    bc_guid: entity.bc_guid().to_string(),
                    operation,
                })
            }
            _ => Ok(Self {
                entity,
                operation,
                update_mask,
            }),
        }
    }

    pub fn add(entity: Entity) -> Self {
        Self::unmasked(entity, EntityOperationType::Add)
    }

    /// Create an UPDATE operation
    ///
    /// # Errors
    ///
    /// Returns `EmptyUpdateMask` if `update_mask` is empty.
    pub fn update(entity: Entity, update_mask: UpdateMask) -> Result<Self> {
        Self::new(entity, EntityOperationType::Update, update_mask)
    }

    pub fn delete(entity: Entity) -> Self {
        Self::unmasked(entity, EntityOperationType::Delete)
    }

    pub fn export(entity: Entity) -> Self {
        Self::unmasked(entity, EntityOperationType::Export)
    }

    fn unmasked(entity: Entity, operation: EntityOperationType) -> Self {
        Self {
            entity,
            operation,
            update_mask: UpdateMask::new(),
        }
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn operation(&self) -> EntityOperationType {
        self.operation
    }

    pub fn update_mask(&self) -> &UpdateMask {
        &self.update_mask
    }

    pub fn bc_guid(&self) -> &str {
        self.entity.bc_guid()
    }
}
