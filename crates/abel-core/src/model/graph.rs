use std::collections::HashMap;

use super::entity::{Entity, EntityAttributes};
use crate::errors::{AbelError, Result};

/// Model - one snapshot of a building's entity graph
///
/// Entities keep their input order (the differ walks them in that order);
/// lookups by guid go through a `HashMap` index. Read-only after
/// construction.
#[derive(Debug, Clone, Default)]
pub struct Model {
    entities: Vec<Entity>,
    index: HashMap<String, usize>,
}

impl Model {
    /// Build a model from a list of entities
    ///
    /// # Errors
    ///
    /// Returns `DuplicateGuid` if two entities share a `bc_guid`.
    pub fn new(entities: Vec<Entity>) -> Result<Self> {
        let mut index = HashMap::with_capacity(entities.len());
        for (position, entity) in entities.iter().enumerate() {
            if index.insert(entity.bc_guid().to_string(), position).is_some() {
                return Err(AbelError::DuplicateGuid {
                    bc_guid: entity.bc_guid().to_string(),
                });
            }
        }
        Ok(Self { entities, index })
    }

    /// All entities in input order
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.entities.iter()
    }

    /// Look up an entity by guid
    pub fn get_entity(&self, bc_guid: &str) -> Option<&Entity> {
        self.index.get(bc_guid).map(|&position| &self.entities[position])
    }

    pub fn contains(&self, bc_guid: &str) -> bool {
        self.index.contains_key(bc_guid)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl<'a> IntoIterator for &'a Model {
    type Item = &'a Entity;
    type IntoIter = std::slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}
