//! Per-variant update mask calculators.
//!
//! Each calculator compares one current/updated pair of the same entity.
//! The differ picks the calculator by variant; the calculators never inspect
//! variants themselves.

use std::collections::HashSet;

use crate::config::DiffConfig;
use crate::diff::link_score::link_score;
use crate::model::{
    EntityAttributes, EntityUpdateMaskAttribute, ReportingEntity, UpdateMask, VirtualEntity,
};

/// Checks shared by both variants: code, type and connections.
///
/// CONNECTIONS is flagged only for connections added on the updated side.
fn common_update_mask<E: EntityAttributes>(current: &E, updated: &E) -> UpdateMask {
    let mut update_mask = UpdateMask::new();
    if updated.code() != current.code() {
        update_mask.insert(EntityUpdateMaskAttribute::Code);
    }
    if updated.type_name() != current.type_name() {
        update_mask.insert(EntityUpdateMaskAttribute::Type);
    }
    let current_connections: HashSet<_> = current.connections().iter().collect();
    if updated
        .connections()
        .iter()
        .any(|connection| !current_connections.contains(connection))
    {
        update_mask.insert(EntityUpdateMaskAttribute::Connections);
    }
    update_mask
}

/// Compute the update mask for a reporting entity.
///
/// TRANSLATION is flagged when any current translation is absent from the
/// updated translations; translations that only exist on the updated side
/// do not flag it.
pub fn determine_reporting_entity_update_mask(
    current: &ReportingEntity,
    updated: &ReportingEntity,
    config: &DiffConfig,
) -> UpdateMask {
    let mut update_mask = common_update_mask(current, updated);

    let updated_translations: HashSet<_> = updated.translations.iter().collect();
    let lost: Vec<&str> = current
        .translations
        .iter()
        .filter(|translation| !updated_translations.contains(translation))
        .map(|translation| translation.std_field_name.as_str())
        .collect();

    if !lost.is_empty() {
        if config.trace_mask_details {
            tracing::debug!(
                component = module_path!(),
                bc_guid = %updated.bc_guid,
                code = %updated.code,
                current_translations = current.translations.len(),
                updated_translations = updated.translations.len(),
                lost_fields = ?lost,
                "translation mismatch"
            );
        }
        update_mask.insert(EntityUpdateMaskAttribute::Translation);
    }
    update_mask
}

/// Compute the update mask for a virtual entity.
///
/// LINKS is only evaluated when both sides have links (facilities entities
/// are virtual but have none) and is flagged when the link score falls
/// strictly below `config.link_similarity_threshold`.
pub fn determine_virtual_entity_update_mask(
    current: &VirtualEntity,
    updated: &VirtualEntity,
    config: &DiffConfig,
) -> UpdateMask {
    let mut update_mask = common_update_mask(current, updated);

    if current.links.is_empty() || updated.links.is_empty() {
        return update_mask;
    }
    if let Some(score) = link_score(&current.links, &updated.links) {
        if score < config.link_similarity_threshold {
            if config.trace_mask_details {
                tracing::debug!(
                    component = module_path!(),
                    bc_guid = %updated.bc_guid,
                    code = %updated.code,
                    link_score = score,
                    threshold = config.link_similarity_threshold,
                    "link score below threshold"
                );
            }
            update_mask.insert(EntityUpdateMaskAttribute::Links);
        }
    }
    update_mask
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Connection, ConnectionType, FieldTranslation};

    #[test]
    fn test_connection_removal_is_ignored() {
        let current = ReportingEntity::new("g", "VAV-1", "HVAC/VAV")
            .with_connection(Connection::new("ahu", ConnectionType::Feeds));
        let updated = ReportingEntity::new("g", "VAV-1", "HVAC/VAV");
        let mask =
            determine_reporting_entity_update_mask(&current, &updated, &DiffConfig::default());
        assert!(mask.is_empty());
    }

    #[test]
    fn test_threshold_is_strict() {
        let links: Vec<FieldTranslation> = (0..10)
            .map(|i| FieldTranslation::link(format!("f{i}"), "src", format!("p{i}")))
            .collect();
        let current = links
            .iter()
            .cloned()
            .fold(VirtualEntity::new("g", "Z", "T"), |e, l| e.with_link(l));
        // 9 of 10 retained: score is exactly 0.9, not below the threshold
        let updated = links[..9]
            .iter()
            .cloned()
            .fold(VirtualEntity::new("g", "Z", "T"), |e, l| e.with_link(l));
        let mask = determine_virtual_entity_update_mask(&current, &updated, &DiffConfig::default());
        assert!(!mask.contains(EntityUpdateMaskAttribute::Links));
    }
}
