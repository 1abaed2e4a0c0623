#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use abel_core::diff::{determine_entity_operations, determine_entity_operations_with_config};
use abel_core::errors::{AbelError, ExError, ExErrorKind};
use abel_core::model::{
    Connection, ConnectionType, Entity, EntityKind, EntityOperationType, EntityUpdateMaskAttribute,
};
use abel_core::{DiffConfig, Model};
use common::{floor, model, vav, zone};

#[test]
fn test_new_entities_are_added_without_mask() {
    let current = model(vec![vav("g1").into()]);
    let updated = model(vec![vav("g1").into(), vav("g2").into(), floor("f1").into()]);

    let operations = determine_entity_operations(&current, &updated).unwrap();

    assert_eq!(operations.len(), 2);
    assert!(operations
        .iter()
        .all(|op| op.operation() == EntityOperationType::Add && op.update_mask().is_empty()));
    assert_eq!(operations[0].bc_guid(), "g2");
    assert_eq!(operations[1].bc_guid(), "f1");
}

#[test]
fn test_unchanged_entities_produce_nothing() {
    let entities: Vec<Entity> = vec![
        vav("g1").into(),
        zone("z1", "g1", &["L1", "L2"]).into(),
        floor("f1").into(),
    ];
    let current = model(entities.clone());
    let updated = model(entities);

    assert!(determine_entity_operations(&current, &updated)
        .unwrap()
        .is_empty());
}

#[test]
fn test_changed_entity_is_updated_with_updated_side() {
    let current = model(vec![vav("g1").into()]);
    let mut renamed = vav("g1");
    renamed.code = "VAV-101".to_string();
    let updated = model(vec![renamed.into()]);

    let operations = determine_entity_operations(&current, &updated).unwrap();

    assert_eq!(operations.len(), 1);
    assert_eq!(operations[0].operation(), EntityOperationType::Update);
    assert!(operations[0]
        .update_mask()
        .contains(EntityUpdateMaskAttribute::Code));
    assert_eq!(
        operations[0].entity().as_reporting().map(|e| e.code.as_str()),
        Some("VAV-101")
    );
}

#[test]
fn test_removed_connection_yields_no_operation() {
    let current = model(vec![floor("f1")
        .with_connection(Connection::new("zone-9", ConnectionType::HasPart))
        .into()]);
    let updated = model(vec![floor("f1").into()]);

    assert!(determine_entity_operations(&current, &updated)
        .unwrap()
        .is_empty());
}

#[test]
fn test_entities_only_in_current_are_never_deleted() {
    let current = model(vec![vav("g1").into(), vav("g2").into()]);
    let updated = model(vec![vav("g1").into()]);

    let operations = determine_entity_operations(&current, &updated).unwrap();
    assert!(operations.is_empty());
}

#[test]
fn test_operations_follow_updated_model_order() {
    let current = model(vec![vav("a").into(), vav("b").into()]);
    let mut b = vav("b");
    b.type_name = "HVAC/VAV_SD_CSP".to_string();
    let updated = model(vec![vav("c").into(), b.into(), vav("a").into(), vav("d").into()]);

    let guids: Vec<_> = determine_entity_operations(&current, &updated)
        .unwrap()
        .iter()
        .map(|op| op.bc_guid().to_string())
        .collect();
    assert_eq!(guids, vec!["c", "b", "d"]);
}

#[test]
fn test_variant_conflict_fails_whole_comparison() {
    let current = model(vec![vav("g0").into(), floor("g1").into()]);
    let updated = model(vec![vav("g-new").into(), vav("g1").into()]);

    let err = determine_entity_operations(&current, &updated).unwrap_err();

    assert_eq!(
        err,
        AbelError::VariantConflict {
            bc_guid: "g1".to_string(),
            current_kind: EntityKind::Virtual,
            updated_kind: EntityKind::Reporting,
        }
    );
    let ex_err: ExError = err.into();
    assert_eq!(ex_err.kind(), ExErrorKind::VariantConflict);
    assert_eq!(ex_err.entity_id(), Some("g1"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let current = model(vec![]);
    let updated = model(vec![vav("g1").into()]);
    let config = DiffConfig::default().with_link_similarity_threshold(1.5);

    let err = determine_entity_operations_with_config(&current, &updated, &config).unwrap_err();
    assert!(matches!(err, AbelError::InvalidConfig { .. }));
}

#[test]
fn test_empty_models() {
    let operations = determine_entity_operations(&Model::default(), &Model::default()).unwrap();
    assert!(operations.is_empty());
}

#[test]
fn test_links_change_produces_update() {
    let current = model(vec![zone("z1", "g1", &["L1", "L2", "L3"]).into()]);
    let updated = model(vec![zone("z1", "g1", &["L1", "L2", "L4"]).into()]);

    let operations = determine_entity_operations(&current, &updated).unwrap();
    assert_eq!(operations.len(), 1);
    assert_eq!(
        operations[0].update_mask().iter().collect::<Vec<_>>(),
        vec![EntityUpdateMaskAttribute::Links]
    );
}
