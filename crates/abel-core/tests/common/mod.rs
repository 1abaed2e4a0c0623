use abel_core::model::{
    Connection, ConnectionType, Entity, EntityOperation, EntityUpdateMaskAttribute,
    FieldTranslation, Model, ReportingEntity, UpdateMask, VirtualEntity,
};

/// Build a model from entities, panicking on duplicate guids
#[allow(dead_code)]
pub fn model(entities: Vec<Entity>) -> Model {
    Model::new(entities).unwrap()
}

/// A reporting entity with code `VAV-<n>` and two point translations
#[allow(dead_code)]
pub fn vav(guid: &str) -> ReportingEntity {
    ReportingEntity::new(guid, format!("VAV-{guid}"), "HVAC/VAV_SD_DSP")
        .with_cloud_device_id("2617362172830195")
        .with_translation(
            FieldTranslation::new("zone_air_temperature_sensor", "ZN-T")
                .with_unit("degrees_celsius", "degC"),
        )
        .with_translation(FieldTranslation::new("supply_air_flowrate_sensor", "SA-FLOW"))
}

/// A virtual zone entity linked to fields on `source_guid`
#[allow(dead_code)]
pub fn zone(guid: &str, source_guid: &str, fields: &[&str]) -> VirtualEntity {
    fields.iter().fold(
        VirtualEntity::new(guid, format!("ZONE-{guid}"), "HVAC/ZONE"),
        |entity, field| entity.with_link(FieldTranslation::link(*field, source_guid, *field)),
    )
}

/// A facilities entity: virtual, no links
#[allow(dead_code)]
pub fn floor(guid: &str) -> VirtualEntity {
    VirtualEntity::new(guid, format!("FLOOR-{guid}"), "FACILITIES/FLOOR")
        .with_connection(Connection::new("building-1", ConnectionType::Contains))
}

/// UPDATE operation over `entity` with the given mask attributes
#[allow(dead_code)]
pub fn update_op(
    entity: impl Into<Entity>,
    attributes: &[EntityUpdateMaskAttribute],
) -> EntityOperation {
    let mask: UpdateMask = attributes.iter().copied().collect();
    EntityOperation::update(entity.into(), mask).unwrap()
}

/// Link descriptors named `L<n>` for property and scoring tests
#[allow(dead_code)]
pub fn links(names: &[&str]) -> Vec<FieldTranslation> {
    names
        .iter()
        .map(|name| FieldTranslation::link(*name, "vav-source", *name))
        .collect()
}
