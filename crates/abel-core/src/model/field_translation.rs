use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// FieldTranslation - one mapping between a standard field and a device point
///
/// Used both for a reporting entity's translations (point → field) and for a
/// virtual entity's links (field ← another entity's field). Equality and
/// hashing are structural over every attribute, which is what all of the
/// set comparisons in the diff engine rely on.
///
/// Maps are `BTreeMap` so that the derived `Hash` is order-independent of
/// insertion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FieldTranslation {
    /// Standard (ontology) field name, e.g. `zone_air_temperature_sensor`
    pub std_field_name: String,

    /// Raw point name on the device
    #[serde(default)]
    pub raw_field_name: String,

    /// Source entity guid (links only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporting_entity_guid: Option<String>,

    /// Field name on the source entity (links only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporting_entity_field_name: Option<String>,

    /// Standard unit → raw unit
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub units: BTreeMap<String, String>,

    /// Standard state → raw state
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub states: BTreeMap<String, String>,

    /// Field is declared but intentionally left unmapped
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub missing: bool,
}

impl FieldTranslation {
    /// Create a point translation from a standard field to a raw point name
    pub fn new(std_field_name: impl Into<String>, raw_field_name: impl Into<String>) -> Self {
        Self {
            std_field_name: std_field_name.into(),
            raw_field_name: raw_field_name.into(),
            reporting_entity_guid: None,
            reporting_entity_field_name: None,
            units: BTreeMap::new(),
            states: BTreeMap::new(),
            missing: false,
        }
    }

    /// Create a link from a field on another (reporting) entity
    pub fn link(
        std_field_name: impl Into<String>,
        reporting_entity_guid: impl Into<String>,
        reporting_entity_field_name: impl Into<String>,
    ) -> Self {
        let mut translation = Self::new(std_field_name, String::new());
        translation.reporting_entity_guid = Some(reporting_entity_guid.into());
        translation.reporting_entity_field_name = Some(reporting_entity_field_name.into());
        translation
    }

    /// Create a placeholder for a field that has no point
    pub fn missing(std_field_name: impl Into<String>) -> Self {
        let mut translation = Self::new(std_field_name, String::new());
        translation.missing = true;
        translation
    }

    /// Add a standard → raw unit mapping
    pub fn with_unit(mut self, std_unit: impl Into<String>, raw_unit: impl Into<String>) -> Self {
        self.units.insert(std_unit.into(), raw_unit.into());
        self
    }

    /// Add a standard → raw state mapping
    pub fn with_state(
        mut self,
        std_state: impl Into<String>,
        raw_state: impl Into<String>,
    ) -> Self {
        self.states.insert(std_state.into(), raw_state.into());
        self
    }

    /// True when this translation sources its value from another entity
    pub fn is_link(&self) -> bool {
        self.reporting_entity_guid.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_structural_equality() {
        let a = FieldTranslation::new("zone_air_temperature_sensor", "points.zat.present_value")
            .with_unit("degrees_celsius", "degC");
        let b = FieldTranslation::new("zone_air_temperature_sensor", "points.zat.present_value")
            .with_unit("degrees_celsius", "degC");
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn test_unit_change_breaks_equality() {
        let a = FieldTranslation::new("zone_air_temperature_sensor", "zat")
            .with_unit("degrees_celsius", "degC");
        let b = FieldTranslation::new("zone_air_temperature_sensor", "zat")
            .with_unit("degrees_fahrenheit", "degF");
        assert_ne!(a, b);
    }

    #[test]
    fn test_link_and_missing_constructors() {
        let link = FieldTranslation::link("supply_air_flowrate_sensor", "guid-vav", "saf");
        assert!(link.is_link());
        assert!(!link.missing);

        let missing = FieldTranslation::missing("run_command");
        assert!(missing.missing);
        assert!(!missing.is_link());
        assert_ne!(missing, FieldTranslation::new("run_command", ""));
    }
}
