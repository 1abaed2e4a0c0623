use serde::{Deserialize, Serialize};

use super::connection::Connection;
use super::field_translation::FieldTranslation;

/// Discriminant of the [`Entity`] union
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Virtual,
    Reporting,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Virtual => f.write_str("virtual"),
            EntityKind::Reporting => f.write_str("reporting"),
        }
    }
}

/// Attributes shared by every entity variant
///
/// The common update-mask checks (code, type, connections) are written
/// against this trait so both variants go through the same code path.
pub trait EntityAttributes {
    /// Stable building-config guid
    fn bc_guid(&self) -> &str;

    /// Human-readable entity code, e.g. `VAV-3`
    fn code(&self) -> &str;

    /// Ontology type name, e.g. `HVAC/VAV_SD_DSP`
    fn type_name(&self) -> &str;

    /// Connections held by this entity
    fn connections(&self) -> &[Connection];
}

/// VirtualEntity - an entity whose fields are computed from other entities' points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VirtualEntity {
    pub bc_guid: String,
    pub code: String,
    pub type_name: String,

    /// Ontology namespace (informational, never diffed)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(default)]
    pub connections: Vec<Connection>,

    /// Field links to reporting entities. Empty for facilities entities.
    #[serde(default)]
    pub links: Vec<FieldTranslation>,
}

impl VirtualEntity {
    pub fn new(
        bc_guid: impl Into<String>,
        code: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        Self {
            bc_guid: bc_guid.into(),
            code: code.into(),
            type_name: type_name.into(),
            namespace: None,
            connections: Vec::new(),
            links: Vec::new(),
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_connection(mut self, connection: Connection) -> Self {
        self.connections.push(connection);
        self
    }

    pub fn with_link(mut self, link: FieldTranslation) -> Self {
        self.links.push(link);
        self
    }
}

impl EntityAttributes for VirtualEntity {
    fn bc_guid(&self) -> &str {
        &self.bc_guid
    }

    fn code(&self) -> &str {
        &self.code
    }

    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn connections(&self) -> &[Connection] {
        &self.connections
    }
}

/// ReportingEntity - an entity backed by a physical device reporting points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportingEntity {
    pub bc_guid: String,
    pub code: String,
    pub type_name: String,

    /// Ontology namespace (informational, never diffed)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Numeric cloud device id, when the device is registered (never diffed)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_device_id: Option<String>,

    #[serde(default)]
    pub connections: Vec<Connection>,

    /// Point → field translations reported by the device
    #[serde(default)]
    pub translations: Vec<FieldTranslation>,
}

impl ReportingEntity {
    pub fn new(
        bc_guid: impl Into<String>,
        code: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        Self {
            bc_guid: bc_guid.into(),
            code: code.into(),
            type_name: type_name.into(),
            namespace: None,
            cloud_device_id: None,
            connections: Vec::new(),
            translations: Vec::new(),
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_cloud_device_id(mut self, cloud_device_id: impl Into<String>) -> Self {
        self.cloud_device_id = Some(cloud_device_id.into());
        self
    }

    pub fn with_connection(mut self, connection: Connection) -> Self {
        self.connections.push(connection);
        self
    }

    pub fn with_translation(mut self, translation: FieldTranslation) -> Self {
        self.translations.push(translation);
        self
    }
}

impl EntityAttributes for ReportingEntity {
    fn bc_guid(&self) -> &str {
        &self.bc_guid
    }

    fn code(&self) -> &str {
        &self.code
    }

    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn connections(&self) -> &[Connection] {
        &self.connections
    }
}

/// Entity - closed union of the two entity variants
///
/// Serialized with an internal `kind` tag (`virtual` / `reporting`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Entity {
    Virtual(VirtualEntity),
    Reporting(ReportingEntity),
}

impl Entity {
    /// Get the variant discriminant
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Virtual(_) => EntityKind::Virtual,
            Entity::Reporting(_) => EntityKind::Reporting,
        }
    }

    pub fn as_virtual(&self) -> Option<&VirtualEntity> {
        match self {
            Entity::Virtual(entity) => Some(entity),
            Entity::Reporting(_) => None,
        }
    }

    pub fn as_reporting(&self) -> Option<&ReportingEntity> {
        match self {
            Entity::Reporting(entity) => Some(entity),
            Entity::Virtual(_) => None,
        }
    }
}

impl EntityAttributes for Entity {
    fn bc_guid(&self) -> &str {
        match self {
            Entity::Virtual(e) => e.bc_guid(),
            Entity::Reporting(e) => e.bc_guid(),
        }
    }

    fn code(&self) -> &str {
        match self {
            Entity::Virtual(e) => e.code(),
            Entity::Reporting(e) => e.code(),
        }
    }

    fn type_name(&self) -> &str {
        match self {
            Entity::Virtual(e) => e.type_name(),
            Entity::Reporting(e) => e.type_name(),
        }
    }

    fn connections(&self) -> &[Connection] {
        match self {
            Entity::Virtual(e) => e.connections(),
            Entity::Reporting(e) => e.connections(),
        }
    }
}

impl From<VirtualEntity> for Entity {
    fn from(entity: VirtualEntity) -> Self {
        Entity::Virtual(entity)
    }
}

impl From<ReportingEntity> for Entity {
    fn from(entity: ReportingEntity) -> Self {
        Entity::Reporting(entity)
    }
}
