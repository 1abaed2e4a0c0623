pub mod connection;
pub mod entity;
pub mod field_translation;
pub mod graph;
pub mod operation;

pub use connection::{Connection, ConnectionType};
pub use entity::{Entity, EntityAttributes, EntityKind, ReportingEntity, VirtualEntity};
pub use field_translation::FieldTranslation;
pub use graph::Model;
pub use operation::{EntityOperation, EntityOperationType, EntityUpdateMaskAttribute, UpdateMask};
