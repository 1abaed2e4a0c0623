//! ABEL Core - entity operation diff and reconciliation
//!
//! This crate provides the building-config entity model and the engine that
//! decides which operation applies to each entity:
//! - Entity graph model (virtual and reporting entities, field translations,
//!   connections) with guid-indexed snapshots
//! - Per-variant update mask calculation and link similarity scoring
//! - Operation diff between a current and an updated snapshot
//! - Reconciliation of generated operations against a manual operation list
//! - Structured error and logging facilities

pub mod config;
pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;

// Re-export commonly used types
pub use config::DiffConfig;
pub use diff::{compute_final_operations, determine_entity_operations, reconcile_operations};
pub use errors::{AbelError, ExError, ExErrorKind, Result};
pub use model::{Entity, EntityOperation, EntityOperationType, EntityUpdateMaskAttribute, Model};
