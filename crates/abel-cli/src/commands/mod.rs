pub mod common;
pub mod diff;
pub mod reconcile;
