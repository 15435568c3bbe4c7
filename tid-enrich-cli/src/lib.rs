//! Fill partner station lists with terminal IDs from a MID/TID registry

pub mod enrich;

pub use enrich::{ReconcileError, ReconcileOptions, ReconcileOutcome, reconcile, reconcile_with};
