//! Numeric plausibility bounds and shot-count reconciliation.
pub mod clamp;
pub mod reconcile;

pub use self::clamp::{clamp_stat, stat_bounds};
pub use self::reconcile::{reconcile, Reconciled, ShotReads};
