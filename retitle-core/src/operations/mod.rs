//! High-level operations that correspond to CLI modes
//!
//! These modules wire the pure planner to the filesystem listing, the audit
//! file and the mover, separated from CLI concerns like argument parsing and
//! output formatting.

pub mod apply;
pub mod plan;

pub use apply::apply_operation;
pub use plan::plan_operation;
