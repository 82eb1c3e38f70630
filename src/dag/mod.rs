// src/dag/mod.rs

//! Hazard analysis and scheduling.
//!
//! - [`task`] defines the task shape the analysis works on.
//! - [`hazard`] finds RAW/WAR/WAW/MUTEX conflicts between task pairs.
//! - [`graph`] turns tasks plus hazards into an ordering graph with cycle
//!   detection.
//! - [`waves`] levels that graph into parallel execution waves.
//! - [`critical_path`] finds the longest RAW chain.
//! - [`schedule`] bundles the three analyses for one task set.

pub mod critical_path;
pub mod graph;
pub mod hazard;
pub mod schedule;
pub mod task;
pub mod waves;

pub use critical_path::{CriticalPath, critical_path};
pub use graph::HazardGraph;
pub use hazard::{Hazard, HazardKind, conflicting_pairs, detect_hazards};
pub use schedule::{Schedule, plan_schedule};
pub use task::TaskDefinition;
pub use waves::{Wave, compute_waves, wave_index_of};
