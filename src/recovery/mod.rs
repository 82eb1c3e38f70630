// src/recovery/mod.rs

//! Failure recovery decisions.
//!
//! Given a failed task and a snapshot of which tasks have completed or are in
//! flight, [`derive_restart_strategy`] picks one of three outcomes. Nothing is
//! dispatched or retried here; acting on the decision is the orchestrator's job.

pub mod strategy;

pub use strategy::{FailedTask, RestartStrategy, RestartStrategyKind, derive_restart_strategy};
