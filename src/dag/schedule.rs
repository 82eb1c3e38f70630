// src/dag/schedule.rs

use crate::dag::critical_path::{CriticalPath, critical_path};
use crate::dag::hazard::{Hazard, detect_hazards};
use crate::dag::task::TaskDefinition;
use crate::dag::waves::{Wave, compute_waves};
use crate::errors::Result;

/// Full planning result for one task set: hazards, waves and critical path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub hazards: Vec<Hazard>,
    pub waves: Vec<Wave>,
    pub critical_path: CriticalPath,
}

impl Schedule {
    pub fn task_count(&self) -> usize {
        self.waves.iter().map(Vec::len).sum()
    }

    /// Average number of tasks per wave; 0.0 for an empty schedule.
    pub fn parallelism(&self) -> f64 {
        if self.waves.is_empty() {
            return 0.0;
        }
        self.task_count() as f64 / self.waves.len() as f64
    }
}

/// Run hazard detection, wave planning and critical-path analysis in one go.
pub fn plan_schedule(tasks: &[TaskDefinition]) -> Result<Schedule> {
    let hazards = detect_hazards(tasks);
    let waves = compute_waves(tasks, &hazards)?;
    let critical_path = critical_path(tasks, &hazards)?;

    Ok(Schedule {
        hazards,
        waves,
        critical_path,
    })
}
