use clap::ValueEnum;
use serde::Serialize;

/// Scheduling algorithms offered by the service.
#[derive(ValueEnum, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// First come, first served
    Fcfs,
    /// Shortest job first
    Sjf,
    /// Shortest remaining time first
    Srtf,
    /// Priority, non-preemptive
    Psp,
    /// Priority, preemptive
    Pcpp,
    /// Round-robin
    Rr,
    /// Round-robin with priorities and aging
    Rrpe,
}

impl Algorithm {
    pub fn requires_aging(&self) -> bool {
        matches!(self, Algorithm::Rrpe)
    }
}

/// One process row of the submitted workload.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ProcessSpec {
    pub begin: i64,
    pub duration: i64,
    pub priority: i64,
}
