//! Run statistics for the simulation

use log::info;

/// Counters accumulated over a simulation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimStats {
    pub ticks: u64,
    /// Records offered to the ingestion queue
    pub arrivals: u64,
    /// Records dropped because the queue was full
    pub dropped: u64,
    /// Vehicles moved from the queue into the active set
    pub admitted: u64,
    pub completed: u64,
    /// Vehicle-ticks spent idling on a forbidden route
    pub idle_ticks: u64,
    /// Vehicle-ticks spent held at a red light
    pub stopped_ticks: u64,
}

impl SimStats {
    /// Share of admitted vehicles that completed, in percent
    pub fn success_rate(&self) -> f32 {
        if self.admitted == 0 {
            return 0.0;
        }
        self.completed as f32 / self.admitted as f32 * 100.0
    }

    pub fn log_summary(&self, active: usize, queued: usize) {
        info!("=== SIMULATION COMPLETE ===");
        info!("Ticks: {}", self.ticks);
        info!("Total arrivals: {}", self.arrivals);
        info!("Total vehicles dropped: {}", self.dropped);
        info!("Total vehicles admitted: {}", self.admitted);
        info!("Total vehicles completed: {}", self.completed);
        info!("Active vehicles: {}", active);
        info!("Queued vehicles: {}", queued);
        info!("Ticks held at red: {}", self.stopped_ticks);
        info!("Ticks awaiting a legal path: {}", self.idle_ticks);
        info!("Success rate: {:.1}%", self.success_rate());
    }
}
