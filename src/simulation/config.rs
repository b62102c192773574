//! Process-start configuration for the simulation

use std::time::Duration;

use super::queue::DEFAULT_CAPACITY;
use super::routing::TargetPolicy;
use super::traffic_light::DEFAULT_DWELL;
use super::types::{Size, DEFAULT_SPEED};

/// Default wall-clock period between ticks
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(30);

/// Settings fixed for the lifetime of a [`World`](super::World)
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Capacity of both the ingestion queue and the active set
    pub capacity: usize,
    /// How long each light phase stays green
    pub light_dwell: Duration,
    /// Period of the external clock driving ticks
    pub tick_period: Duration,
    /// Pixels per tick for newly admitted vehicles
    pub speed: i32,
    pub vehicle_size: Size,
    pub policy: TargetPolicy,
    /// Seed for destination choice; unseeded runs use the thread RNG
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            light_dwell: DEFAULT_DWELL,
            tick_period: DEFAULT_TICK_PERIOD,
            speed: DEFAULT_SPEED,
            vehicle_size: Size::default(),
            policy: TargetPolicy::Canonical,
            seed: None,
        }
    }
}
