//! Main simulation world that ties everything together
//!
//! This is the entry point for running the intersection simulation
//! without any Bevy dependencies.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

use super::config::SimConfig;
use super::frame::{Frame, VehicleSnapshot};
use super::queue::{Enqueue, IngestionQueue};
use super::stats::SimStats;
use super::traffic_light::{Phase, TrafficLight};
use super::types::VehicleRecord;
use super::vehicle::{MotionOutcome, Vehicle, VehicleState};

/// The intersection simulation
///
/// Owns the ingestion queue, the active set and the traffic light. One call
/// to [`World::tick`] runs one step of the loop:
///
/// 1. drain the queue into the active set, up to capacity
/// 2. advance the traffic light
/// 3. advance every active vehicle
/// 4. drop vehicles that reached their target, keeping the others in order
pub struct World {
    config: SimConfig,
    queue: IngestionQueue,
    active: Vec<Vehicle>,
    light: TrafficLight,
    /// Optional seeded RNG for reproducible destination choice
    rng: Option<StdRng>,
    stats: SimStats,
}

impl World {
    pub fn new(config: SimConfig, now: Instant) -> Self {
        let light = TrafficLight::new(config.light_dwell, now);
        Self::with_light(config, light)
    }

    /// Create a world around an existing light, e.g. one starting on EW green
    pub fn with_light(config: SimConfig, light: TrafficLight) -> Self {
        Self {
            queue: IngestionQueue::new(config.capacity),
            active: Vec::with_capacity(config.capacity),
            rng: config.seed.map(StdRng::seed_from_u64),
            stats: SimStats::default(),
            light,
            config,
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn active(&self) -> &[Vehicle] {
        &self.active
    }

    pub fn queue(&self) -> &IngestionQueue {
        &self.queue
    }

    pub fn light(&self) -> &TrafficLight {
        &self.light
    }

    pub fn phase(&self) -> Phase {
        self.light.phase()
    }

    pub fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Turn a feed record into a vehicle and offer it to the queue
    pub fn arrive(&mut self, record: VehicleRecord) -> Enqueue {
        let policy = self.config.policy;
        let (target_road, target_lane) = match &mut self.rng {
            Some(rng) => policy.assign(record.road, record.lane, rng),
            None => policy.assign(record.road, record.lane, &mut rand::rng()),
        };
        let vehicle = Vehicle::new(record.id, record.road, record.lane, target_road, target_lane)
            .with_speed(self.config.speed)
            .with_size(self.config.vehicle_size);
        self.admit(vehicle)
    }

    /// Offer an already built vehicle to the queue
    pub fn admit(&mut self, mut vehicle: Vehicle) -> Enqueue {
        self.stats.arrivals += 1;
        vehicle.state = VehicleState::Queued;
        let outcome = self.queue.enqueue(vehicle);
        if let Enqueue::Dropped(_) = outcome {
            self.stats.dropped += 1;
        }
        outcome
    }

    /// Run one simulation step at wall-clock time `now`
    pub fn tick(&mut self, now: Instant) {
        self.stats.ticks += 1;

        while self.active.len() < self.config.capacity {
            let Some(mut vehicle) = self.queue.dequeue() else {
                break;
            };
            vehicle.state = VehicleState::EnRoute;
            debug!(
                "Vehicle {} entered on Road {} Lane {} heading for Road {} Lane {}",
                vehicle.id,
                vehicle.road,
                vehicle.lane,
                vehicle.target_road(),
                vehicle.target_lane()
            );
            self.stats.admitted += 1;
            self.active.push(vehicle);
        }

        if self.light.advance(now) {
            info!("Light phase is now {}", self.light.phase());
        }

        let phase = self.light.phase();
        for vehicle in &mut self.active {
            match vehicle.advance(phase) {
                MotionOutcome::Idle => self.stats.idle_ticks += 1,
                MotionOutcome::Stopped => self.stats.stopped_ticks += 1,
                MotionOutcome::Moved | MotionOutcome::Arrived => {}
            }
        }

        let stats = &mut self.stats;
        self.active.retain(|vehicle| {
            if vehicle.has_arrived() {
                info!(
                    "Vehicle {} completed at Road {} Lane {}",
                    vehicle.id, vehicle.road, vehicle.lane
                );
                stats.completed += 1;
                false
            } else {
                true
            }
        });
    }

    /// Snapshot of the current state for a renderer
    pub fn frame(&self) -> Frame {
        Frame {
            tick: self.stats.ticks,
            phase: self.light.phase(),
            vehicles: self.active.iter().map(VehicleSnapshot::from).collect(),
            queued: self.queue.len(),
        }
    }

    /// Whether any vehicle can still move: something is queued or at least
    /// one active vehicle has a legal route
    pub fn can_progress(&self) -> bool {
        !self.queue.is_empty() || self.active.iter().any(Vehicle::has_legal_route)
    }

    /// Release every queued and active vehicle; returns how many were held
    pub fn release_all(&mut self) -> usize {
        let queued = self.queue.drain().len();
        let active = self.active.len();
        self.active.clear();
        info!(
            "Released {} queued and {} active vehicles",
            queued, active
        );
        queued + active
    }

    /// Stop the simulation, releasing everything it holds
    pub fn shutdown(mut self) -> SimStats {
        let active = self.active.len();
        let queued = self.queue.len();
        self.release_all();
        self.stats.log_summary(active, queued);
        self.stats
    }
}
