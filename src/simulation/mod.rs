//! Standalone intersection simulation module
//!
//! This module contains the core simulation logic: lane geometry, the
//! traffic light, the ingestion queue, vehicle routing and movement, and the
//! tick loop. It runs independently of the Bevy game engine and can be
//! tested from the console.

mod config;
mod frame;
pub mod geometry;
mod queue;
pub mod routing;
mod stats;
mod traffic_light;
mod types;
mod vehicle;
mod world;

pub use config::{SimConfig, DEFAULT_TICK_PERIOD};
pub use frame::{Frame, Orientation, Renderer, VehicleSnapshot};
pub use queue::{Enqueue, IngestionQueue, DEFAULT_CAPACITY};
pub use routing::TargetPolicy;
pub use stats::SimStats;
pub use traffic_light::{Phase, TrafficLight, DEFAULT_DWELL};
pub use types::{
    Axis, Half, Lane, Point, Road, Size, VehicleId, VehicleRecord, DEFAULT_SPEED, VEHICLE_SIZE,
    WINDOW_SIZE,
};
pub use vehicle::{step_toward, MotionOutcome, Vehicle, VehicleState};
pub use world::World;
