//! UI module that visualizes the simulation state using Bevy
//!
//! This module is purely for visualization - all simulation logic is in the `simulation` module.
//! The UI reads frames from `World` and renders them with Bevy's 3D graphics.

mod components;
mod input;
mod sync;
mod world;

use bevy::prelude::*;

pub use components::{EntityMappings, FeedResource, SimWorldResource, VehicleLink};

use crate::simulation::{Point, VEHICLE_SIZE, WINDOW_SIZE};
use input::handle_input;
pub use sync::{sync_vehicles, vehicle_color};
use sync::{tick_simulation, update_signal_lamps};
use world::setup_world;

/// World units per screen pixel
pub const PIXEL_SCALE: f32 = 0.1;

/// Centre of a vehicle-sized box at `point`, in world space
pub fn to_world(point: Point, height: f32) -> Vec3 {
    let half_window = WINDOW_SIZE as f32 / 2.0;
    let half_vehicle = VEHICLE_SIZE as f32 / 2.0;
    Vec3::new(
        (point.x as f32 + half_vehicle - half_window) * PIXEL_SCALE,
        height / 2.0,
        (point.y as f32 + half_vehicle - half_window) * PIXEL_SCALE,
    )
}

/// Plugin to register all UI systems
///
/// Expects [`SimWorldResource`] and [`FeedResource`] to be inserted by the
/// caller, and the fixed timestep set to the tick period.
pub struct IntersectionUiPlugin;

impl Plugin for IntersectionUiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EntityMappings>()
            .add_systems(Startup, setup_world)
            .add_systems(FixedUpdate, tick_simulation)
            .add_systems(
                Update,
                (sync_vehicles, update_signal_lamps, handle_input),
            );
    }
}
