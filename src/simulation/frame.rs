//! What the simulation hands to a renderer each tick

use super::traffic_light::Phase;
use super::types::{Axis, Point, Size, VehicleId};
use super::vehicle::{Vehicle, VehicleState};

/// Direction a vehicle is drawn in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

impl From<Axis> for Orientation {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::Vertical => Orientation::Vertical,
            Axis::Horizontal => Orientation::Horizontal,
        }
    }
}

/// Read-only view of one active vehicle
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleSnapshot {
    pub id: VehicleId,
    pub position: Point,
    pub size: Size,
    pub orientation: Orientation,
    pub state: VehicleState,
}

impl From<&Vehicle> for VehicleSnapshot {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            id: vehicle.id,
            position: vehicle.position,
            size: vehicle.size,
            orientation: vehicle.travel_axis().into(),
            state: vehicle.state,
        }
    }
}

/// Everything a renderer needs for one tick
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub tick: u64,
    pub phase: Phase,
    /// Active vehicles in active-set order
    pub vehicles: Vec<VehicleSnapshot>,
    pub queued: usize,
}

/// Consumer of simulation frames
///
/// Renderers never mutate the simulation.
pub trait Renderer {
    fn render(&mut self, frame: &Frame);
}
