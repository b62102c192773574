//! Vehicle state and per-tick movement
//!
//! Standalone implementation that doesn't depend on Bevy.

use log::warn;
use std::fmt;

use super::geometry;
use super::routing;
use super::traffic_light::Phase;
use super::types::{Axis, Lane, Point, Road, Size, VehicleId, DEFAULT_SPEED};

/// Lifecycle of a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleState {
    Queued,
    EnRoute,
    StoppedAtLight,
    /// Requested route is not allowed; the vehicle idles in place
    AwaitingPath,
    Completed,
}

impl fmt::Display for VehicleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            VehicleState::Queued => "queued",
            VehicleState::EnRoute => "en route",
            VehicleState::StoppedAtLight => "stopped at light",
            VehicleState::AwaitingPath => "awaiting path",
            VehicleState::Completed => "completed",
        };
        f.write_str(label)
    }
}

/// Result of advancing a vehicle by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionOutcome {
    /// Route forbidden, nothing moved
    Idle,
    /// Held at the stop line by a red light
    Stopped,
    Moved,
    /// Reached the target anchor this tick
    Arrived,
}

/// A vehicle in the intersection simulation
#[derive(Debug, Clone)]
pub struct Vehicle {
    pub id: VehicleId,
    pub road: Road,
    pub lane: Lane,
    pub position: Point,
    pub speed: i32,
    pub size: Size,
    pub state: VehicleState,
    target_road: Road,
    target_lane: Lane,
    /// Set once the vehicle passes its stop line on green
    cleared_stop_line: bool,
}

impl Vehicle {
    /// A queued vehicle at the entry anchor of `road`/`lane`
    pub fn new(id: VehicleId, road: Road, lane: Lane, target_road: Road, target_lane: Lane) -> Self {
        Self {
            id,
            road,
            lane,
            position: geometry::entry_anchor(road, lane),
            speed: DEFAULT_SPEED,
            size: Size::default(),
            state: VehicleState::Queued,
            target_road,
            target_lane,
            cleared_stop_line: false,
        }
    }

    pub fn with_speed(mut self, speed: i32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    pub fn target_road(&self) -> Road {
        self.target_road
    }

    pub fn target_lane(&self) -> Lane {
        self.target_lane
    }

    pub fn target_anchor(&self) -> Point {
        geometry::exit_anchor(self.target_road, self.target_lane)
    }

    pub fn has_arrived(&self) -> bool {
        self.position == self.target_anchor()
    }

    /// Whether the route from the current lane to the target is allowed
    pub fn has_legal_route(&self) -> bool {
        routing::is_permitted(self.road, self.lane, self.target_road, self.target_lane)
    }

    /// The axis the vehicle moves along on its next step
    pub fn travel_axis(&self) -> Axis {
        if self.has_arrived() || !self.has_legal_route() {
            return self.road.axis();
        }
        let first = routing::first_axis(self.road, self.target_road);
        if self.position.coord(first) != self.target_anchor().coord(first) {
            first
        } else {
            first.other()
        }
    }

    /// Advance one tick: permission gate, stop line, then movement
    pub fn advance(&mut self, phase: Phase) -> MotionOutcome {
        // Completed is terminal; road and lane already name the target
        if self.state == VehicleState::Completed {
            return MotionOutcome::Idle;
        }

        if !self.has_legal_route() {
            if self.state != VehicleState::AwaitingPath {
                warn!(
                    "Vehicle {} on Road {} Lane {} has no legal path to Road {} Lane {}; waiting in place",
                    self.id, self.road, self.lane, self.target_road, self.target_lane
                );
            }
            self.state = VehicleState::AwaitingPath;
            return MotionOutcome::Idle;
        }

        if self.lane == Lane::Two && !self.cleared_stop_line {
            let line = geometry::stop_line(self.road);
            if line.reached(self.position) {
                if phase.is_green_for(self.road) {
                    self.cleared_stop_line = true;
                } else {
                    self.position = line.clamp(self.position);
                    self.state = VehicleState::StoppedAtLight;
                    return MotionOutcome::Stopped;
                }
            }
        }

        let target = self.target_anchor();
        let axis = self.travel_axis();
        let next = step_toward(self.position.coord(axis), target.coord(axis), self.speed);
        self.position = self.position.with_coord(axis, next);

        if self.position == target {
            // Crossed the intersection: now a vehicle of the target lane
            self.road = self.target_road;
            self.lane = self.target_lane;
            self.state = VehicleState::Completed;
            return MotionOutcome::Arrived;
        }

        self.state = VehicleState::EnRoute;
        MotionOutcome::Moved
    }
}

/// Move `current` towards `target` by at most `speed`, never overshooting
pub fn step_toward(current: i32, target: i32, speed: i32) -> i32 {
    let distance = target - current;
    if distance.abs() <= speed {
        target
    } else {
        current + speed * distance.signum()
    }
}
