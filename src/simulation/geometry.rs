//! Lane geometry for the intersection
//!
//! Pure lookup from (road, lane) to the screen-space anchor a vehicle in
//! that lane occupies at the edge of the window, plus the stop line of each
//! approach. Nothing here depends on time.

use super::types::{Axis, Half, Lane, Point, Road, VEHICLE_SIZE, WINDOW_SIZE};

/// Lateral position of the lane-2 corridor before it is split into halves
pub const LANE_TWO_CENTER: i32 = 240;

/// Lateral offset of each half of lane 2 from its centre
pub const LANE_TWO_OFFSET: i32 = 12;

/// Lateral position of the lane nearer the low-coordinate side of the road
pub const LOW_SIDE_LANE: i32 = 190;

/// Lateral position of the lane nearer the high-coordinate side of the road
pub const HIGH_SIDE_LANE: i32 = 290;

/// Top/left edge of the intersection box
pub const INTERSECTION_MIN: i32 = 150;

/// Bottom/right edge of the intersection box
pub const INTERSECTION_MAX: i32 = 350;

const FAR_EDGE: i32 = WINDOW_SIZE - VEHICLE_SIZE;

/// Anchor of a lane half at the window edge of its road
pub fn anchor(road: Road, lane: Lane, half: Half) -> Point {
    let lateral = lateral_position(road, lane, half);
    let edge = window_edge(road);
    match road.axis() {
        Axis::Vertical => Point::new(lateral, edge),
        Axis::Horizontal => Point::new(edge, lateral),
    }
}

/// Where a vehicle arriving on `road`/`lane` is placed
pub fn entry_anchor(road: Road, lane: Lane) -> Point {
    anchor(road, lane, Half::Inbound)
}

/// Where a vehicle leaving on `road`/`lane` finishes
pub fn exit_anchor(road: Road, lane: Lane) -> Point {
    anchor(road, lane, Half::Outbound)
}

fn window_edge(road: Road) -> i32 {
    match road {
        Road::A | Road::D => 0,
        Road::B | Road::C => FAR_EDGE,
    }
}

fn lateral_position(road: Road, lane: Lane, half: Half) -> i32 {
    match (road, lane) {
        (_, Lane::Two) => LANE_TWO_CENTER + lane_two_sign(road, half) * LANE_TWO_OFFSET,
        (Road::A, Lane::One) | (Road::B, Lane::Three) => LOW_SIDE_LANE,
        (Road::A, Lane::Three) | (Road::B, Lane::One) => HIGH_SIDE_LANE,
        (Road::C, Lane::One) | (Road::D, Lane::Three) => LOW_SIDE_LANE,
        (Road::C, Lane::Three) | (Road::D, Lane::One) => HIGH_SIDE_LANE,
    }
}

// Inbound traffic on A and C runs on the high-coordinate half of lane 2,
// inbound traffic on B and D on the low half.
fn lane_two_sign(road: Road, half: Half) -> i32 {
    let inbound = match road {
        Road::A | Road::C => 1,
        Road::B | Road::D => -1,
    };
    match half {
        Half::Inbound => inbound,
        Half::Outbound => -inbound,
    }
}

/// The line an approaching lane-2 vehicle must not pass on red
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopLine {
    pub axis: Axis,
    pub coordinate: i32,
    /// +1 when approaching traffic moves towards higher coordinates
    pub direction: i32,
}

impl StopLine {
    /// Whether `position` is at or beyond the line in the travel direction
    pub fn reached(&self, position: Point) -> bool {
        let coord = position.coord(self.axis);
        if self.direction > 0 {
            coord >= self.coordinate
        } else {
            coord <= self.coordinate
        }
    }

    pub fn clamp(&self, position: Point) -> Point {
        position.with_coord(self.axis, self.coordinate)
    }
}

pub fn stop_line(road: Road) -> StopLine {
    let (coordinate, direction) = match road {
        Road::A | Road::D => (INTERSECTION_MIN - VEHICLE_SIZE, 1),
        Road::B | Road::C => (INTERSECTION_MAX, -1),
    };
    StopLine {
        axis: road.axis(),
        coordinate,
        direction,
    }
}
