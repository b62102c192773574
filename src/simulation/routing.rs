//! Turn permissions, movement order and destination policy

use clap::ValueEnum;
use rand::Rng;

use super::types::{Axis, Lane, Road};

/// Whether a vehicle on `origin`/`origin_lane` may travel to
/// `target`/`target_lane`.
///
/// Lane 1 only receives right turns from lane 3 of the road counter-clockwise
/// of it. Lane 2 only connects to lane 2 of the opposite road or of the
/// clockwise neighbour. Everything else is forbidden.
pub fn is_permitted(origin: Road, origin_lane: Lane, target: Road, target_lane: Lane) -> bool {
    match (origin_lane, target_lane) {
        (Lane::Three, Lane::One) => target == origin.clockwise(),
        (Lane::Two, Lane::Two) => target == origin.opposite() || target == origin.clockwise(),
        _ => false,
    }
}

/// Axis a vehicle moves along first when crossing from `origin` to `target`
pub fn first_axis(origin: Road, target: Road) -> Axis {
    match (origin, target) {
        (Road::A, Road::C) | (Road::B, Road::D) => Axis::Vertical,
        _ => Axis::Horizontal,
    }
}

/// Every legal destination for a vehicle starting on `road`/`lane`
pub fn legal_targets(road: Road, lane: Lane) -> Vec<(Road, Lane)> {
    Road::ALL
        .iter()
        .flat_map(|&target| Lane::ALL.iter().map(move |&target_lane| (target, target_lane)))
        .filter(|&(target, target_lane)| is_permitted(road, lane, target, target_lane))
        .collect()
}

/// How an arriving vehicle's destination is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TargetPolicy {
    /// Lane 3 turns right, lane 2 goes straight across
    #[default]
    Canonical,
    /// Lane 3 turns right, lane 2 picks straight or left at random
    Random,
}

impl TargetPolicy {
    /// Destination for a vehicle arriving on `road`/`lane`
    ///
    /// Lane 1 is exit-only, so arrivals there get lane 2 of the opposite road,
    /// a route the permission gate never opens.
    pub fn assign<R: Rng + ?Sized>(self, road: Road, lane: Lane, rng: &mut R) -> (Road, Lane) {
        match (self, lane) {
            (_, Lane::Three) => (road.clockwise(), Lane::One),
            (TargetPolicy::Random, Lane::Two) => {
                if rng.random_range(0..2) == 0 {
                    (road.opposite(), Lane::Two)
                } else {
                    (road.clockwise(), Lane::Two)
                }
            }
            (TargetPolicy::Canonical, Lane::Two) | (_, Lane::One) => (road.opposite(), Lane::Two),
        }
    }
}
