//! Two-phase traffic light for the intersection

use log::debug;
use std::fmt;
use std::time::{Duration, Instant};

use super::types::Road;

/// Default time a phase stays green before flipping
pub const DEFAULT_DWELL: Duration = Duration::from_secs(5);

/// Which pair of approaches currently has right of way
///
/// Exactly one phase holds at a time, so North-South and East-West green are
/// complements of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    NsGreen,
    EwGreen,
}

impl Phase {
    pub fn flipped(self) -> Phase {
        match self {
            Phase::NsGreen => Phase::EwGreen,
            Phase::EwGreen => Phase::NsGreen,
        }
    }

    pub fn ns_green(self) -> bool {
        self == Phase::NsGreen
    }

    pub fn ew_green(self) -> bool {
        self == Phase::EwGreen
    }

    /// A and B follow the North-South phase, C and D the East-West phase
    pub fn is_green_for(self, road: Road) -> bool {
        match road {
            Road::A | Road::B => self.ns_green(),
            Road::C | Road::D => self.ew_green(),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::NsGreen => write!(f, "NS green"),
            Phase::EwGreen => write!(f, "EW green"),
        }
    }
}

/// Fixed-dwell phase controller
///
/// Time is passed in by the caller so the simulation loop owns the clock.
#[derive(Debug, Clone)]
pub struct TrafficLight {
    phase: Phase,
    last_switch: Instant,
    dwell: Duration,
}

impl TrafficLight {
    /// Start North-South green at `now`
    pub fn new(dwell: Duration, now: Instant) -> Self {
        Self::with_phase(Phase::NsGreen, dwell, now)
    }

    pub fn with_phase(phase: Phase, dwell: Duration, now: Instant) -> Self {
        Self {
            phase,
            last_switch: now,
            dwell,
        }
    }

    /// Flip the phase if more than the dwell time has passed since the last
    /// switch. Returns true when the phase changed.
    pub fn advance(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_switch) <= self.dwell {
            return false;
        }
        self.phase = self.phase.flipped();
        self.last_switch = now;
        debug!("Traffic light switched to {}", self.phase);
        true
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn dwell(&self) -> Duration {
        self.dwell
    }

    pub fn last_switch(&self) -> Instant {
        self.last_switch
    }

    pub fn is_green_for(&self, road: Road) -> bool {
        self.phase.is_green_for(road)
    }
}
