//! Core types for the intersection simulation
//!
//! These are standalone types that don't depend on Bevy.

use std::fmt;

/// Width and height of the simulated screen area, in pixels
pub const WINDOW_SIZE: i32 = 500;

/// Side length of a vehicle's bounding box, in pixels
pub const VEHICLE_SIZE: i32 = 20;

/// Pixels a vehicle advances per tick unless configured otherwise
pub const DEFAULT_SPEED: i32 = 2;

/// Externally assigned vehicle identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VehicleId(pub i32);

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the four approaches to the intersection
///
/// A is the north approach, B south, C east and D west.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Road {
    A,
    B,
    C,
    D,
}

impl Road {
    pub const ALL: [Road; 4] = [Road::A, Road::B, Road::C, Road::D];

    pub fn from_symbol(symbol: char) -> Option<Road> {
        match symbol {
            'A' => Some(Road::A),
            'B' => Some(Road::B),
            'C' => Some(Road::C),
            'D' => Some(Road::D),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Road::A => 'A',
            Road::B => 'B',
            Road::C => 'C',
            Road::D => 'D',
        }
    }

    /// The screen axis vehicles on this road travel along
    pub fn axis(self) -> Axis {
        match self {
            Road::A | Road::B => Axis::Vertical,
            Road::C | Road::D => Axis::Horizontal,
        }
    }

    /// The road 90° clockwise in the cycle A → C → B → D → A
    pub fn clockwise(self) -> Road {
        match self {
            Road::A => Road::C,
            Road::C => Road::B,
            Road::B => Road::D,
            Road::D => Road::A,
        }
    }

    pub fn opposite(self) -> Road {
        match self {
            Road::A => Road::B,
            Road::B => Road::A,
            Road::C => Road::D,
            Road::D => Road::C,
        }
    }
}

impl fmt::Display for Road {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A lane of a road
///
/// Lane 1 receives right turns, lane 3 starts them, and lane 2 is the
/// shared through/left channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lane {
    One,
    Two,
    Three,
}

impl Lane {
    pub const ALL: [Lane; 3] = [Lane::One, Lane::Two, Lane::Three];

    pub fn from_number(number: i32) -> Option<Lane> {
        match number {
            1 => Some(Lane::One),
            2 => Some(Lane::Two),
            3 => Some(Lane::Three),
            _ => None,
        }
    }

    pub fn number(self) -> i32 {
        match self {
            Lane::One => 1,
            Lane::Two => 2,
            Lane::Three => 3,
        }
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Which half of a road's lane a point belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Half {
    /// Travelling towards the intersection
    Inbound,
    /// Travelling away from the intersection
    Outbound,
}

/// A screen axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl Axis {
    pub fn other(self) -> Axis {
        match self {
            Axis::Vertical => Axis::Horizontal,
            Axis::Horizontal => Axis::Vertical,
        }
    }
}

/// A screen-space position: the top-left corner of a vehicle's bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate along `axis` (y for vertical, x for horizontal)
    pub fn coord(self, axis: Axis) -> i32 {
        match axis {
            Axis::Vertical => self.y,
            Axis::Horizontal => self.x,
        }
    }

    pub fn with_coord(self, axis: Axis, value: i32) -> Point {
        match axis {
            Axis::Vertical => Point::new(self.x, value),
            Axis::Horizontal => Point::new(value, self.y),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Bounding box dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::new(VEHICLE_SIZE, VEHICLE_SIZE)
    }
}

/// A validated arrival record from the vehicle feed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VehicleRecord {
    pub id: VehicleId,
    pub road: Road,
    pub lane: Lane,
}

impl VehicleRecord {
    pub fn new(id: i32, road: Road, lane: Lane) -> Self {
        Self {
            id: VehicleId(id),
            road,
            lane,
        }
    }
}
