//! Wire format of a feed record
//!
//! Each record is 12 little-endian bytes:
//!
//! | bytes | field                 |
//! |-------|-----------------------|
//! | 0..4  | vehicle id (`i32`)    |
//! | 4     | road symbol (ASCII)   |
//! | 5..8  | padding, ignored      |
//! | 8..12 | lane (`i32`)          |

use super::{FeedError, FeedResult};
use crate::simulation::{Lane, Road, VehicleId, VehicleRecord};

pub const RECORD_LEN: usize = 12;

pub fn encode(record: &VehicleRecord) -> [u8; RECORD_LEN] {
    let mut frame = [0u8; RECORD_LEN];
    frame[0..4].copy_from_slice(&record.id.0.to_le_bytes());
    frame[4] = record.road.symbol() as u8;
    frame[8..12].copy_from_slice(&record.lane.number().to_le_bytes());
    frame
}

pub fn decode(frame: &[u8; RECORD_LEN]) -> FeedResult<VehicleRecord> {
    let id = i32::from_le_bytes([frame[0], frame[1], frame[2], frame[3]]);
    let symbol = frame[4] as char;
    let lane_number = i32::from_le_bytes([frame[8], frame[9], frame[10], frame[11]]);

    let road = Road::from_symbol(symbol).ok_or(FeedError::InvalidRoad { id, symbol })?;
    let lane = Lane::from_number(lane_number).ok_or(FeedError::InvalidLane {
        id,
        lane: lane_number,
    })?;

    Ok(VehicleRecord {
        id: VehicleId(id),
        road,
        lane,
    })
}
