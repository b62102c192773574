//! Vehicle feed: where new arrivals come from
//!
//! A feed is polled once per tick and never blocks. It either yields the
//! records that arrived since the last poll (possibly none) or a
//! [`FeedError`], after which the caller stops polling it.

mod random;
mod record;
mod stream;

use thiserror::Error;

use crate::simulation::VehicleRecord;

pub use random::{random_record, RandomFeed};
pub use record::{decode, encode, RECORD_LEN};
pub use stream::{StreamFeed, TcpFeed};

/// Default port the generator listens on
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("vehicle feed disconnected")]
    Disconnected,

    #[error("vehicle feed read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("vehicle {id} has unknown road {symbol:?}")]
    InvalidRoad { id: i32, symbol: char },

    #[error("vehicle {id} has lane {lane}, expected 1..=3")]
    InvalidLane { id: i32, lane: i32 },
}

pub type FeedResult<T> = Result<T, FeedError>;

/// A non-blocking source of arriving vehicles
pub trait VehicleFeed: Send + Sync {
    /// Records that arrived since the last poll
    fn poll(&mut self) -> FeedResult<Vec<VehicleRecord>>;
}
