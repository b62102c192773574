//! In-process feed producing random arrivals

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use super::{FeedResult, VehicleFeed};
use crate::simulation::{Lane, Road, VehicleRecord};

/// Upper bound (exclusive) of generated vehicle ids
pub const MAX_VEHICLE_ID: i32 = 10_000;

/// A random record: id in `0..10000`, any road, any lane
pub fn random_record<R: Rng + ?Sized>(rng: &mut R) -> VehicleRecord {
    let id = rng.random_range(0..MAX_VEHICLE_ID);
    let road = *Road::ALL.choose(rng).unwrap_or(&Road::A);
    let lane = *Lane::ALL.choose(rng).unwrap_or(&Lane::Two);
    VehicleRecord::new(id, road, lane)
}

/// Emits one random record every `every` polls
pub struct RandomFeed {
    rng: StdRng,
    every: u32,
    polls: u32,
}

impl RandomFeed {
    pub fn new(every: u32, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self {
            rng,
            every: every.max(1),
            polls: 0,
        }
    }
}

impl VehicleFeed for RandomFeed {
    fn poll(&mut self) -> FeedResult<Vec<VehicleRecord>> {
        self.polls += 1;
        if self.polls < self.every {
            return Ok(Vec::new());
        }
        self.polls = 0;
        Ok(vec![random_record(&mut self.rng)])
    }
}
