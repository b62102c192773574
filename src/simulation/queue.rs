//! Bounded ingestion queue for vehicles waiting to enter the simulation

use log::{debug, trace, warn};

use super::types::VehicleId;
use super::vehicle::Vehicle;

/// Default number of vehicles the queue and the active set can hold
pub const DEFAULT_CAPACITY: usize = 100;

/// Outcome of offering a vehicle to the queue
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enqueue {
    Accepted,
    /// The queue was full; the vehicle was released
    Dropped(VehicleId),
}

/// Fixed-capacity FIFO ring buffer
///
/// Arrivals beyond capacity are dropped rather than blocking the producer
/// or growing the buffer.
#[derive(Debug)]
pub struct IngestionQueue {
    slots: Vec<Option<Vehicle>>,
    head: usize,
    len: usize,
}

impl IngestionQueue {
    pub fn new(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots,
            head: 0,
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len >= self.slots.len()
    }

    pub fn enqueue(&mut self, vehicle: Vehicle) -> Enqueue {
        if self.is_full() {
            warn!("Queue is full! Cannot enqueue vehicle {}", vehicle.id);
            return Enqueue::Dropped(vehicle.id);
        }
        let tail = (self.head + self.len) % self.slots.len();
        debug!(
            "Enqueued vehicle {} on Road {} Lane {}",
            vehicle.id, vehicle.road, vehicle.lane
        );
        self.slots[tail] = Some(vehicle);
        self.len += 1;
        Enqueue::Accepted
    }

    /// Oldest queued vehicle, or `None` when nothing is waiting
    pub fn dequeue(&mut self) -> Option<Vehicle> {
        if self.is_empty() {
            trace!("Queue is empty");
            return None;
        }
        let vehicle = self.slots[self.head].take();
        self.head = (self.head + 1) % self.slots.len();
        self.len -= 1;
        vehicle
    }

    pub fn peek(&self) -> Option<&Vehicle> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.head].as_ref()
    }

    /// Iterate queued vehicles from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &Vehicle> + '_ {
        let capacity = self.slots.len();
        (0..self.len).filter_map(move |offset| self.slots[(self.head + offset) % capacity].as_ref())
    }

    /// Remove every queued vehicle, oldest first
    pub fn drain(&mut self) -> Vec<Vehicle> {
        let mut drained = Vec::with_capacity(self.len);
        while let Some(vehicle) = self.dequeue() {
            drained.push(vehicle);
        }
        drained
    }
}
