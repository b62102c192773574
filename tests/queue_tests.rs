//! Ingestion queue behaviour

use proptest::prelude::*;
use std::collections::VecDeque;

use intersection_sim::simulation::{
    Enqueue, IngestionQueue, Lane, Point, Road, Vehicle, VehicleId, VehicleState,
};

fn vehicle(id: i32) -> Vehicle {
    Vehicle::new(VehicleId(id), Road::A, Lane::Two, Road::B, Lane::Two)
}

fn drain_ids(queue: &mut IngestionQueue) -> Vec<i32> {
    std::iter::from_fn(|| queue.dequeue()).map(|v| v.id.0).collect()
}

#[test]
fn test_new_queue_is_empty() {
    let mut queue = IngestionQueue::new(4);
    assert!(queue.is_empty());
    assert!(!queue.is_full());
    assert_eq!(queue.capacity(), 4);
    assert!(queue.dequeue().is_none());
    assert!(queue.peek().is_none());
}

#[test]
fn test_full_queue_drops_new_arrivals() {
    let mut queue = IngestionQueue::new(3);
    for id in 0..3 {
        assert_eq!(queue.enqueue(vehicle(id)), Enqueue::Accepted);
    }
    assert!(queue.is_full());
    assert_eq!(queue.enqueue(vehicle(3)), Enqueue::Dropped(VehicleId(3)));
    assert_eq!(queue.enqueue(vehicle(4)), Enqueue::Dropped(VehicleId(4)));

    assert_eq!(queue.len(), 3);
    assert_eq!(drain_ids(&mut queue), vec![0, 1, 2]);
}

#[test]
fn test_indices_wrap_around() {
    let mut queue = IngestionQueue::new(3);
    for id in 0..3 {
        let _ = queue.enqueue(vehicle(id));
    }
    assert_eq!(queue.dequeue().map(|v| v.id), Some(VehicleId(0)));
    assert_eq!(queue.dequeue().map(|v| v.id), Some(VehicleId(1)));
    let _ = queue.enqueue(vehicle(3));
    let _ = queue.enqueue(vehicle(4));

    assert_eq!(
        queue.iter().map(|v| v.id.0).collect::<Vec<_>>(),
        vec![2, 3, 4]
    );
    assert_eq!(drain_ids(&mut queue), vec![2, 3, 4]);
    assert!(queue.is_empty());
}

#[test]
fn test_enqueue_then_dequeue_returns_the_same_vehicle() {
    let mut queue = IngestionQueue::new(2);
    let mut original = vehicle(42).with_speed(9).with_position(Point::new(17, 23));
    original.state = VehicleState::EnRoute;
    let _ = queue.enqueue(original);

    let returned = queue.dequeue().expect("vehicle was queued");
    assert_eq!(returned.id, VehicleId(42));
    assert_eq!(returned.speed, 9);
    assert_eq!(returned.position, Point::new(17, 23));
    assert_eq!(returned.state, VehicleState::EnRoute);
}

#[test]
fn test_drain_empties_oldest_first() {
    let mut queue = IngestionQueue::new(5);
    for id in [5, 6, 7] {
        let _ = queue.enqueue(vehicle(id));
    }
    let drained: Vec<i32> = queue.drain().into_iter().map(|v| v.id.0).collect();
    assert_eq!(drained, vec![5, 6, 7]);
    assert!(queue.is_empty());
}

#[test]
fn test_zero_capacity_queue_drops_everything() {
    let mut queue = IngestionQueue::new(0);
    assert_eq!(queue.enqueue(vehicle(1)), Enqueue::Dropped(VehicleId(1)));
    assert!(queue.dequeue().is_none());
}

proptest! {
    #[test]
    fn dequeues_follow_enqueue_order(ids in prop::collection::vec(any::<i32>(), 0..=32)) {
        let mut queue = IngestionQueue::new(32);
        for &id in &ids {
            prop_assert_eq!(queue.enqueue(vehicle(id)), Enqueue::Accepted);
        }
        prop_assert_eq!(drain_ids(&mut queue), ids);
    }

    #[test]
    fn matches_a_bounded_fifo_model(
        capacity in 1usize..8,
        ops in prop::collection::vec(prop::option::of(0i32..1000), 0..64),
    ) {
        let mut queue = IngestionQueue::new(capacity);
        let mut model: VecDeque<i32> = VecDeque::new();

        for op in ops {
            match op {
                Some(id) => {
                    let outcome = queue.enqueue(vehicle(id));
                    if model.len() < capacity {
                        model.push_back(id);
                        prop_assert_eq!(outcome, Enqueue::Accepted);
                    } else {
                        prop_assert_eq!(outcome, Enqueue::Dropped(VehicleId(id)));
                    }
                }
                None => {
                    prop_assert_eq!(queue.dequeue().map(|v| v.id.0), model.pop_front());
                }
            }
            prop_assert!(queue.len() <= capacity);
            prop_assert_eq!(queue.len(), model.len());
        }

        prop_assert_eq!(drain_ids(&mut queue), model.into_iter().collect::<Vec<_>>());
    }
}
