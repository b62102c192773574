//! Simulation loop: admission, tick ordering, compaction and shutdown

use std::time::{Duration, Instant};

use intersection_sim::simulation::geometry::{entry_anchor, exit_anchor, stop_line};
use intersection_sim::simulation::{
    Enqueue, Lane, Orientation, Phase, Point, Renderer, Road, SimConfig, TargetPolicy,
    TrafficLight, Vehicle, VehicleId, VehicleRecord, VehicleState, World,
};

fn config(capacity: usize) -> SimConfig {
    SimConfig {
        capacity,
        light_dwell: Duration::from_secs(5),
        seed: Some(11),
        ..SimConfig::default()
    }
}

/// A vehicle whose route is forbidden, so it stays in the active set
fn idler(id: i32) -> Vehicle {
    Vehicle::new(VehicleId(id), Road::A, Lane::One, Road::B, Lane::Two)
}

fn active_ids(world: &World) -> Vec<i32> {
    world.active().iter().map(|v| v.id.0).collect()
}

#[test]
fn test_drain_stops_at_active_capacity() {
    let now = Instant::now();
    let mut world = World::new(config(2), now);

    assert_eq!(world.admit(idler(1)), Enqueue::Accepted);
    assert_eq!(world.admit(idler(2)), Enqueue::Accepted);
    assert_eq!(world.admit(idler(3)), Enqueue::Dropped(VehicleId(3)));
    world.tick(now);
    assert_eq!(active_ids(&world), vec![1, 2]);
    assert!(world.queue().is_empty());

    let _ = world.admit(idler(4));
    let _ = world.admit(idler(5));
    world.tick(now);
    assert_eq!(active_ids(&world), vec![1, 2]);
    assert_eq!(world.queue().len(), 2);

    let stats = world.stats();
    assert_eq!(stats.arrivals, 5);
    assert_eq!(stats.dropped, 1);
    assert_eq!(stats.admitted, 2);
}

#[test]
fn test_completed_vehicles_are_removed_in_order() {
    let now = Instant::now();
    let mut world = World::new(config(10), now);

    let _ = world.admit(idler(1));
    let _ = world
        .admit(Vehicle::new(VehicleId(2), Road::D, Lane::Three, Road::A, Lane::One).with_speed(500));
    let _ = world.admit(idler(3));

    // First tick covers the horizontal leg, second the vertical leg
    world.tick(now);
    assert_eq!(active_ids(&world), vec![1, 2, 3]);
    world.tick(now);
    assert_eq!(active_ids(&world), vec![1, 3]);
    assert_eq!(world.stats().completed, 1);
}

#[test]
fn test_scenario_a_through_the_world() {
    let start = Instant::now();
    let dwell = Duration::from_secs(5);
    let light = TrafficLight::with_phase(Phase::EwGreen, dwell, start);
    let mut world = World::with_light(config(10), light);

    let _ = world.arrive(VehicleRecord::new(7, Road::A, Lane::Two));
    for _ in 0..150 {
        world.tick(start);
    }
    let vehicle = &world.active()[0];
    assert_eq!(vehicle.position.y, stop_line(Road::A).coordinate);
    assert_eq!(vehicle.state, VehicleState::StoppedAtLight);
    assert_eq!(vehicle.target_road(), Road::B);

    let green = start + dwell + Duration::from_millis(1);
    let mut ticks = 0;
    while !world.active().is_empty() && ticks < 1000 {
        world.tick(green);
        ticks += 1;
        if let Some(vehicle) = world.active().first() {
            assert!(vehicle.position.y <= exit_anchor(Road::B, Lane::Two).y);
        }
    }
    assert_eq!(world.phase(), Phase::NsGreen);
    assert!(world.active().is_empty());
    assert_eq!(world.stats().completed, 1);
    assert!(world.stats().stopped_ticks > 0);
}

#[test]
fn test_light_advances_before_vehicles_move() {
    let start = Instant::now();
    let dwell = Duration::from_secs(1);
    let light = TrafficLight::with_phase(Phase::EwGreen, dwell, start);
    let mut world = World::with_light(config(4), light);

    let at_line = Point::new(entry_anchor(Road::A, Lane::Two).x, stop_line(Road::A).coordinate);
    let _ = world.admit(
        Vehicle::new(VehicleId(1), Road::A, Lane::Two, Road::B, Lane::Two).with_position(at_line),
    );

    // Admitted on the same tick the light turns NS green: it must not stop
    world.tick(start + Duration::from_secs(2));
    let vehicle = &world.active()[0];
    assert_eq!(world.phase(), Phase::NsGreen);
    assert_eq!(vehicle.state, VehicleState::EnRoute);
    assert!(vehicle.position.y > at_line.y);
}

#[test]
fn test_canonical_policy_targets() {
    let now = Instant::now();
    let mut world = World::new(config(10), now);

    let _ = world.arrive(VehicleRecord::new(1, Road::A, Lane::Three));
    let _ = world.arrive(VehicleRecord::new(2, Road::C, Lane::Two));
    let _ = world.arrive(VehicleRecord::new(3, Road::D, Lane::One));
    world.tick(now);

    let targets: Vec<(Road, Lane)> = world
        .active()
        .iter()
        .map(|v| (v.target_road(), v.target_lane()))
        .collect();
    assert_eq!(
        targets,
        vec![(Road::C, Lane::One), (Road::D, Lane::Two), (Road::C, Lane::Two)]
    );
    assert!(world.active()[0].has_legal_route());
    assert!(world.active()[1].has_legal_route());
    assert!(!world.active()[2].has_legal_route());
}

#[test]
fn test_random_policy_only_picks_legal_lane_two_targets() {
    let now = Instant::now();
    let mut world = World::new(
        SimConfig {
            policy: TargetPolicy::Random,
            ..config(100)
        },
        now,
    );
    for id in 0..40 {
        let _ = world.arrive(VehicleRecord::new(id, Road::B, Lane::Two));
    }
    world.tick(now);

    for vehicle in world.active() {
        assert!(vehicle.has_legal_route());
        assert!(matches!(vehicle.target_road(), Road::A | Road::D));
        assert_eq!(vehicle.target_lane(), Lane::Two);
    }
}

#[test]
fn test_can_progress_is_false_with_only_idlers() {
    let now = Instant::now();
    let mut world = World::new(config(4), now);
    assert!(!world.can_progress());

    let _ = world.admit(idler(1));
    assert!(world.can_progress());
    world.tick(now);
    assert!(!world.can_progress());
}

#[test]
fn test_frame_reports_vehicles_and_phase() {
    let now = Instant::now();
    let mut world = World::new(config(4), now);
    let _ = world.arrive(VehicleRecord::new(1, Road::A, Lane::Two));
    let _ = world.arrive(VehicleRecord::new(2, Road::C, Lane::Three));
    world.tick(now);

    let frame = world.frame();
    assert_eq!(frame.tick, 1);
    assert_eq!(frame.phase, Phase::NsGreen);
    assert_eq!(frame.queued, 0);
    let ids: Vec<i32> = frame.vehicles.iter().map(|v| v.id.0).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(frame.vehicles[0].orientation, Orientation::Vertical);
    assert_eq!(frame.vehicles[1].orientation, Orientation::Horizontal);
    assert_eq!(frame.vehicles[0].size, world.config().vehicle_size);
}

#[test]
fn test_renderer_receives_each_frame() {
    struct Recording(Vec<u64>);
    impl Renderer for Recording {
        fn render(&mut self, frame: &intersection_sim::simulation::Frame) {
            self.0.push(frame.tick);
        }
    }

    let now = Instant::now();
    let mut world = World::new(config(4), now);
    let mut renderer = Recording(Vec::new());
    for _ in 0..3 {
        world.tick(now);
        renderer.render(&world.frame());
    }
    assert_eq!(renderer.0, vec![1, 2, 3]);
}

#[test]
fn test_shutdown_releases_everything() {
    let now = Instant::now();
    let mut world = World::new(config(2), now);
    let _ = world.admit(idler(1));
    let _ = world.admit(idler(2));
    world.tick(now);
    let _ = world.admit(idler(3));

    assert_eq!(world.release_all(), 3);
    assert!(world.active().is_empty());
    assert!(world.queue().is_empty());

    let _ = world.admit(idler(4));
    let stats = world.shutdown();
    assert_eq!(stats.arrivals, 4);
    assert_eq!(stats.admitted, 2);
}
