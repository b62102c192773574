//! Traffic light phase switching

use std::time::{Duration, Instant};

use intersection_sim::simulation::{Phase, Road, TrafficLight};

const DWELL: Duration = Duration::from_secs(5);
const STEP: Duration = Duration::from_millis(30);

#[test]
fn test_starts_north_south_green() {
    let light = TrafficLight::new(DWELL, Instant::now());
    assert_eq!(light.phase(), Phase::NsGreen);
    assert!(light.is_green_for(Road::A));
    assert!(light.is_green_for(Road::B));
    assert!(!light.is_green_for(Road::C));
    assert!(!light.is_green_for(Road::D));
}

#[test]
fn test_holds_until_dwell_is_exceeded() {
    let start = Instant::now();
    let mut light = TrafficLight::new(DWELL, start);

    assert!(!light.advance(start));
    assert!(!light.advance(start + DWELL));
    assert_eq!(light.phase(), Phase::NsGreen);

    assert!(light.advance(start + DWELL + Duration::from_millis(1)));
    assert_eq!(light.phase(), Phase::EwGreen);
}

#[test]
fn test_alternates_every_dwell_period() {
    let start = Instant::now();
    let mut light = TrafficLight::new(DWELL, start);
    let period = DWELL + Duration::from_millis(1);

    let mut now = start;
    let mut expected = Phase::NsGreen;
    for _ in 0..6 {
        now += period;
        assert!(light.advance(now));
        expected = expected.flipped();
        assert_eq!(light.phase(), expected);
        assert_eq!(light.last_switch(), now);
    }
}

#[test]
fn test_exactly_one_phase_is_green_at_every_tick() {
    let start = Instant::now();
    let mut light = TrafficLight::new(Duration::from_millis(200), start);
    let mut switches = 0;

    for tick in 1..=1000u32 {
        if light.advance(start + STEP * tick) {
            switches += 1;
        }
        let phase = light.phase();
        assert_ne!(phase.ns_green(), phase.ew_green());
        for (ns_road, ew_road) in [(Road::A, Road::C), (Road::B, Road::D)] {
            assert_ne!(light.is_green_for(ns_road), light.is_green_for(ew_road));
        }
    }
    // 30 s of ticks with a 0.2 s dwell switches once every 7 ticks
    assert_eq!(switches, 1000 / 7);
}

#[test]
fn test_with_phase_starts_on_requested_phase() {
    let start = Instant::now();
    let mut light = TrafficLight::with_phase(Phase::EwGreen, DWELL, start);
    assert_eq!(light.phase(), Phase::EwGreen);
    assert_eq!(light.dwell(), DWELL);

    light.advance(start + DWELL * 2);
    assert_eq!(light.phase(), Phase::NsGreen);
}

#[test]
fn test_clock_going_backwards_does_not_switch() {
    let start = Instant::now() + Duration::from_secs(60);
    let mut light = TrafficLight::new(DWELL, start);
    assert!(!light.advance(start - Duration::from_secs(30)));
    assert_eq!(light.phase(), Phase::NsGreen);
}
