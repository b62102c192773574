//! Headless renderer that reports frames through the log

use log::info;

use crate::simulation::geometry::{INTERSECTION_MAX, INTERSECTION_MIN};
use crate::simulation::{Frame, Phase, Renderer, VehicleState, VEHICLE_SIZE, WINDOW_SIZE};

/// Logs a one-line summary every `report_every` frames and an ASCII map of
/// the intersection every `map_every` frames. Zero disables either.
#[derive(Debug, Default)]
pub struct LogRenderer {
    report_every: u64,
    map_every: u64,
}

impl LogRenderer {
    pub fn new(report_every: u64, map_every: u64) -> Self {
        Self {
            report_every,
            map_every,
        }
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, frame: &Frame) {
        if self.report_every > 0 && frame.tick % self.report_every == 0 {
            let stopped = frame
                .vehicles
                .iter()
                .filter(|v| v.state == VehicleState::StoppedAtLight)
                .count();
            info!(
                "--- Tick {} --- {}, {} active ({} stopped), {} queued",
                frame.tick,
                frame.phase,
                frame.vehicles.len(),
                stopped,
                frame.queued
            );
        }
        if self.map_every > 0 && frame.tick % self.map_every == 0 {
            info!("\n{}", draw_map(frame));
        }
    }
}

/// Draw the intersection as text, one character per vehicle-sized cell
///
/// Legend: `#` = road, `+` = intersection, `v` = moving vehicle,
/// `S` = stopped at light, `?` = awaiting a legal path, `G`/`R` = light
/// state for the approach it sits next to.
pub fn draw_map(frame: &Frame) -> String {
    let cells = (WINDOW_SIZE / VEHICLE_SIZE) as usize;
    let to_cell = |coord: i32| -> usize {
        ((coord.max(0) / VEHICLE_SIZE) as usize).min(cells - 1)
    };
    let low = to_cell(INTERSECTION_MIN);
    let high = to_cell(INTERSECTION_MAX - 1);

    let mut grid = vec![vec![' '; cells]; cells];
    for (row, line) in grid.iter_mut().enumerate() {
        for (col, cell) in line.iter_mut().enumerate() {
            let vertical_road = (low..=high).contains(&col);
            let horizontal_road = (low..=high).contains(&row);
            *cell = match (vertical_road, horizontal_road) {
                (true, true) => '+',
                (true, false) | (false, true) => '#',
                (false, false) => ' ',
            };
        }
    }

    let lamp = |green: bool| if green { 'G' } else { 'R' };
    let ns = lamp(frame.phase == Phase::NsGreen);
    let ew = lamp(frame.phase == Phase::EwGreen);
    if low > 0 && high + 1 < cells {
        grid[low - 1][low - 1] = ns;
        grid[high + 1][high + 1] = ns;
        grid[low - 1][high + 1] = ew;
        grid[high + 1][low - 1] = ew;
    }

    for vehicle in &frame.vehicles {
        let row = to_cell(vehicle.position.y);
        let col = to_cell(vehicle.position.x);
        grid[row][col] = match vehicle.state {
            VehicleState::StoppedAtLight => 'S',
            VehicleState::AwaitingPath => '?',
            _ => 'v',
        };
    }

    let mut map = String::from("=== Intersection Map ===\n");
    for row in &grid {
        map.extend(row.iter());
        map.push('\n');
    }
    map
}
