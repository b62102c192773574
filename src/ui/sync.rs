//! Systems for syncing Bevy entities with simulation state

use bevy::prelude::*;
use std::collections::HashSet;
use std::time::Instant;

use super::components::{
    EntityMappings, FeedResource, SignalLamp, SimSynced, SimWorldResource, VehicleLink,
};
use super::{to_world, PIXEL_SCALE};
use crate::simulation::{Enqueue, Frame, Orientation, VehicleId, VehicleState};

const VEHICLE_HEIGHT: f32 = 0.6;

/// System to poll the feed and run one simulation tick
pub fn tick_simulation(mut sim_world: ResMut<SimWorldResource>, mut feed: ResMut<FeedResource>) {
    let polled = feed.0.as_mut().map(|source| source.poll());
    match polled {
        Some(Ok(records)) => {
            for record in records {
                // Drops are logged and counted by the world
                if let Enqueue::Dropped(id) = sim_world.0.arrive(record) {
                    bevy::log::debug!("Vehicle {} dropped at the ingestion queue", id);
                }
            }
        }
        Some(Err(e)) => {
            bevy::log::error!("Vehicle feed lost: {}; no new vehicles will be admitted", e);
            feed.0 = None;
        }
        None => {}
    }
    sim_world.0.tick(Instant::now());
}

/// Colour a vehicle is drawn in for its current state
pub fn vehicle_color(state: VehicleState) -> Color {
    match state {
        VehicleState::StoppedAtLight => Color::srgb(0.9, 0.6, 0.1),
        VehicleState::AwaitingPath => Color::srgb(0.5, 0.5, 0.5),
        _ => Color::srgb(0.2, 0.4, 0.8),
    }
}

fn vehicle_rotation(orientation: Orientation) -> Quat {
    match orientation {
        Orientation::Vertical => Quat::IDENTITY,
        Orientation::Horizontal => Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
    }
}

/// System to sync vehicle visuals from the current frame
pub fn sync_vehicles(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    sim_world: Res<SimWorldResource>,
    mut mappings: ResMut<EntityMappings>,
    mut vehicle_query: Query<(
        Entity,
        &VehicleLink,
        &mut Transform,
        &MeshMaterial3d<StandardMaterial>,
    )>,
) {
    let frame: Frame = sim_world.0.frame();

    let mut existing: HashSet<VehicleId> = HashSet::new();
    for (entity, link, mut transform, material_handle) in vehicle_query.iter_mut() {
        if let Some(vehicle) = frame.vehicles.iter().find(|v| v.id == link.0) {
            existing.insert(link.0);
            transform.translation = to_world(vehicle.position, VEHICLE_HEIGHT);
            transform.rotation = vehicle_rotation(vehicle.orientation);
            if let Some(material) = materials.get_mut(&material_handle.0) {
                material.base_color = vehicle_color(vehicle.state);
            }
        } else {
            // Vehicle completed or was released, despawn
            commands.entity(entity).despawn();
            mappings.vehicles.remove(&link.0);
        }
    }

    for vehicle in &frame.vehicles {
        if existing.contains(&vehicle.id) {
            continue;
        }
        let width = vehicle.size.width as f32 * PIXEL_SCALE * 0.8;
        let length = vehicle.size.height as f32 * PIXEL_SCALE;
        let entity = commands
            .spawn((
                SimSynced,
                VehicleLink(vehicle.id),
                Mesh3d(meshes.add(Cuboid::new(width, VEHICLE_HEIGHT, length))),
                MeshMaterial3d(materials.add(vehicle_color(vehicle.state))),
                Transform::from_translation(to_world(vehicle.position, VEHICLE_HEIGHT))
                    .with_rotation(vehicle_rotation(vehicle.orientation)),
            ))
            .id();
        mappings.vehicles.insert(vehicle.id, entity);
    }
}

/// System to colour the signal lamps from the light phase
pub fn update_signal_lamps(
    sim_world: Res<SimWorldResource>,
    lamp_query: Query<(&SignalLamp, &MeshMaterial3d<StandardMaterial>)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let phase = sim_world.0.phase();
    for (lamp, material_handle) in lamp_query.iter() {
        if let Some(material) = materials.get_mut(&material_handle.0) {
            material.base_color = if lamp.0 == phase {
                Color::srgb(0.1, 0.9, 0.2)
            } else {
                Color::srgb(0.9, 0.1, 0.1)
            };
        }
    }
}
