//! World setup systems for camera, lighting, roads and signal lamps

use bevy::prelude::*;

use super::components::{MainCamera, SignalLamp};
use super::to_world;
use crate::simulation::geometry::{INTERSECTION_MAX, INTERSECTION_MIN};
use crate::simulation::{Phase, Point, WINDOW_SIZE};

const ROAD_COLOR: Color = Color::srgb(0.25, 0.25, 0.28);
const LAMP_RED: Color = Color::srgb(0.9, 0.1, 0.1);

/// System to setup the scene (ground, roads, lamps, lighting, camera)
pub fn setup_world(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let extent = WINDOW_SIZE as f32 * super::PIXEL_SCALE;
    let road_width = (INTERSECTION_MAX - INTERSECTION_MIN) as f32 * super::PIXEL_SCALE;

    // Top-down camera; screen y grows downwards, so "up" is -Z
    commands.spawn((
        MainCamera,
        Camera3d::default(),
        Transform::from_xyz(0.0, 65.0, 0.0).looking_at(Vec3::ZERO, Vec3::NEG_Z),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 8.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(extent, extent))),
        MeshMaterial3d(materials.add(Color::srgb(0.3, 0.5, 0.3))),
    ));

    // North-south and east-west road slabs
    for (width, length) in [(road_width, extent), (extent, road_width)] {
        commands.spawn((
            Mesh3d(meshes.add(Cuboid::new(width, 0.05, length))),
            MeshMaterial3d(materials.add(ROAD_COLOR)),
            Transform::from_xyz(0.0, 0.025, 0.0),
        ));
    }

    // One lamp at each corner of the intersection box, paired by phase
    let near = INTERSECTION_MIN - 20;
    let far = INTERSECTION_MAX;
    let lamps = [
        (Point::new(near, near), Phase::NsGreen),
        (Point::new(far, far), Phase::NsGreen),
        (Point::new(far, near), Phase::EwGreen),
        (Point::new(near, far), Phase::EwGreen),
    ];
    for (corner, phase) in lamps {
        let position = to_world(corner, 0.6);
        commands.spawn((
            SignalLamp(phase),
            Mesh3d(meshes.add(Sphere::new(0.8))),
            MeshMaterial3d(materials.add(LAMP_RED)),
            Transform::from_translation(position),
        ));
    }
}
