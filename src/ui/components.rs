//! UI components and resources for linking Bevy entities to simulation state

use bevy::prelude::*;
use std::collections::HashMap;

use crate::feed::VehicleFeed;
use crate::simulation::{Phase, VehicleId, World};

/// Resource wrapper for the simulation world
#[derive(Resource)]
pub struct SimWorldResource(pub World);

/// Resource holding the vehicle feed; `None` once it has failed
#[derive(Resource)]
pub struct FeedResource(pub Option<Box<dyn VehicleFeed>>);

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Marker for entities synced from simulation
#[derive(Component)]
pub struct SimSynced;

/// Links a Bevy entity to a simulation vehicle
#[derive(Component)]
pub struct VehicleLink(pub VehicleId);

/// A signal lamp that shows green while its phase holds
#[derive(Component)]
pub struct SignalLamp(pub Phase);

/// Resource to track Bevy entities mapped to simulation vehicles
#[derive(Resource, Default)]
pub struct EntityMappings {
    pub vehicles: HashMap<VehicleId, Entity>,
}
