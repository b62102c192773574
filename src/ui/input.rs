//! Input handling systems

use bevy::prelude::*;

use super::components::SimWorldResource;

/// Escape releases every vehicle and exits
pub fn handle_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut sim_world: ResMut<SimWorldResource>,
    mut exit: MessageWriter<AppExit>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        sim_world.0.release_all();
        exit.write(AppExit::Success);
    }
}
