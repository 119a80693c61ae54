pub mod advance;
pub mod field;
pub mod render;
pub mod template;

use bevy::prelude::*;

use crate::registry::AppState;
use crate::registry::starfield::{DriveMode, StarfieldSettings};
use crate::sets::GameSet;

use advance::CameraMoves;

pub struct StarfieldPlugin;

impl Plugin for StarfieldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraMoves>()
            .add_systems(
                OnEnter(AppState::InGame),
                (
                    advance::build_starfield,
                    render::spawn_star_sprites,
                    advance::bind_camera,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    advance::advance_starfield.run_if(drift_mode),
                    advance::follow_camera_moves.run_if(camera_mode),
                    advance::drain_camera_moves.run_if(drift_mode),
                    render::sync_star_sprites,
                )
                    .chain()
                    .in_set(GameSet::Starfield)
                    .run_if(in_state(AppState::InGame)),
            );
    }
}

fn drift_mode(settings: Res<StarfieldSettings>) -> bool {
    settings.mode == DriveMode::Drift
}

fn camera_mode(settings: Res<StarfieldSettings>) -> bool {
    settings.mode == DriveMode::FollowCamera
}
