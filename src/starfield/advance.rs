use std::sync::{Arc, Mutex};

use bevy::prelude::*;

use crate::camera::interactive::InteractiveCamera;
use crate::registry::starfield::StarfieldSettings;

use super::field::Starfield;

/// Upper bound on the integration step, so a stalled frame cannot fling
/// stars far past the extents.
pub const MAX_DELTA_SECS: f32 = 0.1;

/// Mailbox between the camera position responder (closure land) and the
/// starfield systems (ECS land). The responder records every `(old, new)`
/// move; the consumer system drains them in order once per frame.
#[derive(Resource, Clone, Default)]
pub struct CameraMoves {
    queue: Arc<Mutex<Vec<(Vec2, Vec2)>>>,
}

impl CameraMoves {
    pub fn push(&self, old: Vec2, new: Vec2) {
        self.queue.lock().unwrap().push((old, new));
    }

    pub fn drain(&self) -> Vec<(Vec2, Vec2)> {
        std::mem::take(&mut *self.queue.lock().unwrap())
    }
}

/// Build the [`Starfield`] resource from the loaded settings.
pub fn build_starfield(mut commands: Commands, settings: Res<StarfieldSettings>) {
    let field = settings.build_field();
    info!(
        "Generated starfield: {} stars across {} layers",
        field.stars().len(),
        field.layers()
    );
    commands.insert_resource(field);
}

/// Register the mailbox as a camera position responder.
pub fn bind_camera(moves: Res<CameraMoves>, mut cameras: Query<&mut InteractiveCamera>) {
    let Ok(mut camera) = cameras.single_mut() else {
        warn!("No interactive camera to bind the starfield to");
        return;
    };
    let mailbox = (*moves).clone();
    camera.add_position_responder(move |old, new| mailbox.push(old, new));
}

/// Drift mode: integrate the field's direction and velocity over the
/// frame delta.
pub fn advance_starfield(time: Res<Time>, mut field: ResMut<Starfield>) {
    field.advance(time.delta_secs().min(MAX_DELTA_SECS));
}

/// Camera mode: apply every recorded camera move, in order, with no time
/// scaling.
pub fn follow_camera_moves(moves: Res<CameraMoves>, mut field: ResMut<Starfield>) {
    for (old, new) in moves.drain() {
        field.follow_camera(old, new);
    }
}

/// Responders are append-only, so the mailbox keeps filling even when the
/// field is not camera-driven; empty it without applying anything.
pub fn drain_camera_moves(moves: Res<CameraMoves>) {
    moves.drain();
}
