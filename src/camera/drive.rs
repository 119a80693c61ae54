use bevy::prelude::*;

use crate::registry::starfield::StarfieldSettings;

use super::interactive::InteractiveCamera;

/// Keyboard pan speed in world units per second.
const PAN_SPEED: f32 = 120.0;

/// Move the camera by the configured automatic drift plus WASD/arrow
/// panning, writing through [`InteractiveCamera::set_position`] so
/// registered responders see every move.
pub fn drive_camera(
    time: Res<Time>,
    keys: Res<ButtonInput<KeyCode>>,
    settings: Res<StarfieldSettings>,
    mut query: Query<(&mut InteractiveCamera, &mut Transform)>,
) {
    let Ok((mut camera, mut transform)) = query.single_mut() else {
        return;
    };
    let dt = time.delta_secs();

    let mut delta = Vec2::from_angle(settings.drift_angle) * settings.drift_speed * dt;
    if keys.pressed(KeyCode::KeyA) || keys.pressed(KeyCode::ArrowLeft) {
        delta.x -= PAN_SPEED * dt;
    }
    if keys.pressed(KeyCode::KeyD) || keys.pressed(KeyCode::ArrowRight) {
        delta.x += PAN_SPEED * dt;
    }
    if keys.pressed(KeyCode::KeyS) || keys.pressed(KeyCode::ArrowDown) {
        delta.y -= PAN_SPEED * dt;
    }
    if keys.pressed(KeyCode::KeyW) || keys.pressed(KeyCode::ArrowUp) {
        delta.y += PAN_SPEED * dt;
    }

    if delta == Vec2::ZERO {
        return;
    }

    let new = camera.position() + delta;
    camera.set_position(new);
    transform.translation.x = new.x;
    transform.translation.y = new.y;
}
