use bevy::prelude::*;

use crate::camera::interactive::InteractiveCamera;

use super::field::Starfield;

/// Marker tying a sprite entity to a star index in the field.
#[derive(Component)]
pub struct StarSprite(pub usize);

/// Spawn one sprite per star as a child of the camera entity, so the
/// whole field travels with the camera and only the parallax offset is
/// animated. Alpha is baked into the sprite color; the z translation
/// carries the stacking order.
pub fn spawn_sprites(commands: &mut Commands, camera: Entity, field: &Starfield) {
    commands.entity(camera).with_children(|parent| {
        for (index, star) in field.stars().iter().enumerate() {
            parent.spawn((
                StarSprite(index),
                Sprite {
                    color: star.color.with_alpha(star.alpha),
                    custom_size: Some(star.size),
                    ..default()
                },
                Transform::from_xyz(star.position.x, star.position.y, star.z_order),
            ));
        }
    });
}

pub fn spawn_star_sprites(
    mut commands: Commands,
    field: Res<Starfield>,
    camera: Query<Entity, With<InteractiveCamera>>,
) {
    let Ok(cam) = camera.single() else {
        warn!("No interactive camera to attach the starfield to");
        return;
    };
    spawn_sprites(&mut commands, cam, &field);
    info!("Spawned {} star sprites", field.stars().len());
}

/// Copy star positions into the sprite transforms.
pub fn sync_star_sprites(
    field: Res<Starfield>,
    mut query: Query<(&StarSprite, &mut Transform)>,
) {
    for (sprite, mut transform) in &mut query {
        let Some(star) = field.stars().get(sprite.0) else {
            continue;
        };
        transform.translation.x = star.position.x;
        transform.translation.y = star.position.y;
    }
}
