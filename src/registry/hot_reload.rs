//! Hot-reload for the starfield config asset.

use bevy::asset::AssetEvent;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::camera::interactive::InteractiveCamera;
use crate::starfield::field::Starfield;
use crate::starfield::render::{self, StarSprite};

use super::RegistryHandles;
use super::assets::StarfieldConfigAsset;
use super::starfield::StarfieldSettings;

/// Rebuild the settings and the field, then respawn the star sprites.
pub(crate) fn hot_reload_starfield(
    mut commands: Commands,
    mut events: MessageReader<AssetEvent<StarfieldConfigAsset>>,
    handles: Res<RegistryHandles>,
    assets: Res<Assets<StarfieldConfigAsset>>,
    mut settings: ResMut<StarfieldSettings>,
    mut field: ResMut<Starfield>,
    sprites: Query<Entity, With<StarSprite>>,
    camera: Query<Entity, With<InteractiveCamera>>,
) {
    for event in events.read() {
        if let AssetEvent::Modified { id } = event
            && *id == handles.starfield.id()
            && let Some(asset) = assets.get(&handles.starfield)
        {
            *settings = StarfieldSettings::from_asset(asset);
            *field = settings.build_field();

            for entity in &sprites {
                commands.entity(entity).despawn();
            }
            if let Ok(cam) = camera.single() {
                render::spawn_sprites(&mut commands, cam, &field);
            }
            info!(
                "Hot-reloaded starfield config ({} stars, {} layers)",
                field.stars().len(),
                field.layers()
            );
        }
    }
}
