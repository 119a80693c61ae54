use bevy::prelude::*;

use crate::camera::interactive::InteractiveCamera;
use crate::starfield::field::Starfield;

#[derive(Component)]
pub struct DebugHudText;

pub fn spawn_debug_hud(mut commands: Commands) {
    commands.spawn((
        DebugHudText,
        Text::new("X: 0.0 Y: 0.0 (0 stars)"),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::srgba(1.0, 1.0, 1.0, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            top: Val::Px(10.0),
            ..default()
        },
    ));
}

pub fn update_debug_hud(
    camera_query: Query<&InteractiveCamera>,
    field: Res<Starfield>,
    mut text_query: Query<&mut Text, With<DebugHudText>>,
) {
    let Ok(camera) = camera_query.single() else {
        return;
    };
    let Ok(mut text) = text_query.single_mut() else {
        return;
    };

    let pos = camera.position();
    **text = format!(
        "X: {:.0} Y: {:.0} ({} stars)",
        pos.x,
        pos.y,
        field.stars().len()
    );
}
