mod camera;
mod math;
mod registry;
mod sets;
mod starfield;
#[cfg(test)]
mod test_helpers;
mod ui;

use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use sets::GameSet;

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(ImagePlugin::default_nearest())
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Starfield".into(),
                        resolution: (1280, 720).into(),
                        ..default()
                    }),
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin::default())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(registry::RegistryPlugin)
        .add_plugins(camera::CameraPlugin)
        .add_plugins(starfield::StarfieldPlugin)
        .add_plugins(ui::UiPlugin)
        .configure_sets(
            Update,
            (GameSet::Camera, GameSet::Starfield, GameSet::Ui).chain(),
        )
        .run();
}
