pub mod assets;
pub mod hot_reload;
pub mod loader;
pub mod starfield;

use bevy::prelude::*;

use assets::StarfieldConfigAsset;
use loader::StarfieldConfigLoader;
use starfield::StarfieldSettings;

/// Application state: Loading waits for the config asset, InGame runs the
/// scene.
#[derive(States, Default, Debug, Clone, Eq, PartialEq, Hash)]
pub enum AppState {
    #[default]
    Loading,
    InGame,
}

/// Keeps the config handle alive for loading and hot-reload detection.
#[derive(Resource)]
pub struct RegistryHandles {
    pub starfield: Handle<StarfieldConfigAsset>,
}

pub struct RegistryPlugin;

impl Plugin for RegistryPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .init_asset::<StarfieldConfigAsset>()
            .register_asset_loader(StarfieldConfigLoader)
            .add_systems(Startup, start_loading)
            .add_systems(Update, check_loading.run_if(in_state(AppState::Loading)))
            .add_systems(
                Update,
                hot_reload::hot_reload_starfield.run_if(in_state(AppState::InGame)),
            );
    }
}

fn start_loading(mut commands: Commands, asset_server: Res<AssetServer>) {
    let starfield = asset_server.load::<StarfieldConfigAsset>("data/starfield.config.ron");
    commands.insert_resource(RegistryHandles { starfield });
}

fn check_loading(
    mut commands: Commands,
    handles: Res<RegistryHandles>,
    assets: Res<Assets<StarfieldConfigAsset>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Some(asset) = assets.get(&handles.starfield) else {
        return; // not loaded yet
    };

    commands.insert_resource(StarfieldSettings::from_asset(asset));
    next_state.set(AppState::InGame);
    info!("Starfield config loaded, entering InGame state");
}
