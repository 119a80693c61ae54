pub mod fixtures {
    use bevy::prelude::*;

    use crate::registry::starfield::{DriveMode, StarfieldSettings};
    use crate::starfield::advance::CameraMoves;
    use crate::starfield::field::Starfield;

    pub fn test_settings() -> StarfieldSettings {
        StarfieldSettings {
            x: -400.0,
            y: -400.0,
            width: 800.0,
            height: 800.0,
            layers: 3,
            stars: 200,
            seed: 42,
            mode: DriveMode::FollowCamera,
            direction_angle: 0.0,
            velocity: 0.0,
            camera_ratio: 10.0,
            drift_angle: -std::f32::consts::PI / 5.0,
            drift_speed: 20.0,
            palette: None,
        }
    }

    pub fn test_field() -> Starfield {
        test_settings().build_field()
    }

    /// Create a minimal Bevy App with the starfield resources for system
    /// tests.
    pub fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(test_settings());
        app.insert_resource(test_field());
        app.init_resource::<CameraMoves>();
        app
    }
}
