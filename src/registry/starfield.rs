use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;

use crate::math::Aabb;
use crate::starfield::field::Starfield;
use crate::starfield::template::{StarTemplate, StarTemplateDef};

use super::assets::StarfieldConfigAsset;

/// Which update path drives the starfield.
///
/// The two are mutually exclusive: combining them double-applies star
/// displacement every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum DriveMode {
    /// Advance the field every frame with the configured direction and
    /// velocity; the camera stays unbound.
    Drift,
    /// Scroll the field in response to camera moves.
    FollowCamera,
}

/// Starfield parameters promoted from the RON asset.
#[derive(Resource, Debug, Clone)]
pub struct StarfieldSettings {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub layers: u32,
    pub stars: usize,
    pub seed: u64,
    pub mode: DriveMode,
    pub direction_angle: f32,
    pub velocity: f32,
    pub camera_ratio: f32,
    pub drift_angle: f32,
    pub drift_speed: f32,
    pub palette: Option<Vec<StarTemplateDef>>,
}

impl StarfieldSettings {
    pub fn from_asset(asset: &StarfieldConfigAsset) -> Self {
        Self {
            x: asset.x,
            y: asset.y,
            width: asset.width,
            height: asset.height,
            layers: asset.layers,
            stars: asset.stars,
            seed: asset.seed,
            mode: asset.mode,
            direction_angle: asset.direction_angle,
            velocity: asset.velocity,
            camera_ratio: asset.camera_ratio,
            drift_angle: asset.drift_angle,
            drift_speed: asset.drift_speed,
            palette: asset.palette.clone(),
        }
    }

    pub fn extents(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }

    pub fn direction(&self) -> Vec2 {
        Vec2::from_angle(self.direction_angle)
    }

    fn templates(&self) -> Option<Vec<StarTemplate>> {
        self.palette
            .as_ref()
            .map(|defs| defs.iter().map(StarTemplate::from).collect())
    }

    /// Generate the field from the configured seed and apply the knobs.
    pub fn build_field(&self) -> Starfield {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut field = Starfield::generate(
            self.extents(),
            self.layers,
            self.stars,
            self.templates(),
            &mut rng,
        );
        field.direction = self.direction();
        field.velocity = self.velocity;
        field.camera_ratio = self.camera_ratio;
        field
    }
}
