use bevy::prelude::*;
use bevy::reflect::TypePath;
use serde::Deserialize;

use crate::starfield::template::StarTemplateDef;

use super::starfield::DriveMode;

fn default_camera_ratio() -> f32 {
    10.0
}

/// Asset loaded from starfield.config.ron
#[derive(Asset, TypePath, Debug, Deserialize)]
pub struct StarfieldConfigAsset {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub layers: u32,
    pub stars: usize,
    pub seed: u64,
    pub mode: DriveMode,
    #[serde(default)]
    pub direction_angle: f32,
    #[serde(default)]
    pub velocity: f32,
    #[serde(default = "default_camera_ratio")]
    pub camera_ratio: f32,
    #[serde(default)]
    pub drift_angle: f32,
    #[serde(default)]
    pub drift_speed: f32,
    #[serde(default)]
    pub palette: Option<Vec<StarTemplateDef>>,
}
