use bevy::prelude::*;
use serde::Deserialize;

/// Visual template a star is stamped from. Every generated star copies the
/// template's color and size, so instances never share state with the
/// palette entry.
#[derive(Debug, Clone)]
pub struct StarTemplate {
    pub color: Color,
    pub size: Vec2,
}

/// Palette entry as written in starfield.config.ron.
#[derive(Debug, Clone, Deserialize)]
pub struct StarTemplateDef {
    pub color: (f32, f32, f32),
    pub size: (f32, f32),
}

impl From<&StarTemplateDef> for StarTemplate {
    fn from(def: &StarTemplateDef) -> Self {
        Self {
            color: Color::srgb(def.color.0, def.color.1, def.color.2),
            size: Vec2::new(def.size.0, def.size.1),
        }
    }
}

/// Built-in five-entry palette used when the config supplies none: small
/// white, large white, cyan, light gray and red point sprites.
pub fn default_templates() -> Vec<StarTemplate> {
    vec![
        StarTemplate {
            color: Color::WHITE,
            size: Vec2::splat(1.0),
        },
        StarTemplate {
            color: Color::WHITE,
            size: Vec2::splat(1.5),
        },
        StarTemplate {
            color: Color::srgb(0.0, 1.0, 1.0),
            size: Vec2::splat(2.0),
        },
        StarTemplate {
            color: Color::srgb(0.67, 0.67, 0.67),
            size: Vec2::splat(1.0),
        },
        StarTemplate {
            color: Color::srgb(1.0, 0.0, 0.0),
            size: Vec2::splat(1.0),
        },
    ]
}
