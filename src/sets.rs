use bevy::prelude::*;

/// Top-level system ordering sets for the frame loop.
///
/// Configured as a chain: Camera → Starfield → Ui. Camera movement must
/// dispatch before the starfield consumes it, so star displacement always
/// reflects the current frame's camera delta.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameSet {
    Camera,
    Starfield,
    Ui,
}
