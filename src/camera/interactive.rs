use bevy::prelude::*;

/// Callback invoked with `(old, new)` on every camera position write.
pub type PositionResponder = Box<dyn FnMut(Vec2, Vec2) + Send + Sync + 'static>;

/// Camera component that broadcasts its position changes.
///
/// Responders are append-only and fire synchronously in registration
/// order, once per discrete write; nothing is batched or coalesced across
/// a frame. `enable_interaction` only gates the dispatch; the position is
/// stored either way.
#[derive(Component)]
pub struct InteractiveCamera {
    position: Vec2,
    pub enable_interaction: bool,
    responders: Vec<PositionResponder>,
}

impl Default for InteractiveCamera {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            enable_interaction: true,
            responders: Vec::new(),
        }
    }
}

impl InteractiveCamera {
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Store the new position and notify every responder.
    pub fn set_position(&mut self, new: Vec2) {
        let old = self.position;
        self.position = new;

        if self.enable_interaction {
            for responder in &mut self.responders {
                responder(old, new);
            }
        }
    }

    pub fn add_position_responder(
        &mut self,
        responder: impl FnMut(Vec2, Vec2) + Send + Sync + 'static,
    ) {
        self.responders.push(Box::new(responder));
    }

    pub fn responder_count(&self) -> usize {
        self.responders.len()
    }
}
