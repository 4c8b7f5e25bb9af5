//! Core domain: the gameplay freeze gate.

use bevy::prelude::*;
use std::collections::HashSet;

/// Named reasons gameplay is frozen. Control, physics and animation run
/// only while no source is held; a door transition is one such source.
#[derive(Resource, Debug, Default)]
pub struct GameplayPaused {
    pub sources: HashSet<String>,
}

impl GameplayPaused {
    pub fn is_paused(&self) -> bool {
        !self.sources.is_empty()
    }

    pub fn is_paused_by(&self, source: &str) -> bool {
        self.sources.contains(source)
    }

    pub fn pause(&mut self, source: impl Into<String>) {
        self.sources.insert(source.into());
    }

    pub fn unpause(&mut self, source: &str) {
        self.sources.remove(source);
    }

    /// Hold or release `source` to match `active`.
    pub fn set(&mut self, source: &str, active: bool) {
        if active {
            self.pause(source);
        } else {
            self.unpause(source);
        }
    }
}

/// Run condition for systems that stop while gameplay is frozen.
pub fn gameplay_active(paused: Res<GameplayPaused>) -> bool {
    !paused.is_paused()
}
