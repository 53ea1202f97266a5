use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Control symbols the host maps key-down/key-up events onto.
///
/// Reset is not a held symbol; it arrives as a one-shot
/// [`ResetEvent`](crate::resources::ResetEvent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlSymbol {
    Thrust,
    Left,
    Right,
    Forward,
    Back,
}

/// Set of currently-held control symbols.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<ControlSymbol>,
}

impl InputState {
    /// Idempotent: repeated presses of a held symbol are absorbed.
    pub fn press(&mut self, symbol: ControlSymbol) {
        self.held.insert(symbol);
    }

    /// Releasing a symbol that is not held is a no-op, not an error.
    pub fn release(&mut self, symbol: ControlSymbol) {
        self.held.remove(&symbol);
    }

    pub fn is_active(&self, symbol: ControlSymbol) -> bool {
        self.held.contains(&symbol)
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }
}
