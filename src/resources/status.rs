use bevy::prelude::*;

/// Human-readable status line for the host's overlay UI.
#[derive(Resource, Debug, Clone, Default)]
pub struct StatusMessage {
    text: String,
}

impl StatusMessage {
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
