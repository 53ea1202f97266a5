use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Surface type carried by a collision-start event from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceTag {
    /// The ground slab around the tower
    Floor,
    /// The catch tower mast
    Tower,
    /// The catch arms at the top of the tower
    CatchArms,
    /// The booster's own collider, as reported back by some hosts
    Booster,
}

impl SurfaceTag {
    /// Whether touching this surface destroys the booster mid-episode.
    pub fn is_hazard(&self) -> bool {
        match self {
            SurfaceTag::Floor | SurfaceTag::Tower | SurfaceTag::CatchArms => true,
            SurfaceTag::Booster => false,
        }
    }
}

impl fmt::Display for SurfaceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SurfaceTag::Floor => "floor",
            SurfaceTag::Tower => "tower",
            SurfaceTag::CatchArms => "catch arms",
            SurfaceTag::Booster => "booster",
        };
        write!(f, "{}", name)
    }
}

/// Collision-start event injected by the host's collision feed.
#[derive(Event, Debug, Clone, Copy)]
pub struct CollisionEvent {
    pub surface: SurfaceTag,
}
