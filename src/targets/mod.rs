//! Lookup targets and the locator seam the overlay queries each frame.

mod scene;

pub use scene::{DEFAULT_DETECTION_RADIUS, SceneLocator};

use crate::geometry::ScreenRect;
use glam::Vec2;

/// Name of the map or area the cursor is in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct LocationId(pub String);

impl LocationId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl std::fmt::Display for LocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    /// Something under the cursor that no lookup subject exists for.
    Unknown,
    Villager,
    Pet,
    Monster,
    FarmAnimal,
    Farmer,
    Object,
    Crop,
    Tree,
    FruitTree,
    Bush,
    Building,
    Tile,
}

impl TargetKind {
    pub fn is_known(self) -> bool {
        !matches!(self, TargetKind::Unknown)
    }
}

/// A candidate under or near the cursor. Rebuilt every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub id: u64,
    pub kind: TargetKind,
    /// Tile the target stands on.
    pub tile: Vec2,
    /// Screen area covered by the target's sprite, which may extend past its tile.
    pub sprite_area: ScreenRect,
}

impl Target {
    pub fn new(id: u64, kind: TargetKind, tile: Vec2, sprite_area: ScreenRect) -> Self {
        Self {
            id,
            kind,
            tile,
            sprite_area,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    pub name: String,
    pub description: Option<String>,
    pub type_name: Option<String>,
}

impl Subject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            type_name: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }
}

/// Finds lookup targets around the cursor and resolves what they are.
///
/// Implementations must be cheap and side-effect free; the overlay calls them
/// several times per frame.
pub trait TargetLocator {
    /// Targets within the locator's detection radius of `cursor_tile`.
    fn nearby_targets(&self, location: &LocationId, cursor_tile: Vec2) -> Vec<Target>;

    fn subject_for_target(&self, target: &Target) -> Option<Subject>;

    /// The subject at the exact cursor position. May use the pixel position to
    /// pick between overlapping targets.
    fn subject_at(
        &self,
        location: &LocationId,
        cursor_tile: Vec2,
        cursor_position: Vec2,
    ) -> Option<Subject>;
}
