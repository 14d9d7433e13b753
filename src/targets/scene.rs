use super::{LocationId, Subject, Target, TargetKind, TargetLocator};
use crate::geometry::ScreenRect;
use bevy::prelude::Resource;
use glam::Vec2;
use std::collections::HashMap;

/// Tiles around the cursor searched for targets.
pub const DEFAULT_DETECTION_RADIUS: f32 = 3.0;

#[derive(Debug, Clone)]
struct SceneEntry {
    target: Target,
    subject: Option<Subject>,
}

/// In-memory locator over targets registered per location. Target ids are
/// assigned on insert and unique across all locations.
#[derive(Resource, Debug, Clone)]
pub struct SceneLocator {
    entries: HashMap<LocationId, Vec<SceneEntry>>,
    detection_radius: f32,
    next_id: u64,
}

impl Default for SceneLocator {
    fn default() -> Self {
        Self::new(DEFAULT_DETECTION_RADIUS)
    }
}

impl SceneLocator {
    pub fn new(detection_radius: f32) -> Self {
        Self {
            entries: HashMap::new(),
            detection_radius,
            next_id: 1,
        }
    }

    /// Registers a target and returns its id.
    pub fn insert(
        &mut self,
        location: LocationId,
        kind: TargetKind,
        tile: Vec2,
        sprite_area: ScreenRect,
        subject: Option<Subject>,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let target = Target::new(id, kind, tile, sprite_area);
        self.entries
            .entry(location)
            .or_default()
            .push(SceneEntry { target, subject });
        id
    }

    pub fn clear_location(&mut self, location: &LocationId) {
        self.entries.remove(location);
    }

    fn nearby(
        &self,
        location: &LocationId,
        cursor_tile: Vec2,
    ) -> impl Iterator<Item = &SceneEntry> {
        let radius = self.detection_radius;
        self.entries
            .get(location)
            .into_iter()
            .flatten()
            .filter(move |entry| {
                let delta = (entry.target.tile - cursor_tile).abs();
                delta.x <= radius && delta.y <= radius
            })
    }
}

impl TargetLocator for SceneLocator {
    fn nearby_targets(&self, location: &LocationId, cursor_tile: Vec2) -> Vec<Target> {
        self.nearby(location, cursor_tile)
            .map(|entry| entry.target.clone())
            .collect()
    }

    fn subject_for_target(&self, target: &Target) -> Option<Subject> {
        self.entries
            .values()
            .flatten()
            .find(|entry| entry.target.id == target.id)
            .and_then(|entry| entry.subject.clone())
    }

    fn subject_at(
        &self,
        location: &LocationId,
        cursor_tile: Vec2,
        cursor_position: Vec2,
    ) -> Option<Subject> {
        let tile = cursor_tile.floor();
        let mut hits: Vec<(&SceneEntry, bool)> = self
            .nearby(location, cursor_tile)
            .filter(|entry| entry.subject.is_some())
            .filter_map(|entry| {
                let on_sprite = entry.target.sprite_area.contains(cursor_position);
                let on_tile = entry.target.tile.floor() == tile;
                (on_sprite || on_tile).then_some((entry, on_sprite))
            })
            .collect();

        // Sprite hits beat tile hits, known beats unknown, then the one drawn in front.
        hits.sort_by(|(a, a_sprite), (b, b_sprite)| {
            b_sprite
                .cmp(a_sprite)
                .then(b.target.kind.is_known().cmp(&a.target.kind.is_known()))
                .then(
                    (b.target.tile.x + b.target.tile.y)
                        .partial_cmp(&(a.target.tile.x + a.target.tile.y))
                        .unwrap_or(std::cmp::Ordering::Equal),
                )
        });

        hits.first().and_then(|(entry, _)| entry.subject.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn farm() -> LocationId {
        LocationId::new("Farm")
    }

    fn scene() -> SceneLocator {
        let mut locator = SceneLocator::default();
        locator.insert(
            farm(),
            TargetKind::Tree,
            Vec2::new(5.0, 5.0),
            ScreenRect::new(288, 192, 64, 128),
            Some(Subject::new("Oak Tree")),
        );
        locator.insert(
            farm(),
            TargetKind::Object,
            Vec2::new(5.0, 4.0),
            ScreenRect::new(320, 256, 64, 64),
            Some(Subject::new("Chest")),
        );
        locator.insert(
            farm(),
            TargetKind::Unknown,
            Vec2::new(20.0, 20.0),
            ScreenRect::new(1280, 1280, 64, 64),
            None,
        );
        locator
    }

    #[test]
    fn test_nearby_respects_radius() {
        let ids: Vec<u64> = scene()
            .nearby_targets(&farm(), Vec2::new(4.0, 4.0))
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_unknown_location_is_empty() {
        assert!(
            scene()
                .nearby_targets(&LocationId::new("Town"), Vec2::ZERO)
                .is_empty()
        );
    }

    #[test]
    fn test_subject_for_target_by_id() {
        let locator = scene();
        let targets = locator.nearby_targets(&farm(), Vec2::new(20.0, 20.0));
        assert_eq!(targets.len(), 1);
        assert_eq!(locator.subject_for_target(&targets[0]), None);

        let tree = Target::new(1, TargetKind::Tree, Vec2::ZERO, ScreenRect::default());
        assert_eq!(
            locator.subject_for_target(&tree).map(|s| s.name),
            Some("Oak Tree".to_string())
        );
    }

    #[test]
    fn test_ids_are_unique_across_locations() {
        let town = LocationId::new("Town");
        let mut locator = SceneLocator::default();
        let mayor = locator.insert(
            town.clone(),
            TargetKind::Villager,
            Vec2::new(1.0, 1.0),
            ScreenRect::new(64, 0, 64, 128),
            Some(Subject::new("Mayor")),
        );
        let rock = locator.insert(
            farm(),
            TargetKind::Unknown,
            Vec2::new(1.0, 1.0),
            ScreenRect::new(64, 64, 64, 64),
            None,
        );
        assert_ne!(mayor, rock);

        let farm_targets = locator.nearby_targets(&farm(), Vec2::new(1.0, 1.0));
        assert_eq!(farm_targets.len(), 1);
        assert_eq!(farm_targets[0].id, rock);
        assert_eq!(locator.subject_for_target(&farm_targets[0]), None);

        let town_targets = locator.nearby_targets(&town, Vec2::new(1.0, 1.0));
        assert_eq!(
            locator.subject_for_target(&town_targets[0]).map(|s| s.name),
            Some("Mayor".to_string())
        );
    }

    #[test]
    fn test_cleared_location_ids_are_not_reused() {
        let mut locator = scene();
        locator.clear_location(&farm());
        let id = locator.insert(
            farm(),
            TargetKind::Crop,
            Vec2::ZERO,
            ScreenRect::new(0, 0, 64, 64),
            Some(Subject::new("Parsnip")),
        );
        assert_eq!(id, 4);
    }

    #[test]
    fn test_subject_at_prefers_sprite_hit() {
        // Cursor is on tile (5, 4) but over the tree's tall sprite.
        let subject = scene().subject_at(&farm(), Vec2::new(5.0, 4.0), Vec2::new(300.0, 260.0));
        assert_eq!(subject.map(|s| s.name), Some("Oak Tree".to_string()));
    }

    #[test]
    fn test_subject_at_falls_back_to_tile() {
        let subject = scene().subject_at(&farm(), Vec2::new(5.0, 4.0), Vec2::new(0.0, 0.0));
        assert_eq!(subject.map(|s| s.name), Some("Chest".to_string()));
    }

    #[test]
    fn test_subject_at_nothing_there() {
        assert!(
            scene()
                .subject_at(&farm(), Vec2::new(0.0, 0.0), Vec2::new(0.0, 0.0))
                .is_none()
        );
    }
}
