//! Static level data used to build a session.
//!
//! A [`LevelDefinition`] lists the solid ground volumes, the collectible
//! placements and the spawn point. It never changes during play: the reset
//! handler rebuilds the session from the same definition.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "name": "Snow Day",
//!   "tile_size": 18,
//!   "width": 1800,
//!   "height": 360,
//!   "spawn": [30, 250],
//!   "ground": [ { "x": 0, "y": 306, "w": 900, "h": 54 } ],
//!   "coins": [ [200, 280] ],
//!   "flags": [ [1746, 288] ]
//! }
//! ```

use bevy_ecs::prelude::Resource;
use glam::Vec2;
use log::info;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, top-left corner plus size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

/// Level layout and spawn data.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDefinition {
    pub name: String,
    /// Edge length of one tile; collectibles use it as their box size.
    pub tile_size: f32,
    /// Level width in pixels. Horizontal world bounds.
    pub width: f32,
    pub height: f32,
    /// Player center at session start.
    pub spawn: Vec2,
    #[serde(default)]
    pub ground: Vec<Rect>,
    #[serde(default)]
    pub coins: Vec<Vec2>,
    #[serde(default)]
    pub flags: Vec<Vec2>,
}

impl Default for LevelDefinition {
    /// "Snow Day": 100x20 tiles of 18 px with a pit halfway and the flag at
    /// the far end.
    fn default() -> Self {
        let tile = 18.0;
        let width = 100.0 * tile;
        let height = 20.0 * tile;
        let floor_y = 17.0 * tile;
        let floor_h = height - floor_y;
        let pit_start = 50.0 * tile;
        let pit_end = 56.0 * tile;
        Self {
            name: "Snow Day".to_string(),
            tile_size: tile,
            width,
            height,
            spawn: Vec2::new(30.0, 250.0),
            ground: vec![
                Rect::new(0.0, floor_y, pit_start, floor_h),
                Rect::new(pit_end, floor_y, width - pit_end, floor_h),
                // ledge over the pit approach
                Rect::new(40.0 * tile, 13.0 * tile, 5.0 * tile, tile),
            ],
            coins: vec![
                Vec2::new(12.0 * tile, floor_y - tile),
                Vec2::new(20.0 * tile, floor_y - tile),
                Vec2::new(42.0 * tile, 12.0 * tile),
                Vec2::new(53.0 * tile, floor_y - 4.0 * tile),
                Vec2::new(70.0 * tile, floor_y - tile),
            ],
            flags: vec![Vec2::new(97.0 * tile, floor_y - tile)],
        }
    }
}

impl LevelDefinition {
    /// Load a level from a JSON file.
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read level {}: {}", path.display(), e))?;
        let level: LevelDefinition = serde_json::from_str(&text)
            .map_err(|e| format!("Failed to parse level {}: {}", path.display(), e))?;
        level.validate()?;
        info!(
            "Loaded level '{}' ({}x{}, {} ground, {} coins, {} flags)",
            level.name,
            level.width,
            level.height,
            level.ground.len(),
            level.coins.len(),
            level.flags.len()
        );
        Ok(level)
    }

    fn validate(&self) -> Result<(), String> {
        if self.width <= 0.0 || self.height <= 0.0 || self.tile_size <= 0.0 {
            return Err(format!(
                "Level '{}' has non-positive dimensions",
                self.name
            ));
        }
        if let Some(rect) = self.ground.iter().find(|r| r.w <= 0.0 || r.h <= 0.0) {
            return Err(format!("Level '{}' has an empty ground rect {:?}", self.name, rect));
        }
        Ok(())
    }
}
