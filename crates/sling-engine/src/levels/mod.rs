use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::api::arena::Arena;
use crate::api::types::BodyIndex;
use crate::core::bounds::Bounds;
use crate::core::physics::{ColliderMaterial, ShapeDesc};

// Stock material tuning for level-spawned objects.
const SOURCE_MATERIAL: ColliderMaterial = ColliderMaterial {
    restitution: 0.5,
    friction: 0.2,
    density: 1.0,
};
const TARGET_MATERIAL: ColliderMaterial = ColliderMaterial {
    restitution: 0.8,
    friction: 0.3,
    density: 1.0,
};
const BLOCK_MATERIAL: ColliderMaterial = ColliderMaterial {
    restitution: 0.8,
    friction: 0.3,
    density: 1.0,
};

/// Declarative level description, parsed from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelDef {
    pub name: String,
    pub world: WorldDef,
    #[serde(default)]
    pub walls: Option<WallsDef>,
    pub objects: ObjectsDef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldDef {
    pub gravity_x: f32,
    pub gravity_y: f32,
}

/// Playfield rectangle plus the wall material.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallsDef {
    pub left: f32,
    pub right: f32,
    pub ground: f32,
    pub roof: f32,
    #[serde(default)]
    pub restitution: f32,
    #[serde(default = "default_wall_friction")]
    pub friction: f32,
}

fn default_wall_friction() -> f32 {
    0.5
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectsDef {
    /// Immovable boxes (shelves, pillars). Registered as static obstacles.
    #[serde(default)]
    pub static_blocks: Vec<BoxDef>,
    /// Loose dynamic boxes.
    #[serde(default)]
    pub obstacles: Vec<BoxDef>,
    /// Scored balls.
    #[serde(default)]
    pub targets: Vec<TargetDef>,
    pub source: SourceDef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoxDef {
    pub x: f32,
    pub y: f32,
    pub half_w: f32,
    pub half_h: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetDef {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub score: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceDef {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

impl LevelDef {
    /// Parse a level from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Index handles produced by populating an arena from a level.
#[derive(Debug)]
pub struct LoadedLevel {
    pub source: Option<BodyIndex>,
    pub targets: Vec<BodyIndex>,
    /// Sum of the score values of the targets that actually spawned —
    /// entries rejected by the bounds check do not count toward winning.
    pub total_target_score: i32,
}

impl LoadedLevel {
    /// The level is won once every spawned target has been scored.
    pub fn is_won(&self, score: i32) -> bool {
        self.total_target_score > 0 && score >= self.total_target_score
    }
}

/// Reset the arena and populate it from `def`. Spawns the walls first so
/// the bounds check applies to everything else; individual out-of-bounds
/// entries are skipped, not errors.
pub fn load_level(arena: &mut Arena, def: &LevelDef) -> LoadedLevel {
    log::info!("loading level '{}'", def.name);
    arena.reset(Vec2::new(def.world.gravity_x, def.world.gravity_y));
    arena.reset_score();

    if let Some(w) = &def.walls {
        let material = ColliderMaterial {
            restitution: w.restitution,
            friction: w.friction,
            density: 1.0,
        };
        arena.build_walls(Bounds::new(w.left, w.right, w.ground, w.roof), material);
    }

    for block in &def.objects.static_blocks {
        let _ = arena.spawn_static_obstacle(
            ShapeDesc::Cuboid {
                half_width: block.half_w,
                half_height: block.half_h,
            },
            Vec2::new(block.x, block.y),
            BLOCK_MATERIAL,
        );
    }
    for obstacle in &def.objects.obstacles {
        let _ = arena.spawn_obstacle(
            ShapeDesc::Cuboid {
                half_width: obstacle.half_w,
                half_height: obstacle.half_h,
            },
            Vec2::new(obstacle.x, obstacle.y),
            BLOCK_MATERIAL,
        );
    }

    let mut targets = Vec::with_capacity(def.objects.targets.len());
    let mut total = 0;
    for t in &def.objects.targets {
        if let Some(idx) = arena.spawn_target(
            ShapeDesc::Ball { radius: t.radius },
            Vec2::new(t.x, t.y),
            TARGET_MATERIAL,
            t.score,
        ) {
            targets.push(idx);
            total += t.score;
        }
    }

    let source = arena.spawn_source(
        ShapeDesc::Ball {
            radius: def.objects.source.radius,
        },
        Vec2::new(def.objects.source.x, def.objects.source.y),
        SOURCE_MATERIAL,
    );

    LoadedLevel {
        source,
        targets,
        total_target_score: total,
    }
}
