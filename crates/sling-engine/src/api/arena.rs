use glam::Vec2;

use crate::api::types::{BodyIndex, BodySnapshot};
use crate::core::bodies::BodyStore;
use crate::core::bounds::Bounds;
use crate::core::physics::{
    BodyDesc, BodyType, ColliderMaterial, ContactPair, PhysicsWorld, ShapeDesc,
};
use crate::systems::classify::{Category, Classifier};
use crate::systems::rules::{contact_outcome, ContactOutcome};

/// A complete, self-contained playfield: physics world, body table, entity
/// classification, bounds, and scoring, owned as one value. Multiple
/// arenas can coexist; nothing here is process-wide.
///
/// Every operation is sentinel-based: invalid or stale indices answer with
/// `None` / `false` / a no-op, never a panic, so a presentation layer
/// holding old indices degrades gracefully.
pub struct Arena {
    physics: PhysicsWorld,
    bodies: BodyStore,
    classifier: Classifier,
    bounds: Bounds,
    score: i32,
    contacts: Vec<ContactPair>,
    to_destroy: Vec<BodyIndex>,
    removed: Vec<BodyIndex>,
}

impl Arena {
    pub fn new(gravity: Vec2) -> Self {
        log::info!("arena created, gravity ({}, {})", gravity.x, gravity.y);
        Self {
            physics: PhysicsWorld::new(gravity),
            bodies: BodyStore::new(),
            classifier: Classifier::new(),
            bounds: Bounds::default(),
            score: 0,
            contacts: Vec::new(),
            to_destroy: Vec::new(),
            removed: Vec::new(),
        }
    }

    /// Tear down the simulation and start over with new gravity. Every
    /// index handed out so far becomes permanently dead. The score
    /// survives — resetting it is its own explicit call.
    pub fn reset(&mut self, gravity: Vec2) {
        log::info!("arena reset, gravity ({}, {})", gravity.x, gravity.y);
        self.physics = PhysicsWorld::new(gravity);
        self.bodies.clear();
        self.classifier.clear();
        self.bounds = Bounds::default();
        self.contacts.clear();
        self.to_destroy.clear();
        self.removed.clear();
    }

    /// Change gravity mid-flight (tilt input, level effects).
    pub fn set_gravity(&mut self, gravity: Vec2) {
        self.physics.set_gravity(gravity);
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Overwrite the playfield rectangle without building wall geometry.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    // -- Simulation tick ----------------------------------------------------

    /// Advance the simulation one fixed step. Contact events from this step
    /// replace whatever an earlier, unprocessed step had produced.
    pub fn step(&mut self, dt: f32) {
        self.physics.set_dt(dt);
        self.contacts.clear();
        self.physics.step_into(&mut self.contacts);
    }

    /// Apply the interaction rules to the most recent step's contacts:
    /// targets hit by a source are tombstoned, downgraded to obstacles, and
    /// scored; sources touching static scenery get their sticky flag set.
    /// Consumes the pending contacts, so calling again without stepping is
    /// a no-op that leaves an empty removed list.
    pub fn process_collisions(&mut self) {
        self.removed.clear();
        self.to_destroy.clear();

        for pair in self.contacts.drain(..) {
            if !pair.started {
                continue;
            }
            let ca = self.classifier.category_of(pair.a);
            let cb = self.classifier.category_of(pair.b);
            match contact_outcome(ca, cb) {
                ContactOutcome::DestroyA => self.to_destroy.push(pair.a),
                ContactOutcome::DestroyB => self.to_destroy.push(pair.b),
                ContactOutcome::FlagA => self.classifier.mark_contact(pair.a),
                ContactOutcome::FlagB => self.classifier.mark_contact(pair.b),
                ContactOutcome::Ignore => {}
            }
        }

        // Second pass: a target queued twice in one tick (two sources) is
        // destroyed and scored once; the alive check eats the duplicate.
        for i in 0..self.to_destroy.len() {
            let index = self.to_destroy[i];
            if self.bodies.get(index).is_none() {
                continue;
            }
            self.bodies.destroy(&mut self.physics, index);
            self.classifier.downgrade(index);
            let points = self.classifier.score_of(index);
            self.score += points;
            self.removed.push(index);
            log::debug!("target {} destroyed, +{} points", index.0, points);
        }
    }

    /// Step plus rule processing in one call. Returns the indices destroyed
    /// by this tick, valid until the next processing call.
    pub fn update(&mut self, dt: f32) -> &[BodyIndex] {
        self.step(dt);
        self.process_collisions();
        &self.removed
    }

    // -- Spawning -----------------------------------------------------------

    fn spawn(
        &mut self,
        category: Category,
        body_type: BodyType,
        shape: ShapeDesc,
        position: Vec2,
        material: ColliderMaterial,
        score_value: i32,
        ccd: bool,
    ) -> Option<BodyIndex> {
        // Bounds are checked before anything native is allocated, so a
        // rejected spawn leaves no orphan and no table growth.
        if !self.bounds.contains(position) {
            log::debug!(
                "spawn rejected outside bounds at ({}, {})",
                position.x,
                position.y
            );
            return None;
        }
        let index = self.bodies.next_index();
        let desc = match body_type {
            BodyType::Dynamic => BodyDesc::dynamic(shape),
            BodyType::Fixed => BodyDesc::fixed(shape),
        }
        .with_position(position)
        .with_ccd(ccd);
        let body = self.physics.create_body(index, &desc, material)?;
        let index = self.bodies.insert(body);
        self.classifier.register(index, category);
        self.classifier.set_score(index, score_value);
        Some(index)
    }

    /// Dynamic source (projectile). Continuous collision detection is on so
    /// a fast launch cannot tunnel through a target.
    pub fn spawn_source(
        &mut self,
        shape: ShapeDesc,
        position: Vec2,
        material: ColliderMaterial,
    ) -> Option<BodyIndex> {
        self.spawn(
            Category::Source,
            BodyType::Dynamic,
            shape,
            position,
            material,
            0,
            true,
        )
    }

    pub fn spawn_static_source(
        &mut self,
        shape: ShapeDesc,
        position: Vec2,
        material: ColliderMaterial,
    ) -> Option<BodyIndex> {
        self.spawn(
            Category::Source,
            BodyType::Fixed,
            shape,
            position,
            material,
            0,
            false,
        )
    }

    /// Dynamic target worth `score_value` points when a source destroys it.
    pub fn spawn_target(
        &mut self,
        shape: ShapeDesc,
        position: Vec2,
        material: ColliderMaterial,
        score_value: i32,
    ) -> Option<BodyIndex> {
        self.spawn(
            Category::Target,
            BodyType::Dynamic,
            shape,
            position,
            material,
            score_value,
            false,
        )
    }

    pub fn spawn_static_target(
        &mut self,
        shape: ShapeDesc,
        position: Vec2,
        material: ColliderMaterial,
        score_value: i32,
    ) -> Option<BodyIndex> {
        self.spawn(
            Category::Target,
            BodyType::Fixed,
            shape,
            position,
            material,
            score_value,
            false,
        )
    }

    /// Dynamic obstacle: collides, scores nothing, triggers nothing.
    pub fn spawn_obstacle(
        &mut self,
        shape: ShapeDesc,
        position: Vec2,
        material: ColliderMaterial,
    ) -> Option<BodyIndex> {
        self.spawn(
            Category::Obstacle,
            BodyType::Dynamic,
            shape,
            position,
            material,
            0,
            false,
        )
    }

    /// Immovable scenery. Sources touching it raise their contact flag.
    pub fn spawn_static_obstacle(
        &mut self,
        shape: ShapeDesc,
        position: Vec2,
        material: ColliderMaterial,
    ) -> Option<BodyIndex> {
        self.spawn(
            Category::StaticObstacle,
            BodyType::Fixed,
            shape,
            position,
            material,
            0,
            false,
        )
    }

    // -- Boundary builders --------------------------------------------------

    /// Boundary bodies bypass the spawn bounds check (they ARE the bounds)
    /// but live in the table like everything else, registered as static
    /// obstacles so the contact-flag rule sees them.
    fn add_boundary(&mut self, shape: ShapeDesc, material: ColliderMaterial) -> Option<BodyIndex> {
        let index = self.bodies.next_index();
        let body = self
            .physics
            .create_body(index, &BodyDesc::fixed(shape), material)?;
        let index = self.bodies.insert(body);
        self.classifier.register(index, Category::StaticObstacle);
        self.classifier.set_score(index, 0);
        Some(index)
    }

    /// Static ground segment at height `y`, centered on the origin. Also
    /// lowers the playfield's bottom edge to `y`.
    pub fn add_ground(
        &mut self,
        y: f32,
        length: f32,
        material: ColliderMaterial,
    ) -> Option<BodyIndex> {
        let half = length * 0.5;
        let index = self.add_boundary(
            ShapeDesc::Segment {
                a: Vec2::new(-half, y),
                b: Vec2::new(half, y),
            },
            material,
        )?;
        self.bounds.ground = y;
        log::debug!("ground at y={}", y);
        Some(index)
    }

    /// Static roof segment at height `y`, centered on the origin.
    pub fn add_roof(
        &mut self,
        y: f32,
        length: f32,
        material: ColliderMaterial,
    ) -> Option<BodyIndex> {
        let half = length * 0.5;
        let index = self.add_boundary(
            ShapeDesc::Segment {
                a: Vec2::new(-half, y),
                b: Vec2::new(half, y),
            },
            material,
        )?;
        self.bounds.roof = y;
        log::debug!("roof at y={}", y);
        Some(index)
    }

    /// Static left wall at `x`, rising from the origin to `height`.
    pub fn add_left_wall(
        &mut self,
        x: f32,
        height: f32,
        material: ColliderMaterial,
    ) -> Option<BodyIndex> {
        let index = self.add_boundary(
            ShapeDesc::Segment {
                a: Vec2::new(x, 0.0),
                b: Vec2::new(x, height),
            },
            material,
        )?;
        self.bounds.left = x;
        log::debug!("left wall at x={}", x);
        Some(index)
    }

    /// Static right wall at `x`, rising from the origin to `height`.
    pub fn add_right_wall(
        &mut self,
        x: f32,
        height: f32,
        material: ColliderMaterial,
    ) -> Option<BodyIndex> {
        let index = self.add_boundary(
            ShapeDesc::Segment {
                a: Vec2::new(x, 0.0),
                b: Vec2::new(x, height),
            },
            material,
        )?;
        self.bounds.right = x;
        log::debug!("right wall at x={}", x);
        Some(index)
    }

    /// Build all four edges of `rect` as wall segments that meet at the
    /// corners, and adopt `rect` as the playfield bounds.
    pub fn build_walls(&mut self, rect: Bounds, material: ColliderMaterial) {
        let bl = Vec2::new(rect.left, rect.ground);
        let br = Vec2::new(rect.right, rect.ground);
        let tl = Vec2::new(rect.left, rect.roof);
        let tr = Vec2::new(rect.right, rect.roof);
        let edges = [(bl, br), (tl, tr), (bl, tl), (br, tr)];
        for (a, b) in edges {
            // Segment colliders cannot fail to build.
            let _ = self.add_boundary(ShapeDesc::Segment { a, b }, material);
        }
        self.bounds = rect;
        log::debug!(
            "walls built: x [{}, {}], y [{}, {}]",
            rect.left,
            rect.right,
            rect.ground,
            rect.roof
        );
    }

    // -- Per-index operations -----------------------------------------------

    /// Tombstone a body and downgrade its classification, so the index can
    /// never match the source/target rules again. Idempotent.
    pub fn destroy(&mut self, index: BodyIndex) {
        if self.bodies.get(index).is_some() {
            self.bodies.destroy(&mut self.physics, index);
            self.classifier.downgrade(index);
        }
    }

    /// Move a body, keeping its rotation. No-op on a dead index.
    pub fn teleport(&mut self, index: BodyIndex, position: Vec2) {
        if let Some(body) = self.bodies.get(index) {
            self.physics.teleport(&body, position);
        }
    }

    pub fn set_velocity(&mut self, index: BodyIndex, velocity: Vec2) {
        if let Some(body) = self.bodies.get(index) {
            self.physics.set_velocity(&body, velocity);
        }
    }

    pub fn velocity(&self, index: BodyIndex) -> Option<Vec2> {
        self.bodies.get(index).map(|body| self.physics.velocity(&body))
    }

    /// Push the body with a constant acceleration (`force = mass * accel`,
    /// applied at the center, waking it if asleep).
    pub fn accelerate(&mut self, index: BodyIndex, accel: Vec2) {
        if let Some(body) = self.bodies.get(index) {
            self.physics.accelerate(&body, accel);
        }
    }

    /// Convert a drag gesture into a launch velocity:
    /// `(current - last) / dt`. No-op for non-positive `dt`.
    pub fn launch(&mut self, index: BodyIndex, last: Vec2, current: Vec2, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        self.set_velocity(index, (current - last) / dt);
    }

    /// Toggle full bounce on or off for a body's collider.
    pub fn set_bouncing(&mut self, index: BodyIndex, enabled: bool) {
        if let Some(body) = self.bodies.get(index) {
            let restitution = if enabled { 1.0 } else { 0.0 };
            self.physics.set_restitution(&body, restitution);
        }
    }

    pub fn position(&self, index: BodyIndex) -> Option<Vec2> {
        self.bodies
            .get(index)
            .map(|body| self.physics.body_position(&body).0)
    }

    pub fn rotation(&self, index: BodyIndex) -> Option<f32> {
        self.bodies
            .get(index)
            .map(|body| self.physics.body_position(&body).1)
    }

    /// Liveness check with boundary enforcement: a live body found outside
    /// the playfield is teleported to the nearest edge (rotation kept)
    /// before this returns `true`. Callers polling this every frame get
    /// soft-walling for free.
    pub fn is_alive(&mut self, index: BodyIndex) -> bool {
        let Some(body) = self.bodies.get(index) else {
            return false;
        };
        let (pos, _) = self.physics.body_position(&body);
        let (corrected, moved) = self.bounds.clamp(pos);
        if moved {
            self.physics.teleport(&body, corrected);
        }
        true
    }

    pub fn category_of(&self, index: BodyIndex) -> Category {
        self.classifier.category_of(index)
    }

    /// Sticky flag raised when this source touched static scenery. Stays up
    /// until `clear_contacts`.
    pub fn had_contact(&self, index: BodyIndex) -> bool {
        self.classifier.had_contact(index)
    }

    /// Lower every contact flag. Idempotent.
    pub fn clear_contacts(&mut self) {
        self.classifier.clear_contacts();
    }

    // -- Aggregate queries --------------------------------------------------

    /// Table length, tombstoned slots included.
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn reset_score(&mut self) {
        self.score = 0;
    }

    /// Indices destroyed by the most recent `process_collisions`, valid
    /// until the next one. Copy if you need them longer.
    pub fn removed_this_tick(&self) -> &[BodyIndex] {
        &self.removed
    }

    /// Positions and rotations of every live body, as Pod records a render
    /// layer can upload wholesale.
    pub fn snapshot_positions(&self) -> Vec<BodySnapshot> {
        self.bodies
            .iter_live()
            .map(|(index, body)| {
                let (pos, rotation) = self.physics.body_position(&body);
                BodySnapshot {
                    index: index.0,
                    x: pos.x,
                    y: pos.y,
                    rotation,
                }
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    /// Zero-gravity arena with a 400x300 walled playfield.
    fn walled_arena() -> Arena {
        let mut arena = Arena::new(Vec2::ZERO);
        arena.build_walls(
            Bounds::new(0.0, 400.0, 0.0, 300.0),
            ColliderMaterial::default(),
        );
        arena
    }

    fn ball(radius: f32) -> ShapeDesc {
        ShapeDesc::Ball { radius }
    }

    #[test]
    fn spawn_inside_bounds_is_live() {
        let mut arena = walled_arena();
        let before = arena.body_count();
        let idx = arena
            .spawn_target(ball(2.0), Vec2::new(200.0, 150.0), ColliderMaterial::default(), 1)
            .unwrap();
        assert_eq!(arena.body_count(), before + 1);
        assert!(arena.is_alive(idx));
        assert_eq!(arena.position(idx), Some(Vec2::new(200.0, 150.0)));
    }

    #[test]
    fn spawn_outside_any_side_is_rejected_without_orphans() {
        let mut arena = walled_arena();
        let before = arena.body_count();
        let outside = [
            Vec2::new(-10.0, 150.0),
            Vec2::new(410.0, 150.0),
            Vec2::new(200.0, -10.0),
            Vec2::new(200.0, 310.0),
        ];
        for pos in outside {
            assert!(arena
                .spawn_obstacle(ball(2.0), pos, ColliderMaterial::default())
                .is_none());
        }
        assert_eq!(arena.body_count(), before, "no table growth on rejection");
    }

    #[test]
    fn destroy_is_idempotent_and_kills_queries() {
        let mut arena = walled_arena();
        let idx = arena
            .spawn_target(ball(2.0), Vec2::new(100.0, 100.0), ColliderMaterial::default(), 1)
            .unwrap();
        arena.destroy(idx);
        assert!(arena.position(idx).is_none());
        assert!(!arena.is_alive(idx));
        arena.destroy(idx); // second call is a no-op
        assert!(!arena.is_alive(idx));
    }

    #[test]
    fn teleport_round_trips_and_keeps_rotation() {
        let mut arena = walled_arena();
        let idx = arena
            .spawn_obstacle(ball(2.0), Vec2::new(100.0, 100.0), ColliderMaterial::default())
            .unwrap();
        let rot_before = arena.rotation(idx).unwrap();
        arena.teleport(idx, Vec2::new(300.0, 200.0));
        assert_eq!(arena.position(idx), Some(Vec2::new(300.0, 200.0)));
        let rot_after = arena.rotation(idx).unwrap();
        assert!((rot_after - rot_before).abs() < 0.001);
    }

    #[test]
    fn teleport_on_dead_index_is_a_noop() {
        let mut arena = walled_arena();
        let idx = arena
            .spawn_obstacle(ball(2.0), Vec2::new(100.0, 100.0), ColliderMaterial::default())
            .unwrap();
        arena.destroy(idx);
        arena.teleport(idx, Vec2::new(1.0, 1.0));
        arena.set_velocity(idx, Vec2::new(5.0, 5.0));
        arena.accelerate(idx, Vec2::new(5.0, 5.0));
        assert!(arena.velocity(idx).is_none());
    }

    #[test]
    fn is_alive_clamps_escaped_bodies_back_inside() {
        let mut arena = walled_arena();
        let idx = arena
            .spawn_obstacle(ball(2.0), Vec2::new(100.0, 10.0), ColliderMaterial::default())
            .unwrap();
        // Force the body out past the left wall, then let the liveness
        // check soft-wall it.
        arena.teleport(idx, Vec2::new(-5.0, 10.0));
        assert!(arena.is_alive(idx));
        assert_eq!(arena.position(idx), Some(Vec2::new(0.0, 10.0)));
    }

    #[test]
    fn source_destroys_overlapping_target_and_scores() {
        let mut arena = walled_arena();
        let target = arena
            .spawn_target(ball(2.0), Vec2::new(200.0, 150.0), ColliderMaterial::default(), 5)
            .unwrap();
        let source = arena
            .spawn_source(ball(2.0), Vec2::new(201.0, 150.0), ColliderMaterial::default())
            .unwrap();

        let removed = arena.update(DT).to_vec();
        assert_eq!(removed, vec![target]);
        assert_eq!(arena.score(), 5);
        assert!(!arena.is_alive(target));
        assert!(arena.is_alive(source));
        // Destroyed targets drop to Obstacle so the index can't score twice.
        assert_eq!(arena.category_of(target), Category::Obstacle);

        // A second processing pass without new contacts changes nothing.
        arena.process_collisions();
        assert!(arena.removed_this_tick().is_empty());
        assert_eq!(arena.score(), 5);
    }

    #[test]
    fn launched_source_hits_distant_target() {
        let mut arena = walled_arena();
        let target = arena
            .spawn_static_target(
                ShapeDesc::Cuboid {
                    half_width: 5.0,
                    half_height: 40.0,
                },
                Vec2::new(300.0, 150.0),
                ColliderMaterial::default(),
                3,
            )
            .unwrap();
        let source = arena
            .spawn_source(ball(3.0), Vec2::new(50.0, 150.0), ColliderMaterial::default())
            .unwrap();
        // 5 units of drag over one frame: a 300 u/s launch.
        arena.launch(source, Vec2::new(50.0, 150.0), Vec2::new(55.0, 150.0), DT);

        let mut hit = false;
        for _ in 0..120 {
            if arena.update(DT).contains(&target) {
                hit = true;
                break;
            }
        }
        assert!(hit, "launched source never reached the target");
        assert_eq!(arena.score(), 3);
    }

    #[test]
    fn source_against_obstacle_changes_nothing() {
        let mut arena = walled_arena();
        let obstacle = arena
            .spawn_obstacle(ball(2.0), Vec2::new(200.0, 150.0), ColliderMaterial::default())
            .unwrap();
        arena
            .spawn_source(ball(2.0), Vec2::new(201.0, 150.0), ColliderMaterial::default())
            .unwrap();

        let removed = arena.update(DT).to_vec();
        assert!(removed.is_empty());
        assert_eq!(arena.score(), 0);
        assert!(arena.is_alive(obstacle));
    }

    #[test]
    fn contact_flag_sticks_until_cleared() {
        let mut arena = walled_arena();
        let block = arena
            .spawn_static_obstacle(
                ShapeDesc::Cuboid {
                    half_width: 5.0,
                    half_height: 5.0,
                },
                Vec2::new(200.0, 150.0),
                ColliderMaterial::default(),
            )
            .unwrap();
        let source = arena
            .spawn_source(ball(2.0), Vec2::new(206.0, 150.0), ColliderMaterial::default())
            .unwrap();
        arena.set_velocity(source, Vec2::new(-30.0, 0.0));

        let mut flagged = false;
        for _ in 0..60 {
            arena.update(DT);
            if arena.had_contact(source) {
                flagged = true;
                break;
            }
        }
        assert!(flagged, "source never flagged against static scenery");
        assert!(!arena.had_contact(block), "flag belongs to the source side");

        arena.clear_contacts();
        assert!(!arena.had_contact(source));
        arena.clear_contacts(); // idempotent
        assert!(!arena.had_contact(source));
    }

    #[test]
    fn walls_flag_sources_too() {
        let mut arena = walled_arena();
        let source = arena
            .spawn_source(ball(2.0), Vec2::new(10.0, 150.0), ColliderMaterial::default())
            .unwrap();
        arena.set_velocity(source, Vec2::new(-50.0, 0.0));

        let mut flagged = false;
        for _ in 0..120 {
            arena.update(DT);
            if arena.had_contact(source) {
                flagged = true;
                break;
            }
        }
        assert!(flagged, "left wall is a static obstacle and must flag");
    }

    #[test]
    fn score_survives_reset_until_reset_score() {
        let mut arena = walled_arena();
        let target = arena
            .spawn_target(ball(2.0), Vec2::new(200.0, 150.0), ColliderMaterial::default(), 2)
            .unwrap();
        arena
            .spawn_source(ball(2.0), Vec2::new(201.0, 150.0), ColliderMaterial::default())
            .unwrap();
        arena.update(DT);
        assert_eq!(arena.score(), 2);

        arena.reset(Vec2::ZERO);
        assert_eq!(arena.body_count(), 0);
        assert!(!arena.is_alive(target));
        assert_eq!(arena.score(), 2, "score outlives reinit");
        arena.reset_score();
        assert_eq!(arena.score(), 0);
    }

    #[test]
    fn snapshot_lists_live_bodies_only() {
        let mut arena = walled_arena();
        let walls = arena.body_count();
        let a = arena
            .spawn_obstacle(ball(2.0), Vec2::new(100.0, 100.0), ColliderMaterial::default())
            .unwrap();
        let b = arena
            .spawn_obstacle(ball(2.0), Vec2::new(200.0, 200.0), ColliderMaterial::default())
            .unwrap();
        arena.destroy(a);

        let snapshot = arena.snapshot_positions();
        assert_eq!(snapshot.len(), walls + 1);
        let entry = snapshot.iter().find(|s| s.index == b.0).unwrap();
        assert!((entry.x - 200.0).abs() < 0.001);
        assert!((entry.y - 200.0).abs() < 0.001);
    }

    #[test]
    fn static_source_still_destroys_targets() {
        // The rules go by category, not body type: an immovable source
        // consumes a target that drifts into it.
        let mut arena = walled_arena();
        let source = arena
            .spawn_static_source(ball(3.0), Vec2::new(200.0, 150.0), ColliderMaterial::default())
            .unwrap();
        let target = arena
            .spawn_target(ball(2.0), Vec2::new(210.0, 150.0), ColliderMaterial::default(), 4)
            .unwrap();
        arena.set_velocity(target, Vec2::new(-60.0, 0.0));

        let mut hit = false;
        for _ in 0..60 {
            if arena.update(DT).contains(&target) {
                hit = true;
                break;
            }
        }
        assert!(hit, "drifting target never reached the static source");
        assert_eq!(arena.score(), 4);
        assert!(arena.is_alive(source));
    }

    #[test]
    fn set_bounds_gates_spawns_without_wall_geometry() {
        let mut arena = Arena::new(Vec2::ZERO);
        arena.set_bounds(Bounds::new(0.0, 50.0, 0.0, 50.0));
        assert!(arena
            .spawn_obstacle(ball(1.0), Vec2::new(25.0, 25.0), ColliderMaterial::default())
            .is_some());
        assert!(arena
            .spawn_obstacle(ball(1.0), Vec2::new(60.0, 25.0), ColliderMaterial::default())
            .is_none());
        // Only the accepted spawn produced a body.
        assert_eq!(arena.body_count(), 1);
    }

    #[test]
    fn indices_stay_dead_after_scoring_destroy() {
        let mut arena = walled_arena();
        let target = arena
            .spawn_target(ball(2.0), Vec2::new(200.0, 150.0), ColliderMaterial::default(), 1)
            .unwrap();
        arena
            .spawn_source(ball(2.0), Vec2::new(201.0, 150.0), ColliderMaterial::default())
            .unwrap();
        arena.update(DT);
        assert!(!arena.is_alive(target));

        // New spawns never reuse the dead slot.
        let next = arena
            .spawn_obstacle(ball(2.0), Vec2::new(100.0, 100.0), ColliderMaterial::default())
            .unwrap();
        assert_ne!(next, target);
        assert!(!arena.is_alive(target));
    }
}
