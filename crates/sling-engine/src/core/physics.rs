use glam::Vec2;
use rapier2d::prelude::*;
use std::sync::Mutex;

use crate::api::types::BodyIndex;

// ---------------------------------------------------------------------------
// Conversion helpers (private) — glam ↔ nalgebra
// ---------------------------------------------------------------------------

fn vec2_to_na(v: Vec2) -> nalgebra::Vector2<f32> {
    nalgebra::Vector2::new(v.x, v.y)
}

fn vec2_to_point(v: Vec2) -> nalgebra::Point2<f32> {
    nalgebra::Point2::new(v.x, v.y)
}

fn na_to_vec2(v: &nalgebra::Vector2<f32>) -> Vec2 {
    Vec2::new(v.x, v.y)
}

fn na_iso_to_pos_rot(iso: &nalgebra::Isometry2<f32>) -> (Vec2, f32) {
    let pos = Vec2::new(iso.translation.x, iso.translation.y);
    let rot = iso.rotation.angle();
    (pos, rot)
}

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// The kind of rigid body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyType {
    Dynamic,
    Fixed,
}

impl BodyType {
    fn to_rapier(self) -> RigidBodyType {
        match self {
            BodyType::Dynamic => RigidBodyType::Dynamic,
            BodyType::Fixed => RigidBodyType::Fixed,
        }
    }
}

/// Shape description for a body's collider.
#[derive(Debug, Clone)]
pub enum ShapeDesc {
    Ball { radius: f32 },
    Cuboid { half_width: f32, half_height: f32 },
    /// Convex hull computed from the given points. Degenerate input
    /// (fewer than three distinct points) produces no collider.
    ConvexPolygon { points: Vec<Vec2> },
    /// A static line segment — the boundary walls are built from these.
    Segment { a: Vec2, b: Vec2 },
}

impl ShapeDesc {
    fn build_collider(&self) -> Option<ColliderBuilder> {
        match self {
            ShapeDesc::Ball { radius } => Some(ColliderBuilder::ball(*radius)),
            ShapeDesc::Cuboid {
                half_width,
                half_height,
            } => Some(ColliderBuilder::cuboid(*half_width, *half_height)),
            ShapeDesc::ConvexPolygon { points } => {
                let points: Vec<nalgebra::Point2<f32>> =
                    points.iter().map(|p| vec2_to_point(*p)).collect();
                ColliderBuilder::convex_hull(&points)
            }
            ShapeDesc::Segment { a, b } => {
                Some(ColliderBuilder::segment(vec2_to_point(*a), vec2_to_point(*b)))
            }
        }
    }
}

/// Physical material properties for a collider.
#[derive(Debug, Clone, Copy)]
pub struct ColliderMaterial {
    pub restitution: f32,
    pub friction: f32,
    pub density: f32,
}

impl Default for ColliderMaterial {
    fn default() -> Self {
        Self {
            restitution: 0.3,
            friction: 0.5,
            density: 1.0,
        }
    }
}

/// Builder for describing a rigid body before creation.
#[derive(Debug, Clone)]
pub struct BodyDesc {
    pub body_type: BodyType,
    pub position: Vec2,
    pub rotation: f32,
    pub velocity: Vec2,
    pub ccd: bool,
    pub shape: ShapeDesc,
}

impl BodyDesc {
    /// Create a dynamic body description with the given collider shape.
    pub fn dynamic(shape: ShapeDesc) -> Self {
        Self {
            body_type: BodyType::Dynamic,
            position: Vec2::ZERO,
            rotation: 0.0,
            velocity: Vec2::ZERO,
            ccd: false,
            shape,
        }
    }

    /// Create a fixed (static) body description with the given collider shape.
    pub fn fixed(shape: ShapeDesc) -> Self {
        Self {
            body_type: BodyType::Fixed,
            position: Vec2::ZERO,
            rotation: 0.0,
            velocity: Vec2::ZERO,
            ccd: false,
            shape,
        }
    }

    pub fn with_position(mut self, pos: Vec2) -> Self {
        self.position = pos;
        self
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.velocity = vel;
        self
    }

    /// Enable continuous collision detection (fast-moving projectiles).
    pub fn with_ccd(mut self, enabled: bool) -> Self {
        self.ccd = enabled;
        self
    }
}

/// Handle pair referencing Rapier internals, stored in the body table.
#[derive(Debug, Clone, Copy)]
pub struct PhysicsBody {
    pub body_handle: RigidBodyHandle,
    pub collider_handle: ColliderHandle,
}

/// A contact event between two tracked bodies, resolved to table indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactPair {
    pub a: BodyIndex,
    pub b: BodyIndex,
    /// `true` when the shapes started touching, `false` when they separated.
    pub started: bool,
}

// ---------------------------------------------------------------------------
// Event collector
// ---------------------------------------------------------------------------

struct DirectEventCollector {
    collisions: Mutex<Vec<CollisionEvent>>,
}

impl DirectEventCollector {
    fn new() -> Self {
        Self {
            collisions: Mutex::new(Vec::new()),
        }
    }

    fn drain_collisions(&self) -> Vec<CollisionEvent> {
        std::mem::take(&mut *self.collisions.lock().unwrap())
    }
}

impl EventHandler for DirectEventCollector {
    // `ContactPair` is this module's index-resolved pair; the trait wants
    // rapier's narrow-phase type, spelled out to avoid the shadow.
    fn handle_collision_event(
        &self,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        event: CollisionEvent,
        _contact_pair: Option<&rapier2d::geometry::ContactPair>,
    ) {
        self.collisions.lock().unwrap().push(event);
    }

    fn handle_contact_force_event(
        &self,
        _dt: f32,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        _contact_pair: &rapier2d::geometry::ContactPair,
        _total_force_magnitude: f32,
    ) {
        // Contact forces are unused but the trait requires this.
    }
}

// ---------------------------------------------------------------------------
// PhysicsWorld
// ---------------------------------------------------------------------------

/// Wraps all Rapier2D boilerplate into a single struct. The arena never
/// touches Rapier directly outside this module.
pub struct PhysicsWorld {
    gravity: nalgebra::Vector2<f32>,
    integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    query_pipeline: QueryPipeline,
    event_collector: DirectEventCollector,
}

impl PhysicsWorld {
    /// Create a new physics world with the given gravity vector.
    /// Coordinates are Y-up: the ground sits below the roof, so everyday
    /// gravity is a negative Y (e.g. `Vec2::new(0.0, -9.81)`).
    pub fn new(gravity: Vec2) -> Self {
        Self {
            gravity: vec2_to_na(gravity),
            integration_parameters: IntegrationParameters::default(),
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            event_collector: DirectEventCollector::new(),
        }
    }

    /// Replace the gravity vector. Takes effect on the next step.
    pub fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity = vec2_to_na(gravity);
    }

    /// Set the integration timestep.
    pub fn set_dt(&mut self, dt: f32) {
        self.integration_parameters.dt = dt;
    }

    /// Create a rigid body + collider and return handles. The table index is
    /// stored in the body's `user_data` so collision events can be resolved
    /// back to indices without scanning. Returns `None` (and inserts
    /// nothing) when the shape cannot produce a collider.
    pub fn create_body(
        &mut self,
        index: BodyIndex,
        desc: &BodyDesc,
        material: ColliderMaterial,
    ) -> Option<PhysicsBody> {
        // Validate the shape before inserting the body: a degenerate hull
        // must not leave an orphaned rigid body behind.
        let collider = desc
            .shape
            .build_collider()?
            .restitution(material.restitution)
            .friction(material.friction)
            .density(material.density)
            .active_events(ActiveEvents::COLLISION_EVENTS)
            .build();

        let rb = RigidBodyBuilder::new(desc.body_type.to_rapier())
            .translation(vec2_to_na(desc.position))
            .rotation(desc.rotation)
            .linvel(vec2_to_na(desc.velocity))
            .ccd_enabled(desc.ccd)
            .user_data(index.0 as u128)
            .build();

        let body_handle = self.bodies.insert(rb);
        let collider_handle =
            self.colliders
                .insert_with_parent(collider, body_handle, &mut self.bodies);

        Some(PhysicsBody {
            body_handle,
            collider_handle,
        })
    }

    /// Remove a body and all its colliders from the simulation.
    pub fn remove_body(&mut self, body: &PhysicsBody) {
        self.bodies.remove(
            body.body_handle,
            &mut self.island_manager,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            true,
        );
    }

    /// Step the simulation and append this step's collision events,
    /// resolved to body-table indices. Events whose colliders no longer
    /// resolve (destroyed between steps) are dropped here.
    pub fn step_into(&mut self, events: &mut Vec<ContactPair>) {
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &self.event_collector,
        );

        for event in self.event_collector.drain_collisions() {
            let (h1, h2, started) = match event {
                CollisionEvent::Started(h1, h2, _) => (h1, h2, true),
                CollisionEvent::Stopped(h1, h2, _) => (h1, h2, false),
            };

            let a = self.collider_to_index(h1);
            let b = self.collider_to_index(h2);

            if let (Some(a), Some(b)) = (a, b) {
                events.push(ContactPair { a, b, started });
            }
        }
    }

    /// Set the linear velocity of a body directly.
    pub fn set_velocity(&mut self, body: &PhysicsBody, vel: Vec2) {
        if let Some(rb) = self.bodies.get_mut(body.body_handle) {
            rb.set_linvel(vec2_to_na(vel), true);
        }
    }

    /// Get the current linear velocity of a body.
    pub fn velocity(&self, body: &PhysicsBody) -> Vec2 {
        self.bodies
            .get(body.body_handle)
            .map(|rb| na_to_vec2(rb.linvel()))
            .unwrap_or(Vec2::ZERO)
    }

    /// Drive the body with a constant acceleration: replaces its external
    /// force with `mass * accel` applied at the center of mass, waking the
    /// body. Repeated calls hold the latest acceleration rather than
    /// stacking forces.
    pub fn accelerate(&mut self, body: &PhysicsBody, accel: Vec2) {
        if let Some(rb) = self.bodies.get_mut(body.body_handle) {
            let force = accel * rb.mass();
            rb.reset_forces(true);
            rb.add_force(vec2_to_na(force), true);
        }
    }

    /// Move a body to a new position, keeping its current rotation.
    pub fn teleport(&mut self, body: &PhysicsBody, pos: Vec2) {
        if let Some(rb) = self.bodies.get_mut(body.body_handle) {
            let rot = rb.rotation().angle();
            rb.set_position(nalgebra::Isometry2::new(vec2_to_na(pos), rot), true);
        }
    }

    /// Override the restitution on the body's collider.
    pub fn set_restitution(&mut self, body: &PhysicsBody, restitution: f32) {
        if let Some(collider) = self.colliders.get_mut(body.collider_handle) {
            collider.set_restitution(restitution);
        }
    }

    /// Current restitution of the body's collider.
    pub fn restitution(&self, body: &PhysicsBody) -> Option<f32> {
        self.colliders
            .get(body.collider_handle)
            .map(|c| c.restitution())
    }

    /// Get the current position and rotation of a body.
    pub fn body_position(&self, body: &PhysicsBody) -> (Vec2, f32) {
        self.bodies
            .get(body.body_handle)
            .map(|rb| na_iso_to_pos_rot(rb.position()))
            .unwrap_or((Vec2::ZERO, 0.0))
    }

    /// Number of rigid bodies currently in the simulation.
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    // -- private helpers --

    fn collider_to_index(&self, collider_handle: ColliderHandle) -> Option<BodyIndex> {
        let collider = self.colliders.get(collider_handle)?;
        let body_handle = collider.parent()?;
        let body = self.bodies.get(body_handle)?;
        Some(BodyIndex(body.user_data as u32))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
