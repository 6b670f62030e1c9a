pub mod api;
pub mod core;
pub mod levels;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::arena::Arena;
pub use api::types::{BodyIndex, BodySnapshot};
pub use core::bodies::BodyStore;
pub use core::bounds::Bounds;
pub use core::physics::{
    BodyDesc, BodyType, ColliderMaterial, ContactPair, PhysicsBody, PhysicsWorld, ShapeDesc,
};
pub use core::time::TickClock;
pub use levels::{load_level, LevelDef, LoadedLevel};
pub use systems::classify::{Category, Classifier};
pub use systems::rules::{contact_outcome, ContactOutcome};
