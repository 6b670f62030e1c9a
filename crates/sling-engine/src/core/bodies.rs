use crate::api::types::BodyIndex;
use crate::core::physics::{PhysicsBody, PhysicsWorld};

/// Index-stable storage of physics handles.
///
/// Slots are appended on creation and tombstoned on destroy — never
/// compacted — so an index handed out once stays dereferenceable (yielding
/// "dead") for the lifetime of the world. `clear` is the only operation
/// that invalidates indices wholesale, on world teardown/reinit.
pub struct BodyStore {
    slots: Vec<Option<PhysicsBody>>,
}

impl BodyStore {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// The index the next `insert` will return. Spawn paths reserve this
    /// before creating the native body so the handle can carry its own
    /// index as `user_data`.
    pub fn next_index(&self) -> BodyIndex {
        BodyIndex(self.slots.len() as u32)
    }

    pub fn insert(&mut self, body: PhysicsBody) -> BodyIndex {
        self.slots.push(Some(body));
        BodyIndex((self.slots.len() - 1) as u32)
    }

    /// `None` for out-of-range or tombstoned slots. Callers treat `None` as
    /// "nothing to do".
    pub fn get(&self, index: BodyIndex) -> Option<PhysicsBody> {
        self.slots.get(index.as_usize()).copied().flatten()
    }

    /// Release the native body and tombstone its slot. Calling again on the
    /// same index is a no-op.
    pub fn destroy(&mut self, physics: &mut PhysicsWorld, index: BodyIndex) {
        if let Some(body) = self.get(index) {
            physics.remove_body(&body);
            self.slots[index.as_usize()] = None;
        }
    }

    /// Table length, tombstones included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Forget every slot. Does not touch the native bodies — world teardown
    /// drops them wholesale.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Iterate over live slots with their indices.
    pub fn iter_live(&self) -> impl Iterator<Item = (BodyIndex, PhysicsBody)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|body| (BodyIndex(i as u32), body)))
    }
}

impl Default for BodyStore {
    fn default() -> Self {
        Self::new()
    }
}
