use bytemuck::{Pod, Zeroable};

/// Stable identifier of a slot in the arena's body table.
///
/// Indices are issued in creation order and never reused: destroying a body
/// tombstones its slot, so a stale index held by a presentation layer keeps
/// dereferencing to "dead" instead of silently aliasing a newer body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyIndex(pub u32);

impl BodyIndex {
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// One entry of the bulk position snapshot.
/// `#[repr(C)]` + Pod so a render layer can upload the whole slice as bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct BodySnapshot {
    pub index: u32,
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
}
