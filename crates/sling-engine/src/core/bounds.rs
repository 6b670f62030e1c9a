use glam::Vec2;

/// Rectangular playfield limits: left/right walls, ground, and roof.
///
/// All four edges default to zero; the boundary builders on `Arena` (or an
/// explicit `set_bounds`) are the only writers. Spawning outside the
/// rectangle is an error, drifting outside during simulation is recoverable
/// — that asymmetry is intentional.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub left: f32,
    pub right: f32,
    pub ground: f32,
    pub roof: f32,
}

impl Bounds {
    pub fn new(left: f32, right: f32, ground: f32, roof: f32) -> Self {
        Self {
            left,
            right,
            ground,
            roof,
        }
    }

    /// Spawn-time predicate. Positions exactly on an edge count as inside.
    pub fn contains(&self, p: Vec2) -> bool {
        p.y >= self.ground && p.y <= self.roof && p.x >= self.left && p.x <= self.right
    }

    /// Move each out-of-range coordinate to the nearest edge, one axis at a
    /// time. Returns the corrected point and whether anything moved.
    /// Per-axis checks keep degenerate rectangles (edges still at their
    /// defaults) from panicking the way `f32::clamp` would.
    pub fn clamp(&self, p: Vec2) -> (Vec2, bool) {
        let mut c = p;
        let mut moved = false;
        if p.x < self.left {
            c.x = self.left;
            moved = true;
        }
        if p.x > self.right {
            c.x = self.right;
            moved = true;
        }
        if p.y < self.ground {
            c.y = self.ground;
            moved = true;
        }
        if p.y > self.roof {
            c.y = self.roof;
            moved = true;
        }
        (c, moved)
    }
}
