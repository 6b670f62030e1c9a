use crate::api::types::BodyIndex;

/// Collision-rule role of a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Player-driven projectile. Destroys targets, is never destroyed by
    /// the rules itself.
    Source,
    /// Scoring entity, destroyed on contact with a source.
    Target,
    /// Inert debris. Also the silent default for anything never registered.
    Obstacle,
    /// Immovable scenery (walls, ground, shelves). Contact with a source
    /// raises that source's sticky contact flag.
    StaticObstacle,
}

/// Score value a slot carries before anyone sets one.
pub const DEFAULT_SCORE: i32 = 1;

/// Side table of categories, score values, and contact flags, keyed by the
/// same indices as the body table.
///
/// Storage grows on demand and independently of the body table; an index
/// the table knows but nobody registered reads back as `Obstacle` with the
/// default score, which the contact rules treat as uninteresting. Slots are
/// downgraded in place, never removed — indices must stay stable.
pub struct Classifier {
    categories: Vec<Category>,
    scores: Vec<i32>,
    contact_flags: Vec<bool>,
}

impl Classifier {
    pub fn new() -> Self {
        Self {
            categories: Vec::new(),
            scores: Vec::new(),
            contact_flags: Vec::new(),
        }
    }

    fn grow_to(&mut self, idx: usize) {
        if idx < self.categories.len() {
            return;
        }
        let len = idx + 1;
        self.categories.resize(len, Category::Obstacle);
        self.scores.resize(len, DEFAULT_SCORE);
        self.contact_flags.resize(len, false);
    }

    /// Record the category of an index, growing storage as needed. The
    /// score value is left alone; use `set_score` for that.
    pub fn register(&mut self, index: BodyIndex, category: Category) {
        self.grow_to(index.as_usize());
        self.categories[index.as_usize()] = category;
    }

    /// Set the score value independently of the category.
    pub fn set_score(&mut self, index: BodyIndex, value: i32) {
        self.grow_to(index.as_usize());
        self.scores[index.as_usize()] = value;
    }

    /// `Obstacle` for anything unregistered or out of range — a silent
    /// default, not an error.
    pub fn category_of(&self, index: BodyIndex) -> Category {
        self.categories
            .get(index.as_usize())
            .copied()
            .unwrap_or(Category::Obstacle)
    }

    pub fn score_of(&self, index: BodyIndex) -> i32 {
        self.scores
            .get(index.as_usize())
            .copied()
            .unwrap_or(DEFAULT_SCORE)
    }

    /// Drop a slot back to `Obstacle` in place, so a destroyed body's index
    /// can no longer satisfy the source/target rules.
    pub fn downgrade(&mut self, index: BodyIndex) {
        if let Some(slot) = self.categories.get_mut(index.as_usize()) {
            *slot = Category::Obstacle;
        }
    }

    /// Raise the sticky contact flag. Sticks until `clear_contacts`.
    pub fn mark_contact(&mut self, index: BodyIndex) {
        self.grow_to(index.as_usize());
        self.contact_flags[index.as_usize()] = true;
    }

    pub fn had_contact(&self, index: BodyIndex) -> bool {
        self.contact_flags
            .get(index.as_usize())
            .copied()
            .unwrap_or(false)
    }

    /// Lower every contact flag. Idempotent.
    pub fn clear_contacts(&mut self) {
        self.contact_flags.fill(false);
    }

    /// Forget everything, for world teardown/reinit.
    pub fn clear(&mut self) {
        self.categories.clear();
        self.scores.clear();
        self.contact_flags.clear();
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}
