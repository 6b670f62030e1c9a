use crate::systems::classify::Category;

/// What a begin-contact between two classified bodies means for the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    /// Nothing interesting touched.
    Ignore,
    /// Side A is a target hit by a source: queue it for destruction.
    DestroyA,
    /// Side B is a target hit by a source: queue it for destruction.
    DestroyB,
    /// Side A is a source resting against static scenery: flag it.
    FlagA,
    /// Side B is a source resting against static scenery: flag it.
    FlagB,
}

/// The interaction table. Only pairings involving a source matter; dynamic
/// obstacles (and the unregistered default) never trigger anything, which
/// is what makes contacts from untracked debris harmless.
pub fn contact_outcome(a: Category, b: Category) -> ContactOutcome {
    use Category::*;
    match (a, b) {
        (Source, Target) => ContactOutcome::DestroyB,
        (Target, Source) => ContactOutcome::DestroyA,
        (Source, StaticObstacle) => ContactOutcome::FlagA,
        (StaticObstacle, Source) => ContactOutcome::FlagB,
        _ => ContactOutcome::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Category::*;

    #[test]
    fn source_destroys_target_on_either_side() {
        assert_eq!(contact_outcome(Source, Target), ContactOutcome::DestroyB);
        assert_eq!(contact_outcome(Target, Source), ContactOutcome::DestroyA);
    }

    #[test]
    fn source_flags_against_static_scenery() {
        assert_eq!(contact_outcome(Source, StaticObstacle), ContactOutcome::FlagA);
        assert_eq!(contact_outcome(StaticObstacle, Source), ContactOutcome::FlagB);
    }

    #[test]
    fn everything_else_is_ignored() {
        let all = [Source, Target, Obstacle, StaticObstacle];
        for &a in &all {
            for &b in &all {
                let involves_source = a == Source || b == Source;
                let other = if a == Source { b } else { a };
                let interesting =
                    involves_source && (other == Target || other == StaticObstacle);
                if !interesting {
                    assert_eq!(
                        contact_outcome(a, b),
                        ContactOutcome::Ignore,
                        "{:?} vs {:?}",
                        a,
                        b
                    );
                }
            }
        }
    }

    #[test]
    fn obstacle_never_reacts_to_a_source() {
        // The unregistered default maps to Obstacle, so stray contacts
        // against a source must stay inert.
        assert_eq!(contact_outcome(Source, Obstacle), ContactOutcome::Ignore);
        assert_eq!(contact_outcome(Obstacle, Source), ContactOutcome::Ignore);
    }
}
