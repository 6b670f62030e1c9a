use glam::Vec2;
use sling_engine::{load_level, Arena, LevelDef, TickClock};

const LEVEL_JSON: &str = include_str!("level.json");
const FRAME_DT: f32 = 1.0 / 60.0;
const MAX_SECONDS: f32 = 20.0;

fn main() {
    env_logger::init();

    let def = match LevelDef::from_json(LEVEL_JSON) {
        Ok(def) => def,
        Err(err) => {
            log::error!("bad level definition: {err}");
            return;
        }
    };

    let mut arena = Arena::new(Vec2::ZERO);
    let loaded = load_level(&mut arena, &def);
    let Some(source) = loaded.source else {
        log::error!("level '{}' has no spawnable source", def.name);
        return;
    };
    log::info!(
        "'{}': {} targets worth {} points",
        def.name,
        loaded.targets.len(),
        loaded.total_target_score
    );

    // Slingshot release: a short rightward drag turned into velocity.
    arena.launch(source, Vec2::new(8.0, 4.0), Vec2::new(8.8, 4.2), FRAME_DT);
    arena.set_bouncing(source, true);

    let mut clock = TickClock::new(FRAME_DT);
    let mut elapsed = 0.0;
    let mut won = false;

    while elapsed < MAX_SECONDS {
        elapsed += FRAME_DT;
        for _ in 0..clock.advance(FRAME_DT) {
            let removed = arena.update(clock.dt()).to_vec();
            for index in removed {
                log::info!(
                    "t={elapsed:.2}s: target {} down, score {}",
                    index.0,
                    arena.score()
                );
            }
        }

        // The liveness poll doubles as the soft wall for the projectile.
        if !arena.is_alive(source) {
            log::warn!("source died unexpectedly");
            break;
        }
        if arena.had_contact(source) {
            log::debug!("source rattled the scenery");
            arena.clear_contacts();
        }
        if loaded.is_won(arena.score()) {
            won = true;
            break;
        }
    }

    let snapshot = arena.snapshot_positions();
    println!(
        "'{}' finished after {elapsed:.1}s: score {}/{} ({}), {} bodies still live",
        def.name,
        arena.score(),
        loaded.total_target_score,
        if won { "won" } else { "time up" },
        snapshot.len()
    );
}
