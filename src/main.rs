//! Frog Crossing headless driver
//!
//! Feeds the simulation from the demo pilot and reports what happened.
//! Rendering and keyboard input live outside this crate; snapshots can be
//! streamed as JSON lines for an external renderer.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::io::Write;
    use std::path::PathBuf;

    use frog_crossing::Settings;
    use frog_crossing::sim::{Event, GameState, Pilot, reduce};

    env_logger::init();
    log::info!("Frog Crossing (headless) starting...");

    let settings = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => Settings::load(&path),
        None => Settings::default(),
    };
    log::info!(
        "Seed {}, {} events, move chance {}",
        settings.seed,
        settings.events,
        settings.move_chance
    );

    let mut pilot = Pilot::new(settings.seed, settings.move_chance, settings.auto_restart);
    let mut state = GameState::new();
    let mut deaths = 0u32;
    let mut best_level = state.level;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for _ in 0..settings.events {
        let event = pilot.next_event(&state);
        let next = reduce(&state, &event);

        if next.game_over && !state.game_over {
            deaths += 1;
            log::info!(
                "Game over at tick {} (score {}, level {})",
                pilot.ticks(),
                next.score,
                next.level
            );
        }
        if next.level > state.level {
            log::info!("Wave cleared, now level {}", next.level);
        }
        if event == Event::Restart {
            log::info!("Restarted, high score {}", next.high_score);
        }
        best_level = best_level.max(next.level);

        if settings.emit_snapshots {
            match serde_json::to_string(&next) {
                Ok(json) => {
                    if let Err(e) = writeln!(out, "{json}") {
                        log::error!("Failed to write snapshot: {e}");
                        break;
                    }
                }
                Err(e) => log::error!("Failed to serialize snapshot: {e}"),
            }
        }

        state = next;
    }

    let _ = out.flush();
    drop(out);

    println!(
        "Ran {} events ({:.1}s simulated): score {}, high score {}, level {}, best level {}, deaths {}",
        settings.events,
        settings.simulated_secs(pilot.ticks()),
        state.score,
        state.high_score.max(state.score),
        state.level,
        best_level,
        deaths
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The engine is embedded by a host page on the web; nothing to run here
}
