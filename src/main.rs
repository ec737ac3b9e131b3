//! Brick Breaker entry point
//!
//! The playable front end is the wasm build (see `web`). Natively this runs a
//! headless autopilot session: `brick-breaker [config.json] [max-ticks]`.

#[cfg(not(target_arch = "wasm32"))]
use brick_breaker::{Config, ConfigError, Game};

/// Ticks to simulate when no limit is given (~5 minutes at 60 fps)
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_MAX_TICKS: u64 = 60 * 60 * 5;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Brick Breaker (native) starting...");

    let mut args = std::env::args().skip(1);
    let config_path = args.next();
    let max_ticks = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            log::error!("Invalid tick limit: {}", e);
            std::process::exit(2);
        }
        None => DEFAULT_MAX_TICKS,
    };

    if let Err(e) = run(config_path.as_deref(), max_ticks) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn run(config_path: Option<&str>, max_ticks: u64) -> Result<(), ConfigError> {
    use brick_breaker::sim::{GameEvent, autopilot};

    let config = match config_path {
        Some(path) => Config::load(std::path::Path::new(path))?,
        None => Config::default(),
    };

    let mut game = Game::new(config)?;
    let input = game.input();

    input.request_start_or_reset();
    let mut ticks = 0;
    while ticks < max_ticks {
        let controls = autopilot::steer(game.state());
        input.set_held(controls.left_held, controls.right_held);

        for event in game.advance() {
            match event {
                GameEvent::BrickDestroyed { row, column } => {
                    log::debug!("Tick {}: brick ({}, {}) destroyed", ticks, row, column)
                }
                GameEvent::Won => log::info!("You win!"),
                GameEvent::Lost => log::info!("Game over!"),
                _ => log::trace!("Tick {}: {:?}", ticks, event),
            }
        }

        if game.state().phase.is_terminal() {
            break;
        }
        ticks += 1;
    }

    let state = game.state();
    println!(
        "{:?} after {} ticks: score {}/{}",
        state.phase,
        state.time_ticks,
        state.score,
        state.total_bricks()
    );
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::WebGame, this is just to satisfy the compiler
}
