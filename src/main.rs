//! Pixel Pong entry point
//!
//! Headless demo loop: builds a round from settings, runs ticks at the
//! difficulty-scaled interval, and reports the winner. Usage:
//!
//! ```text
//! pixel-pong [settings.json] [seed]
//! ```
//!
//! `RUST_LOG=debug` shows per-tick collision events.

use std::time::{Duration, SystemTime, UNIX_EPOCH};
use std::{env, fs, process, thread};

use pixel_pong::Settings;
use pixel_pong::sim::tick;

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        log::error!("{err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);

    let settings = match args.next() {
        Some(path) => Settings::from_json(&fs::read_to_string(path)?)?,
        None => Settings::default(),
    };
    let seed = match args.next() {
        Some(raw) => raw.parse()?,
        // No seed given: take one from the wall clock so demo rounds vary.
        None => SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis() as u64,
    };

    let mut state = settings.new_game(seed)?;
    log::info!(
        "round start: {}x{} board, ball at {} moving {}, seed {seed}",
        state.board.width(),
        state.board.height(),
        state.ball.pos,
        state.ball.vel,
    );

    loop {
        let outcome = tick(&mut state);
        log::debug!("ball at {} moving {}", state.ball.pos, state.ball.vel);
        if outcome.is_over {
            log::info!(
                "round over after {} paddle hits, winner: {:?}",
                state.paddle_collisions,
                outcome.winner,
            );
            break;
        }
        let interval = settings.tick_interval_ms(state.paddle_collisions);
        thread::sleep(Duration::from_millis(u64::from(interval)));
    }

    Ok(())
}
