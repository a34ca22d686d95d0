//! Asteroids headless host
//!
//! Drives the game loop without a window: scripted keyboard input, a
//! vertex-buffer canvas, and a fixed frame time. Useful for soak runs and
//! for checking tuning files.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use asteroids::input::{Action, KeySnapshot};
use asteroids::renderer::LineBatch;
use asteroids::{Game, Screen, Settings, Tuning};

#[derive(Parser)]
#[command(name = "asteroids")]
#[command(about = "Run the Asteroids simulation headless with a scripted pilot")]
struct Args {
    /// Settings JSON (window size, debug overlay, seed)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Tuning JSON (gameplay constants)
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// RNG seed (overrides the settings file)
    #[arg(long)]
    seed: Option<u64>,

    /// Frames to simulate
    #[arg(long, default_value_t = 3600)]
    frames: u32,

    /// Seconds per frame
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Draw collision circles
    #[arg(long)]
    debug: bool,
}

/// Keys for a frame: start the game, then spin slowly and fire in bursts
fn scripted_keys(frame: u32, screen: Screen) -> KeySnapshot {
    match screen {
        Screen::Menu | Screen::Paused => KeySnapshot::new().press(Action::Confirm),
        Screen::Playing => {
            let mut keys = KeySnapshot::new().hold(Action::TurnRight);
            if frame % 12 == 0 {
                keys = keys.press(Action::Fire);
            }
            if frame % 240 < 30 {
                keys = keys.hold(Action::Thrust);
            }
            keys
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let mut settings = match &args.settings {
        Some(path) => match Settings::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Bad settings file: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => Settings::default(),
    };
    settings.debug_collision |= args.debug;

    let tuning = match &args.tuning {
        Some(path) => match Tuning::load(path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("Bad tuning file: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => Tuning::default(),
    };
    if let Err(e) = tuning.validate_field(&settings.field()) {
        log::warn!("Tuning does not fit a {}x{} field: {e}", settings.width, settings.height);
        return ExitCode::FAILURE;
    }

    let seed = args.seed.or(settings.seed).unwrap_or_else(rand::random);
    log::info!(
        "Asteroids (headless) starting: {}x{} @ {}x, seed {}",
        settings.width,
        settings.height,
        settings.pixel_scale,
        seed
    );

    let mut game = Game::new(settings, tuning, seed);
    let mut canvas = LineBatch::new();
    let mut best = 0;
    let mut deaths = 0;

    for frame in 0..args.frames {
        let keys = scripted_keys(frame, game.screen);
        game.frame(args.dt, &keys, &mut canvas);

        if game.world.ship_destroyed {
            best = best.max(game.world.score);
            deaths += 1;
        }
        if frame % 600 == 0 {
            log::debug!(
                "frame {frame}: score {}, {} asteroids, {} bullets, {} segments",
                game.world.score,
                game.world.asteroids.len(),
                game.world.bullets.len(),
                canvas.segment_count()
            );
        }
    }
    best = best.max(game.world.score);

    println!(
        "{} frames: score {}, best {}, waves {}, deaths {}",
        args.frames, game.world.score, best, game.world.wave, deaths
    );
    ExitCode::SUCCESS
}
