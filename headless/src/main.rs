mod fsm;
mod input;
mod simulation;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use game_core::bouncer::Bouncer;
use game_core::{Config, Side};

use fsm::{ScreenAction, ScreenFsm};
use input::{handle_bouncer_held, handle_bouncer_press};
use simulation::{LocalGame, LogSink};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    Pong,
    Bouncer,
}

#[derive(Parser)]
#[command(name = "headless")]
#[command(about = "Run the table Pong simulation without a window")]
struct Args {
    #[arg(long, value_enum, default_value_t = Mode::Pong)]
    mode: Mode,

    #[arg(short, long, default_value_t = 12345)]
    seed: u64,

    #[arg(short, long, default_value_t = 60 * 60 * 10)]
    frames: u32,

    #[arg(long, default_value_t = 1.0 / 60.0, help = "Seconds per frame")]
    dt: f32,

    #[arg(short, long, help = "JSON file overriding game tuning")]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = 1, help = "Matches to play back to back")]
    matches: u32,

    #[arg(long, help = "Drive the left paddle from held keys instead of the AI")]
    left_human: bool,

    #[arg(long, help = "Drive the right paddle from held keys instead of the AI")]
    right_human: bool,

    #[arg(long = "hold", help = "Key held for the whole run (repeatable)")]
    held: Vec<String>,

    #[arg(long = "press", help = "Key pressed once before the run (repeatable)")]
    pressed: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if !(args.dt.is_finite() && args.dt >= 0.0) {
        anyhow::bail!("--dt must be a finite, non-negative number of seconds");
    }

    let config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            Config::from_json(&text)
                .with_context(|| format!("loading config {}", path.display()))?
        }
        None => Config::default(),
    };

    match args.mode {
        Mode::Pong => run_pong(&args, config),
        Mode::Bouncer => run_bouncer(&args),
    }

    Ok(())
}

fn run_pong(args: &Args, config: Config) {
    let mut game = LocalGame::new(args.seed, config, !args.left_human, !args.right_human);
    game.hold_keys(&args.held);

    let mut fsm = ScreenFsm::new();
    let started = fsm.transition(ScreenAction::StartMatch);
    debug_assert!(started.success());
    let mut sink = LogSink;
    let mut matches_played = 0;

    log::info!("pong started, seed={}", args.seed);

    for frame in 0..args.frames {
        game.step(args.dt, &mut sink);

        if fsm.is_playing() && frame % 600 == 0 {
            let ball = game.ball();
            log::debug!(
                "ball ({:.3}, {:.3}) paddles {:.2} / {:.2}",
                ball.pos.x,
                ball.pos.y,
                game.paddle_z(Side::Left),
                game.paddle_z(Side::Right)
            );
        }

        if let Some(result) = fsm.sync(game.state.phase) {
            log::debug!(
                "screen {:?} -> {:?} ({:?})",
                result.from_state(),
                result.to_state(),
                result.action()
            );
        }

        if game.state.is_finished() {
            matches_played += 1;
            log::info!(
                "match {matches_played} over: {} - {}",
                game.score.left,
                game.score.right
            );
            if matches_played >= args.matches {
                break;
            }
            if fsm.can_transition(ScreenAction::PlayAgain) {
                fsm.transition(ScreenAction::PlayAgain);
            }
            game.restart();
        }
    }

    if !fsm.is_game_over() {
        log::warn!("frame budget ran out before the match finished");
    }

    println!(
        "final score {} - {} after {:.2}s ({:?})",
        game.score.left,
        game.score.right,
        game.time.now,
        fsm.state()
    );
}

fn run_bouncer(args: &Args) {
    let mut cube = Bouncer::new();
    for key in &args.pressed {
        handle_bouncer_press(key, &mut cube.toggles);
    }

    for frame in 0..args.frames {
        for key in &args.held {
            handle_bouncer_held(key, &mut cube.toggles);
        }
        cube.advance(args.dt);

        if frame % 60 == 0 {
            log::debug!(
                "cube at ({:.3}, {:.3}) speed ({:.2}, {:.2})",
                cube.pos.x,
                cube.pos.y,
                cube.toggles.x,
                cube.toggles.z
            );
        }
    }

    let world = cube.world_pos();
    println!(
        "cube at ({:.3}, {:.3}, {:.3}) with speeds x={:.2} z={:.2}",
        world.x, world.y, world.z, cube.toggles.x, cube.toggles.z
    );
}
