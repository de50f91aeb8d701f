pub mod audio;
pub mod bouncer;
pub mod components;
pub mod config;
pub mod map;
pub mod params;
pub mod resources;
pub mod systems;

pub use audio::*;
pub use components::*;
pub use config::*;
pub use map::*;
pub use params::*;
pub use resources::*;

use glam::Vec2;
use hecs::{Entity, World};
use systems::*;

/// Run one frame of the table Pong match simulation.
///
/// Motion scales with `time.dt`, so any frame interval works. Returns the
/// winner once the match is over; `events.winner` is only set on the step
/// that decided it.
#[allow(clippy::too_many_arguments)]
pub fn advance(
    world: &mut World,
    time: &mut Time,
    map: &GameMap,
    config: &Config,
    state: &mut MatchState,
    score: &mut Score,
    events: &mut Events,
    input: &mut InputQueue,
    rng: &mut GameRng,
) -> Option<Side> {
    debug_assert!(
        time.dt.is_finite() && time.dt >= 0.0,
        "elapsed time must be finite and non-negative, got {}",
        time.dt
    );

    // Clear events at start of frame
    events.clear();

    // 1. Ingest inputs (paddle positions from the input collaborator)
    ingest_inputs(world, input, config);

    match state.phase {
        // 2. Nothing moves once the match is decided
        RoundPhase::Finished { .. } => {}

        // 3. Ball frozen until the serve
        RoundPhase::Countdown => {
            tick_countdown(world, time, map, config, state, events, rng);
        }

        RoundPhase::Playing => {
            // 4. Move ball
            move_ball(world, time);

            // 5. Check collisions (ball vs paddles, walls)
            check_collisions(world, map, config, events);

            // 6. Check scoring (ball crossed a goal line)
            check_scoring(world, map, config, state, score, events);
        }
    }

    // Update time
    time.now += time.dt;

    state.winner()
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, z: f32, config: &Config) -> Entity {
    world.spawn((Paddle::new(side, config.clamp_paddle_z(z), config),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: Vec2, vel: Vec2, half_extent: f32) -> Entity {
    world.spawn((Ball::new(pos, vel, half_extent), BounceLatch::new()))
}

/// Entities making up one match
#[derive(Debug, Clone, Copy)]
pub struct MatchEntities {
    pub ball: Entity,
    pub left: Entity,
    pub right: Entity,
}

/// Create the ball and both paddles at their starting geometry
pub fn spawn_match(world: &mut World, map: &GameMap, config: &Config) -> MatchEntities {
    let ball = create_ball(world, map.ball_spawn(), Vec2::ZERO, config.ball_half_extent);
    let left = create_paddle(
        world,
        Side::Left,
        map.paddle_spawn(Side::Left, config).y,
        config,
    );
    let right = create_paddle(
        world,
        Side::Right,
        map.paddle_spawn(Side::Right, config).y,
        config,
    );
    MatchEntities { ball, left, right }
}

/// Reset scores and geometry for a fresh match ("play again")
pub fn restart_match(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    state: &mut MatchState,
    score: &mut Score,
) {
    *score = Score::new();

    for (_entity, (ball, latch)) in world.query_mut::<(&mut Ball, &mut BounceLatch)>() {
        ball.pin(map.ball_spawn());
        latch.clear();
    }
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.z = map.paddle_spawn(paddle.side, config).y;
    }

    state.begin_countdown();
    log::info!("match restarted");
}
