use game_core::{
    advance, restart_match, spawn_match, AudioSink, Ball, Config, Cue, Events, GameMap, GameRng,
    InputQueue, MatchEntities, MatchState, Paddle, Score, Side, Time,
};
use hecs::World;

use crate::input::{calculate_ai_input, handle_key_down, PaddleDriver};

/// Logs every cue instead of playing it
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn play(&mut self, cue: Cue) {
        log::info!("cue: {}", cue.id());
    }
}

/// Who moves a paddle
#[derive(Debug, Clone, Copy)]
pub struct Controller {
    pub driver: PaddleDriver,
    pub ai: bool,
}

pub struct LocalGame {
    pub world: World,
    pub time: Time,
    pub map: GameMap,
    pub config: Config,
    pub state: MatchState,
    pub score: Score,
    pub events: Events,
    pub input: InputQueue,
    pub rng: GameRng,
    pub entities: MatchEntities,
    pub left: Controller,
    pub right: Controller,
}

impl LocalGame {
    pub fn new(seed: u64, config: Config, left_ai: bool, right_ai: bool) -> Self {
        let map = GameMap::new();
        let mut world = World::new();
        let entities = spawn_match(&mut world, &map, &config);

        let left = Controller {
            driver: PaddleDriver::new(Side::Left, map.paddle_spawn(Side::Left, &config).y),
            ai: left_ai,
        };
        let right = Controller {
            driver: PaddleDriver::new(Side::Right, map.paddle_spawn(Side::Right, &config).y),
            ai: right_ai,
        };

        Self {
            world,
            time: Time::new(0.0, 0.0),
            map,
            config,
            state: MatchState::new(),
            score: Score::new(),
            events: Events::new(),
            input: InputQueue::new(),
            rng: GameRng::new(seed),
            entities,
            left,
            right,
        }
    }

    /// Feed held keys to the human-controlled paddles
    pub fn hold_keys(&mut self, keys: &[String]) {
        for controller in [&mut self.left, &mut self.right] {
            if controller.ai {
                continue;
            }
            for key in keys {
                controller.driver.dir =
                    handle_key_down(controller.driver.side, key, controller.driver.dir);
            }
        }
    }

    /// Run one frame and forward its cues to `sink`
    pub fn step(&mut self, dt: f32, sink: &mut dyn AudioSink) -> Option<Side> {
        let ball = self.ball();

        for controller in [&mut self.left, &mut self.right] {
            if controller.ai {
                controller.driver.dir = calculate_ai_input(
                    &ball,
                    controller.driver.side,
                    controller.driver.z,
                    &self.config,
                );
            }
            controller.driver.update(dt, &self.config, &mut self.input);
        }

        self.time.dt = dt;
        let winner = advance(
            &mut self.world,
            &mut self.time,
            &self.map,
            &self.config,
            &mut self.state,
            &mut self.score,
            &mut self.events,
            &mut self.input,
            &mut self.rng,
        );

        self.events.drain_into(sink);
        winner
    }

    /// Start a fresh match with the same paddles and seed stream
    pub fn restart(&mut self) {
        restart_match(
            &mut self.world,
            &self.map,
            &self.config,
            &mut self.state,
            &mut self.score,
        );
        for controller in [&mut self.left, &mut self.right] {
            controller.driver.z = self.map.paddle_spawn(controller.driver.side, &self.config).y;
        }
    }

    pub fn ball(&self) -> Ball {
        self.world
            .get::<&Ball>(self.entities.ball)
            .map(|ball| *ball)
            .unwrap_or_else(|_| {
                Ball::new(
                    self.map.ball_spawn(),
                    glam::Vec2::ZERO,
                    self.config.ball_half_extent,
                )
            })
    }

    pub fn paddle_z(&self, side: Side) -> f32 {
        let entity = match side {
            Side::Left => self.entities.left,
            Side::Right => self.entities.right,
        };
        self.world
            .get::<&Paddle>(entity)
            .map(|paddle| paddle.z)
            .unwrap_or(self.map.center.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{CueLog, RoundPhase};

    #[test]
    fn test_ai_match_runs_to_a_winner() {
        // AI rallies run long, so play a short match
        let config = Config {
            win_score: 3,
            ..Config::default()
        };
        let mut game = LocalGame::new(2024, config, true, true);
        let mut sink = CueLog::new();

        let mut winner = None;
        let mut frames = 0;
        while !game.state.is_finished() {
            winner = game.step(1.0 / 60.0, &mut sink);
            frames += 1;
            assert!(frames < 60 * 60 * 30, "Match never finished");
        }

        let winner = winner.expect("finished match reports its winner");
        assert_eq!(game.state.winner(), Some(winner));
        assert_eq!(game.score.get(winner), 3);
        assert!(game.score.get(winner.opponent()) < 3);
        assert_eq!(sink.count(Cue::Win), 1);
        assert!(sink.count(Cue::Countdown) >= 3);
    }

    #[test]
    fn test_human_paddle_follows_held_key() {
        let mut game = LocalGame::new(1, Config::new(), false, true);
        game.hold_keys(&["s".to_string()]);
        let start = game.paddle_z(Side::Left);

        game.step(0.1, &mut CueLog::new());

        assert!(game.paddle_z(Side::Left) > start);
    }

    #[test]
    fn test_restart_recenters_paddles() {
        let mut game = LocalGame::new(1, Config::new(), false, false);
        game.hold_keys(&["w".to_string(), "ArrowUp".to_string()]);
        for _ in 0..30 {
            game.step(0.1, &mut CueLog::new());
        }
        assert_eq!(game.paddle_z(Side::Left), game.config.paddle_min_z);

        game.restart();
        game.left.driver.dir = 0;
        game.right.driver.dir = 0;
        game.step(0.016, &mut CueLog::new());

        assert_eq!(game.paddle_z(Side::Left), 1.25);
        assert_eq!(game.paddle_z(Side::Right), 1.25);
        assert_eq!(game.state.phase, RoundPhase::Countdown);
    }
}
