use crate::{Ball, BounceLatch, Config, Cue, Events, GameMap, GameRng, MatchState, RoundPhase, Time};
use hecs::World;

/// Run one countdown frame: pin and announce on entry, serve once the timer runs out
pub fn tick_countdown(
    world: &mut World,
    time: &Time,
    map: &GameMap,
    config: &Config,
    state: &mut MatchState,
    events: &mut Events,
    rng: &mut GameRng,
) {
    if state.phase != RoundPhase::Countdown {
        return;
    }

    if !state.countdown_announced {
        for (_entity, (ball, latch)) in world.query_mut::<(&mut Ball, &mut BounceLatch)>() {
            ball.pin(map.ball_spawn());
            latch.clear();
        }
        state.countdown_announced = true;
        events.cue(Cue::Countdown);
        log::debug!("countdown started");
    }

    state.countdown_elapsed += time.dt;

    if state.countdown_elapsed >= config.countdown_seconds {
        for (_entity, (ball, latch)) in world.query_mut::<(&mut Ball, &mut BounceLatch)>() {
            ball.serve(config, rng);
            latch.clear();
        }
        state.phase = RoundPhase::Playing;
        state.countdown_elapsed = 0.0;
        state.countdown_announced = false;
        events.served = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec2;

    fn setup_world() -> (World, Config, GameMap, MatchState, Events, GameRng, hecs::Entity) {
        let mut world = World::new();
        let config = Config::new();
        let ball = create_ball(
            &mut world,
            Vec2::new(1.3, 1.0),
            Vec2::new(1.0, 0.5),
            config.ball_half_extent,
        );
        (
            world,
            config,
            GameMap::new(),
            MatchState::new(),
            Events::new(),
            GameRng::new(12345),
            ball,
        )
    }

    #[test]
    fn test_first_frame_pins_ball_and_announces() {
        let (mut world, config, map, mut state, mut events, mut rng, entity) = setup_world();

        tick_countdown(
            &mut world,
            &Time::new(0.1, 0.0),
            &map,
            &config,
            &mut state,
            &mut events,
            &mut rng,
        );

        let ball = *world.get::<&Ball>(entity).unwrap();
        assert_eq!(ball.pos, map.ball_spawn());
        assert_eq!(ball.vel, Vec2::ZERO);
        assert_eq!(events.cues, vec![Cue::Countdown]);
        assert_eq!(state.phase, RoundPhase::Countdown);
        assert_eq!(state.countdown_value(config.countdown_seconds), 3);
    }

    #[test]
    fn test_countdown_cue_fires_once() {
        let (mut world, config, map, mut state, mut events, mut rng, _) = setup_world();
        let time = Time::new(0.5, 0.0);

        for _ in 0..4 {
            tick_countdown(
                &mut world,
                &time,
                &map,
                &config,
                &mut state,
                &mut events,
                &mut rng,
            );
        }

        assert_eq!(
            events.cues.iter().filter(|c| **c == Cue::Countdown).count(),
            1
        );
        assert_eq!(state.countdown_value(config.countdown_seconds), 1);
    }

    #[test]
    fn test_serves_after_three_seconds() {
        let (mut world, config, map, mut state, mut events, mut rng, entity) = setup_world();
        let time = Time::new(1.0, 0.0);

        tick_countdown(
            &mut world,
            &time,
            &map,
            &config,
            &mut state,
            &mut events,
            &mut rng,
        );
        tick_countdown(
            &mut world,
            &time,
            &map,
            &config,
            &mut state,
            &mut events,
            &mut rng,
        );
        assert_eq!(state.phase, RoundPhase::Countdown);
        assert!(!events.served);

        tick_countdown(
            &mut world,
            &time,
            &map,
            &config,
            &mut state,
            &mut events,
            &mut rng,
        );

        assert_eq!(state.phase, RoundPhase::Playing);
        assert!(events.served);
        assert_eq!(state.countdown_elapsed, 0.0);
        assert!(!state.countdown_announced);
        let ball = *world.get::<&Ball>(entity).unwrap();
        assert_eq!(ball.pos, map.ball_spawn(), "Serve does not move the ball");
        assert!((ball.vel.length() - config.serve_speed).abs() < 1e-4);
    }

    #[test]
    fn test_noop_outside_countdown() {
        let (mut world, config, map, mut state, mut events, mut rng, entity) = setup_world();
        state.phase = RoundPhase::Playing;

        tick_countdown(
            &mut world,
            &Time::new(5.0, 0.0),
            &map,
            &config,
            &mut state,
            &mut events,
            &mut rng,
        );

        assert!(events.cues.is_empty());
        assert_eq!(world.get::<&Ball>(entity).unwrap().pos, Vec2::new(1.3, 1.0));
    }
}
