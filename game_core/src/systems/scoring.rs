use crate::{Ball, Config, Cue, Events, GameMap, MatchState, RoundPhase, Score, Side};
use hecs::World;

/// Check if the ball crossed a goal line; returns the match winner if this point decided it
pub fn check_scoring(
    world: &World,
    map: &GameMap,
    config: &Config,
    state: &mut MatchState,
    score: &mut Score,
    events: &mut Events,
) -> Option<Side> {
    let ball_x = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.pos.x)?;

    // At most one side can take the point in a single step
    let side = map.scoring_side(ball_x)?;

    score.increment(side);
    events.scored(side);
    events.cue(Cue::GetPoint);
    log::info!("{side:?} player scores ({} - {})", score.left, score.right);

    if let Some(winner) = score.has_winner(config.win_score) {
        state.phase = RoundPhase::Finished { winner };
        events.winner = Some(winner);
        events.cue(Cue::Win);
        log::info!("{winner:?} player wins the match");
        return Some(winner);
    }

    state.begin_countdown();
    None
}
