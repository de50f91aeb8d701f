use crate::{Aabb, Ball, BounceLatch, Config, Cue, Events, GameMap, Paddle, Side};
use glam::Vec2;
use hecs::World;

/// Axis a paddle contact is resolved on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Z,
}

/// Pick the axis with the shallower penetration. Ties resolve to X.
pub fn collision_axis(depth: Vec2) -> Axis {
    if depth.x <= depth.y {
        Axis::X
    } else {
        Axis::Z
    }
}

/// Grow the speed by `increment` away from zero, then reverse it
pub fn reflect_with_boost(v: f32, increment: f32) -> f32 {
    -(v + v.signum() * increment)
}

/// Check ball collisions with paddles and walls
pub fn check_collisions(world: &mut World, map: &GameMap, config: &Config, events: &mut Events) {
    // Collect paddle boxes first so the ball can be borrowed mutably below
    let mut paddles: Vec<(Side, Aabb)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| {
            (
                p.side,
                Aabb::from_center_half_extents(p.center(config), p.half_extents),
            )
        })
        .collect();
    // Left is always resolved before Right
    paddles.sort_by_key(|(side, _)| *side == Side::Right);

    for (_entity, (ball, latch)) in world.query_mut::<(&mut Ball, &mut BounceLatch)>() {
        resolve_paddle_contact(ball, latch, &paddles, config, events);
        bounce_off_walls(ball, map, events);
    }
}

/// Reflect the ball off the first paddle it overlaps, honouring the per-axis latch
pub fn resolve_paddle_contact(
    ball: &mut Ball,
    latch: &mut BounceLatch,
    paddles: &[(Side, Aabb)],
    config: &Config,
    events: &mut Events,
) {
    let ball_box = Aabb::from_center_half_extents(ball.pos, ball.half_extents);

    let contact = paddles
        .iter()
        .find(|(_, paddle_box)| ball_box.intersects(paddle_box))
        .map(|(side, paddle_box)| (*side, ball_box.overlap_depth(paddle_box)));

    let Some((side, depth)) = contact else {
        // Touching neither paddle ends the contact episode
        latch.clear();
        return;
    };

    let bounced = match collision_axis(depth) {
        Axis::X if !latch.x => {
            ball.vel.x = reflect_with_boost(ball.vel.x, config.bounce_increment);
            latch.x = true;
            true
        }
        Axis::Z if !latch.z => {
            ball.vel.y = reflect_with_boost(ball.vel.y, config.bounce_increment);
            latch.z = true;
            true
        }
        _ => false,
    };

    if bounced {
        log::debug!(
            "ball bounced off {side:?} paddle, vel=({:.3}, {:.3})",
            ball.vel.x,
            ball.vel.y
        );
        events.ball_hit_paddle = true;
        events.cue(Cue::Dink);
    }
}

/// Flip the z-speed when the ball is past a rail and still heading into it
pub fn bounce_off_walls(ball: &mut Ball, map: &GameMap, events: &mut Events) {
    let past_top = ball.pos.y > map.wall_max_z && ball.vel.y > 0.0;
    let past_bottom = ball.pos.y < map.wall_min_z && ball.vel.y < 0.0;
    if past_top || past_bottom {
        ball.vel.y = -ball.vel.y;
        events.ball_hit_wall = true;
    }
}
