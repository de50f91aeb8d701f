use glam::{Vec2, Vec3};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Config, GameRng, Params};

/// Which end of the table a paddle (or a point) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub z: f32, // Z position (clamped to the playable range)
    pub half_extents: Vec2,
}

impl Paddle {
    pub fn new(side: Side, z: f32, config: &Config) -> Self {
        Self {
            side,
            z,
            half_extents: Vec2::new(config.paddle_half_x, config.paddle_half_z),
        }
    }

    /// Play-plane centre of the paddle
    pub fn center(&self, config: &Config) -> Vec2 {
        Vec2::new(config.paddle_x(self.side), self.z)
    }
}

/// Ball component - the pong ball
///
/// `pos` and `vel` live in the play plane: `.x` is world x, `.y` is world z.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub half_extents: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, half_extent: f32) -> Self {
        Self {
            pos,
            vel,
            half_extents: Vec2::splat(half_extent),
        }
    }

    /// Lift the play-plane position onto the table surface
    pub fn world_pos(&self) -> Vec3 {
        Vec3::new(self.pos.x, Params::BALL_Y, self.pos.y)
    }

    /// Pin the ball to `center` and stop it
    pub fn pin(&mut self, center: Vec2) {
        self.pos = center;
        self.vel = Vec2::ZERO;
    }

    /// Give the ball a fresh serve velocity
    pub fn serve(&mut self, config: &Config, rng: &mut GameRng) {
        self.vel = serve_velocity(config, rng);
    }
}

/// Draw a serve velocity with constant speed and a bounded angle.
///
/// The x-speed is drawn uniformly from `(-serve_range, serve_range)` and redrawn
/// until its magnitude falls inside `[serve_min_x, serve_max_x]`. The z-speed
/// takes whatever magnitude keeps the total speed at `serve_speed`, with a
/// random sign.
pub fn serve_velocity(config: &Config, rng: &mut GameRng) -> Vec2 {
    let range = config.serve_range;
    let vx = loop {
        let candidate: f32 = rng.0.gen_range(-range..range);
        let magnitude = candidate.abs();
        if magnitude >= config.serve_min_x && magnitude <= config.serve_max_x {
            break candidate;
        }
    };

    let speed_sq = config.serve_speed * config.serve_speed;
    let vz_magnitude = (speed_sq - vx * vx).max(0.0).sqrt();
    let vz = if rng.0.gen_bool(0.5) {
        vz_magnitude
    } else {
        -vz_magnitude
    };

    log::debug!("serve drawn: vx={vx:.3} vz={vz:.3}");
    Vec2::new(vx, vz)
}

/// Per-axis collision latch carried by the ball entity.
///
/// Set when that axis bounces off a paddle; cleared on the first frame the
/// ball overlaps neither paddle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BounceLatch {
    pub x: bool,
    pub z: bool,
}

impl BounceLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.x = false;
        self.z = false;
    }
}
