//! Bouncing-cube viewer
//!
//! A cube ricochets around the table box at speeds the user can dial in.
//! There are no paddles, scores or latches here: each axis simply reverses
//! at its bounds and always travels at the current target speed.

use glam::{Vec2, Vec3};

use crate::Params;

/// Which speed target the arrow keys are adjusting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeedAxis {
    #[default]
    X,
    Z,
}

/// User-adjustable target speed magnitudes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedToggles {
    pub x: f32,
    pub z: f32,
    pub selected: SpeedAxis,
}

impl Default for SpeedToggles {
    fn default() -> Self {
        Self {
            x: Params::BOUNCER_SPEED_X,
            z: Params::BOUNCER_SPEED_Z,
            selected: SpeedAxis::X,
        }
    }
}

impl SpeedToggles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adjust the selected target by `delta`
    pub fn nudge(&mut self, delta: f32) {
        match self.selected {
            SpeedAxis::X => self.x += delta,
            SpeedAxis::Z => self.z += delta,
        }
        self.clamp();
    }

    pub fn set(&mut self, axis: SpeedAxis, value: f32) {
        match axis {
            SpeedAxis::X => self.x = value,
            SpeedAxis::Z => self.z = value,
        }
        self.clamp();
    }

    pub fn select_next(&mut self) {
        self.selected = match self.selected {
            SpeedAxis::X => SpeedAxis::Z,
            SpeedAxis::Z => SpeedAxis::X,
        };
    }

    pub fn select_prev(&mut self) {
        // Two entries, so stepping back is the same cycle
        self.select_next();
    }

    fn clamp(&mut self) {
        self.x = self.x.clamp(0.0, Params::BOUNCER_SPEED_MAX);
        self.z = self.z.clamp(0.0, Params::BOUNCER_SPEED_MAX);
    }
}

/// Bounce `v` back when past `max` heading out, or past `min` heading in,
/// then force its magnitude to `target` while keeping the direction.
fn bounce_axis(pos: f32, v: f32, min: f32, max: f32, target: f32) -> f32 {
    let target = target.abs();
    let mut v = v;
    if pos > max && v > 0.0 {
        v = -target;
    }
    if pos < min && v < 0.0 {
        v = target;
    }
    if v > 0.0 {
        target
    } else {
        -target
    }
}

/// The bouncing cube
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bouncer {
    pub pos: Vec2, // play plane: .x = world x, .y = world z
    pub vel: Vec2,
    pub toggles: SpeedToggles,
}

impl Default for Bouncer {
    fn default() -> Self {
        Self::new()
    }
}

impl Bouncer {
    pub fn new() -> Self {
        let toggles = SpeedToggles::new();
        Self {
            pos: Self::center(),
            vel: Vec2::new(toggles.x, toggles.z),
            toggles,
        }
    }

    pub fn center() -> Vec2 {
        Vec2::new(Params::TABLE_CENTER_X, Params::TABLE_CENTER_Z)
    }

    pub fn world_pos(&self) -> Vec3 {
        Vec3::new(self.pos.x, Params::BALL_Y, self.pos.y)
    }

    /// Advance the cube by `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        debug_assert!(
            dt.is_finite() && dt >= 0.0,
            "elapsed time must be non-negative"
        );

        self.pos += self.vel * dt;

        self.vel.x = bounce_axis(
            self.pos.x,
            self.vel.x,
            -Params::GOAL_X,
            Params::GOAL_X,
            self.toggles.x,
        );
        self.vel.y = bounce_axis(
            self.pos.y,
            self.vel.y,
            Params::WALL_MIN_Z,
            Params::WALL_MAX_Z,
            self.toggles.z,
        );

        // A large frame can tunnel past the rails; put the cube back on the table
        if self.escaped() {
            log::debug!(
                "cube escaped at ({:.3}, {:.3}), recentering",
                self.pos.x,
                self.pos.y
            );
            self.pos = Self::center();
        }
    }

    fn escaped(&self) -> bool {
        self.pos.x.abs() > Params::BOUNCER_ESCAPE_X
            || self.pos.y > Params::BOUNCER_ESCAPE_MAX_Z
            || self.pos.y < Params::BOUNCER_ESCAPE_MIN_Z
    }
}
