use glam::Vec2;

use crate::{Config, Params, Side};

/// Axis-aligned bounding box in the play plane
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center_half_extents(center: Vec2, half: Vec2) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn half_extents(&self) -> Vec2 {
        (self.max - self.min) * 0.5
    }

    /// Penetration depth on each axis (positive when the boxes overlap on that axis)
    pub fn overlap_depth(&self, other: &Aabb) -> Vec2 {
        let reach = self.half_extents() + other.half_extents();
        let gap = (self.center() - other.center()).abs();
        reach - gap
    }

    /// Boxes touch only when they overlap on both axes
    pub fn intersects(&self, other: &Aabb) -> bool {
        let depth = self.overlap_depth(other);
        depth.x > 0.0 && depth.y > 0.0
    }
}

/// Table geometry
#[derive(Debug, Clone)]
pub struct GameMap {
    pub center: Vec2,
    pub wall_min_z: f32,
    pub wall_max_z: f32,
    pub goal_x: f32,
}

impl Default for GameMap {
    fn default() -> Self {
        Self::new()
    }
}

impl GameMap {
    pub fn new() -> Self {
        Self {
            center: Vec2::new(Params::TABLE_CENTER_X, Params::TABLE_CENTER_Z),
            wall_min_z: Params::WALL_MIN_Z,
            wall_max_z: Params::WALL_MAX_Z,
            goal_x: Params::GOAL_X,
        }
    }

    /// Where the ball rests during a countdown
    pub fn ball_spawn(&self) -> Vec2 {
        self.center
    }

    /// Starting position for a paddle
    pub fn paddle_spawn(&self, side: Side, config: &Config) -> Vec2 {
        Vec2::new(config.paddle_x(side), config.clamp_paddle_z(self.center.y))
    }

    /// Side that wins the point if the ball sits at `x`
    pub fn scoring_side(&self, x: f32) -> Option<Side> {
        if x > self.goal_x {
            Some(Side::Left)
        } else if x < -self.goal_x {
            Some(Side::Right)
        } else {
            None
        }
    }
}
