//! Keyboard input handling and the computer opponent

use game_core::bouncer::SpeedToggles;
use game_core::{Ball, Config, InputQueue, Params, Side};

/// Handle key down event for the paddle on `side`
pub fn handle_key_down(side: Side, key: &str, current_dir: i8) -> i8 {
    match (side, key) {
        (Side::Left, "w" | "W") | (Side::Right, "ArrowUp") => -1,
        (Side::Left, "s" | "S") | (Side::Right, "ArrowDown") => 1,
        _ => current_dir,
    }
}

/// Held key adjusting the bouncer's selected speed, applied once per frame
pub fn handle_bouncer_held(key: &str, toggles: &mut SpeedToggles) {
    match key {
        "ArrowLeft" => toggles.nudge(-Params::BOUNCER_ADJUST_STEP),
        "ArrowRight" => toggles.nudge(Params::BOUNCER_ADJUST_STEP),
        _ => {}
    }
}

/// Key press switching the bouncer's selected speed
pub fn handle_bouncer_press(key: &str, toggles: &mut SpeedToggles) {
    match key {
        "ArrowUp" => toggles.select_next(),
        "ArrowDown" => toggles.select_prev(),
        _ => {}
    }
}

/// Turns a movement direction into a clamped paddle position
#[derive(Debug, Clone, Copy)]
pub struct PaddleDriver {
    pub side: Side,
    pub z: f32,
    pub dir: i8, // -1 = toward the far rail, 0 = stop, 1 = toward the near rail
}

impl PaddleDriver {
    pub fn new(side: Side, z: f32) -> Self {
        Self { side, z, dir: 0 }
    }

    /// Integrate one frame of movement and report the position to the simulation
    pub fn update(&mut self, dt: f32, config: &Config, queue: &mut InputQueue) {
        self.z = config.clamp_paddle_z(self.z + self.dir as f32 * config.paddle_speed * dt);
        queue.push_input(self.side, self.z);
    }
}

/// Calculate AI input for a paddle
///
/// Strategy:
/// 1. If the ball is heading our way, predict where it crosses our x and steer there.
/// 2. If it is moving away, drift back to the middle to cover the most table.
pub fn calculate_ai_input(ball: &Ball, side: Side, paddle_z: f32, config: &Config) -> i8 {
    let paddle_x = config.paddle_x(side);
    let approaching = match side {
        Side::Left => ball.vel.x < 0.0,
        Side::Right => ball.vel.x > 0.0,
    };

    let target_z = if approaching {
        let time_to_reach = ((paddle_x - ball.pos.x) / ball.vel.x).max(0.0);
        ball.pos.y + ball.vel.y * time_to_reach
    } else {
        Params::TABLE_CENTER_Z
    };

    let diff = config.clamp_paddle_z(target_z) - paddle_z;
    let deadzone = 0.02;
    if diff > deadzone {
        1
    } else if diff < -deadzone {
        -1
    } else {
        0
    }
}
