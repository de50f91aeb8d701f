/// Game tuning parameters for table Pong
///
/// Play-plane coordinates: `x` runs across the table, `z` runs between the
/// top and bottom rails. The table surface sits at a fixed world `y`.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Table
    pub const TABLE_CENTER_X: f32 = 0.0;
    pub const TABLE_CENTER_Z: f32 = 1.25;
    pub const BALL_Y: f32 = -0.575;
    pub const WALL_MIN_Z: f32 = 0.525; // Bottom rail minus ball half-extent
    pub const WALL_MAX_Z: f32 = 1.975; // Top rail minus ball half-extent
    pub const GOAL_X: f32 = 1.225; // Past this the point is lost

    // Paddle
    pub const PADDLE_X: f32 = 1.1; // Mirrored for the left side
    pub const PADDLE_HALF_X: f32 = 0.05;
    pub const PADDLE_HALF_Z: f32 = 0.2;
    pub const PADDLE_MIN_Z: f32 = 0.6;
    pub const PADDLE_MAX_Z: f32 = 1.9;
    pub const PADDLE_SPEED: f32 = 1.5; // units per second

    // Ball
    pub const BALL_HALF_EXTENT: f32 = 0.125;
    pub const SERVE_SPEED: f32 = 2.0;
    pub const SERVE_RANGE: f32 = 2.0; // x-speed drawn from (-range, range)
    pub const SERVE_MIN_X: f32 = 0.5;
    pub const SERVE_MAX_X: f32 = 1.5;
    pub const BOUNCE_INCREMENT: f32 = 0.1; // Added to |v| on every paddle bounce

    // Round
    pub const COUNTDOWN_SECONDS: f32 = 3.0;

    // Score
    pub const WIN_SCORE: u8 = 9; // A score above 8 wins

    // Bouncer variant
    pub const BOUNCER_SPEED_X: f32 = 25.0;
    pub const BOUNCER_SPEED_Z: f32 = 12.5;
    pub const BOUNCER_SPEED_MAX: f32 = 50.0;
    pub const BOUNCER_ADJUST_STEP: f32 = 0.01;
    pub const BOUNCER_ESCAPE_X: f32 = 1.75;
    pub const BOUNCER_ESCAPE_MIN_Z: f32 = 0.0;
    pub const BOUNCER_ESCAPE_MAX_Z: f32 = 2.5;
}
