use crate::{AudioSink, Cue, Side};

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: 0.016,
            now: 0.0,
        }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u8,  // Left player score
    pub right: u8, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left = self.left.saturating_add(1),
            Side::Right => self.right = self.right.saturating_add(1),
        }
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Round phase of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Ball pinned to centre, waiting for the serve
    Countdown,
    /// Ball in play
    Playing,
    /// Match over; nothing moves until a restart
    Finished { winner: Side },
}

/// Match lifecycle state owned by the simulation step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchState {
    pub phase: RoundPhase,
    pub countdown_elapsed: f32, // Seconds spent in the current countdown
    pub countdown_announced: bool,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchState {
    pub fn new() -> Self {
        Self {
            phase: RoundPhase::Countdown,
            countdown_elapsed: 0.0,
            countdown_announced: false,
        }
    }

    /// Enter a fresh countdown
    pub fn begin_countdown(&mut self) {
        self.phase = RoundPhase::Countdown;
        self.countdown_elapsed = 0.0;
        self.countdown_announced = false;
    }

    /// Whole seconds left on the countdown display (3, 2, 1, 0)
    pub fn countdown_value(&self, countdown_seconds: f32) -> u32 {
        (countdown_seconds - self.countdown_elapsed.floor()).max(0.0) as u32
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, RoundPhase::Finished { .. })
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            RoundPhase::Finished { winner } => Some(winner),
            _ => None,
        }
    }
}

/// Events that occurred during this step
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub cues: Vec<Cue>,
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub served: bool,
    pub winner: Option<Side>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.cues.clear();
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
        self.served = false;
        self.winner = None;
    }

    pub fn cue(&mut self, cue: Cue) {
        self.cues.push(cue);
    }

    pub fn scored(&mut self, side: Side) {
        match side {
            Side::Left => self.left_scored = true,
            Side::Right => self.right_scored = true,
        }
    }

    /// Hand every queued cue to `sink`
    pub fn drain_into(&mut self, sink: &mut dyn AudioSink) {
        for cue in self.cues.drain(..) {
            sink.play(cue);
        }
    }
}

/// Paddle positions reported by the input collaborator
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub inputs: Vec<(Side, f32)>, // (side, paddle z)
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_input(&mut self, side: Side, z: f32) {
        self.inputs.push((side, z));
    }

    pub fn pop_inputs(&mut self) -> Vec<(Side, f32)> {
        std::mem::take(&mut self.inputs)
    }
}
