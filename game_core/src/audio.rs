//! Audio cue port
//!
//! The simulation only names the sounds it wants; playing them is up to
//! whatever sink the host plugs in.

use serde::{Deserialize, Serialize};

/// Sound cues raised by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cue {
    /// Countdown started before a serve
    Countdown,
    /// Ball hit a paddle
    Dink,
    /// A point was scored
    GetPoint,
    /// A player won the match
    Win,
}

impl Cue {
    /// Stable identifier used by asset tables
    pub fn id(&self) -> &'static str {
        match self {
            Cue::Countdown => "countdown",
            Cue::Dink => "dink",
            Cue::GetPoint => "getPoint",
            Cue::Win => "win",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "countdown" => Some(Cue::Countdown),
            "dink" => Some(Cue::Dink),
            "getPoint" => Some(Cue::GetPoint),
            "win" => Some(Cue::Win),
            _ => None,
        }
    }
}

/// Fire-and-forget receiver for cues. Implementations must not block.
pub trait AudioSink {
    fn play(&mut self, cue: Cue);
}

/// Discards every cue
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl AudioSink for NullSink {
    fn play(&mut self, _cue: Cue) {}
}

/// Records cues in arrival order
#[derive(Debug, Clone, Default)]
pub struct CueLog {
    pub cues: Vec<Cue>,
}

impl CueLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, cue: Cue) -> usize {
        self.cues.iter().filter(|c| **c == cue).count()
    }
}

impl AudioSink for CueLog {
    fn play(&mut self, cue: Cue) {
        self.cues.push(cue);
    }
}
