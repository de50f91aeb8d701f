//! Screen State Machine
//!
//! Tracks which screen the player is looking at and follows the round phase
//! reported by the simulation.

use game_core::{RoundPhase, Side};

/// Screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start,
    Countdown,
    Playing,
    Won { winner: Side },
}

/// Actions that trigger screen transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    StartMatch,
    CountdownDone,
    PointScored,
    MatchWon(Side),
    PlayAgain,
    Quit,
}

/// Result of a state transition
#[derive(Debug, Clone)]
pub struct TransitionResult {
    success: bool,
    from_state: Screen,
    to_state: Screen,
    action: ScreenAction,
}

impl TransitionResult {
    pub fn success(&self) -> bool {
        self.success
    }

    #[allow(clippy::wrong_self_convention)]
    pub fn from_state(&self) -> Screen {
        self.from_state
    }

    pub fn to_state(&self) -> Screen {
        self.to_state
    }

    pub fn action(&self) -> ScreenAction {
        self.action
    }
}

/// Screen Finite State Machine
pub struct ScreenFsm {
    state: Screen,
}

impl ScreenFsm {
    pub fn new() -> Self {
        Self {
            state: Screen::Start,
        }
    }

    /// Get current state
    pub fn state(&self) -> Screen {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: ScreenAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: ScreenAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    /// Follow a round phase change from the simulation, if it implies one
    pub fn sync(&mut self, phase: RoundPhase) -> Option<TransitionResult> {
        let action = match (self.state, phase) {
            (Screen::Countdown, RoundPhase::Playing) => ScreenAction::CountdownDone,
            (Screen::Playing, RoundPhase::Countdown) => ScreenAction::PointScored,
            (Screen::Playing, RoundPhase::Finished { winner }) => ScreenAction::MatchWon(winner),
            _ => return None,
        };
        Some(self.transition(action))
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: ScreenAction) -> Option<Screen> {
        match (self.state, action) {
            // From Start
            (Screen::Start, ScreenAction::StartMatch) => Some(Screen::Countdown),

            // From Countdown
            (Screen::Countdown, ScreenAction::CountdownDone) => Some(Screen::Playing),
            (Screen::Countdown, ScreenAction::Quit) => Some(Screen::Start),

            // From Playing
            (Screen::Playing, ScreenAction::PointScored) => Some(Screen::Countdown),
            (Screen::Playing, ScreenAction::MatchWon(winner)) => Some(Screen::Won { winner }),
            (Screen::Playing, ScreenAction::Quit) => Some(Screen::Start),

            // From Won
            (Screen::Won { .. }, ScreenAction::PlayAgain) => Some(Screen::Countdown),
            (Screen::Won { .. }, ScreenAction::Quit) => Some(Screen::Start),

            // Invalid transition
            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.state, Screen::Playing)
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.state, Screen::Won { .. })
    }
}

impl Default for ScreenFsm {
    fn default() -> Self {
        Self::new()
    }
}
