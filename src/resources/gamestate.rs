//! Session outcome resources.
//!
//! [`GameState`] is the authoritative record of how the current session is
//! going. The outcome tracker is its only writer during play; the reset
//! handler replaces it wholesale on restart. See
//! `crate::events::gamestate::observe_outcome_changed` for how a transition is
//! surfaced to the presentation layer.

use bevy_ecs::prelude::Resource;

/// How the session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameOutcome {
    #[default]
    Playing,
    /// The player touched the flag.
    Won,
    /// The player dropped below the fall threshold.
    Fallen,
}

impl GameOutcome {
    /// `Won` and `Fallen` only change through a reset.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::Playing)
    }
}

/// Authoritative session state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Default)]
pub struct GameState {
    outcome: GameOutcome,
    coins_collected: u32,
}

impl GameState {
    /// Fresh session: playing, no coins.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn coins_collected(&self) -> u32 {
        self.coins_collected
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Move from `Playing` to a terminal outcome.
    ///
    /// Returns `true` only for the call that made the transition. Once
    /// terminal, further calls are ignored.
    pub fn finish(&mut self, outcome: GameOutcome) -> bool {
        if self.outcome.is_terminal() || !outcome.is_terminal() {
            return false;
        }
        self.outcome = outcome;
        true
    }

    pub fn collect_coin(&mut self) {
        self.coins_collected += 1;
    }
}
