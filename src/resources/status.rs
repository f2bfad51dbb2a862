//! Status line shown to the player by the presentation layer.

use bevy_ecs::prelude::Resource;

use crate::resources::gamestate::GameOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusMessage {
    #[default]
    Welcome,
    LevelComplete,
    GameOver,
}

impl StatusMessage {
    pub fn for_outcome(outcome: GameOutcome) -> Self {
        match outcome {
            GameOutcome::Playing => StatusMessage::Welcome,
            GameOutcome::Won => StatusMessage::LevelComplete,
            GameOutcome::Fallen => StatusMessage::GameOver,
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            StatusMessage::Welcome => "Welcome to Snow Day! Reach the end and touch the flag!",
            StatusMessage::LevelComplete => "Level Complete!!!",
            StatusMessage::GameOver => "Game Over!!!",
        }
    }

    pub fn detail(self) -> &'static str {
        match self {
            StatusMessage::Welcome => "Use the arrow keys to jump and move!",
            StatusMessage::LevelComplete => "Press R to play again!",
            StatusMessage::GameOver => "Press R to restart and try again!",
        }
    }
}

/// Current status text. Written on outcome transitions and on restart.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusText {
    pub message: StatusMessage,
}

impl StatusText {
    pub fn set(&mut self, message: StatusMessage) {
        self.message = message;
    }

    pub fn render(&self) -> String {
        format!("{}\n{}", self.message.headline(), self.message.detail())
    }
}
