//! Reset handler.
//!
//! Last gameplay system of the frame. On the rising edge of the reset input
//! it queues the registered `"restart_session"` one-shot system, which the
//! schedule applies before the frame ends.

use bevy_ecs::prelude::*;
use log::{info, warn};

use crate::resources::gamestate::GameState;
use crate::resources::input::InputState;
use crate::resources::systemsstore::{RESTART_SESSION, SystemsStore};

pub fn reset_handler(
    input: Res<InputState>,
    state: Res<GameState>,
    systems_store: Res<SystemsStore>,
    mut commands: Commands,
) {
    if !input.reset.just_pressed {
        return;
    }
    match systems_store.get(RESTART_SESSION) {
        Some(id) => {
            info!("restart requested (outcome was {:?})", state.outcome());
            commands.run_system(id);
        }
        None => warn!("reset pressed but '{}' is not registered", RESTART_SESSION),
    }
}
