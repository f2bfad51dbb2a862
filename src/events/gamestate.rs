//! Outcome transition event and observer.
//!
//! The outcome tracker triggers an [`OutcomeChangedEvent`] on the frame the
//! session leaves `Playing`. The observer in this module is the only bridge
//! from that transition to the presentation layer: it rewrites the
//! [`StatusText`].
use crate::resources::gamestate::GameOutcome;
use crate::resources::status::{StatusMessage, StatusText};
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{info, warn};

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeChangedEvent {
    pub outcome: GameOutcome,
}

/// Observer that surfaces a new outcome to the status line.
pub fn observe_outcome_changed(
    trigger: On<OutcomeChangedEvent>,
    status: Option<ResMut<StatusText>>,
) {
    let outcome = trigger.event().outcome;
    let Some(mut status) = status else {
        warn!("StatusText missing while handling {:?}", outcome);
        return;
    };
    status.set(StatusMessage::for_outcome(outcome));
    info!("Outcome {:?}: {}", outcome, status.message.headline());
}
