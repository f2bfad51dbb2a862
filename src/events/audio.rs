use bevy_ecs::message::Message;

/// Commands sent *to* the audio collaborator.
///
/// Systems write these into `Messages<AudioCmd>`. When an
/// [`AudioBridge`](crate::resources::audio::AudioBridge) is installed they are
/// forwarded to the audio thread; otherwise they stay queued for inspection.
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioCmd {
    LoadFx { id: String, path: String },
    /// Fire-and-forget cue playback.
    PlayFx { id: String, volume: f32 },
    UnloadAllFx,
    Shutdown,
}

impl AudioCmd {
    pub fn play(id: impl Into<String>, volume: f32) -> Self {
        AudioCmd::PlayFx {
            id: id.into(),
            volume,
        }
    }
}

/// Events sent *back* from the audio thread.
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioMessage {
    FxLoaded { id: String },
    FxLoadFailed { id: String, error: String },
    FxPlayed { id: String },
    FxUnloadedAll,
}
