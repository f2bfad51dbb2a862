//! Audio systems and the background audio thread.
//!
//! - [`audio_thread`] runs on its own OS thread and processes
//!   [`AudioCmd`] messages, answering with [`AudioMessage`]s. Mixing is out of
//!   scope here: the thread tracks which cues are loaded and logs playback.
//! - [`forward_audio_cmds`] hands queued commands to the thread when an
//!   [`AudioBridge`] exists.
//! - [`poll_audio_messages`] drains the thread's replies into ECS messages.
//!
//! See also: [`crate::events::audio`] and [`crate::resources::audio`].

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::audio::AudioBridge;
use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender};
use log::{debug, info, warn};
use rustc_hash::FxHashMap;

/// Drain pending replies from the audio thread into `Messages<AudioMessage>`.
pub fn poll_audio_messages(
    bridge: Option<Res<AudioBridge>>,
    mut writer: MessageWriter<AudioMessage>,
) {
    if let Some(bridge) = bridge {
        writer.write_batch(bridge.rx_msg.try_iter());
    }
}

/// Advance the ECS message queue for [`AudioMessage`].
pub fn update_bevy_audio_messages(mut msgs: ResMut<Messages<AudioMessage>>) {
    msgs.update();
}

/// Forward ECS [`AudioCmd`] messages to the audio thread.
///
/// Without a bridge the commands are left in the queue and are readable
/// until the queue ages them out.
pub fn forward_audio_cmds(bridge: Option<Res<AudioBridge>>, mut reader: MessageReader<AudioCmd>) {
    let Some(bridge) = bridge else {
        return;
    };
    for cmd in reader.read() {
        // Ignore send errors on shutdown
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Advance the ECS message queue for [`AudioCmd`].
pub fn update_bevy_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}

/// Entry point of the dedicated audio thread.
///
/// Blocks on the command channel until it receives [`AudioCmd::Shutdown`]
/// or every sender is gone.
pub fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_msg: Sender<AudioMessage>) {
    info!("audio thread starting (id={:?})", std::thread::current().id());

    let mut sounds: FxHashMap<String, String> = FxHashMap::default();

    for cmd in rx_cmd.iter() {
        match cmd {
            AudioCmd::LoadFx { id, path } => {
                if std::path::Path::new(&path).is_file() {
                    debug!("fx loaded id='{}' path='{}'", id, path);
                    sounds.insert(id.clone(), path);
                    let _ = tx_msg.send(AudioMessage::FxLoaded { id });
                } else {
                    warn!("fx load failed id='{}' path='{}'", id, path);
                    let _ = tx_msg.send(AudioMessage::FxLoadFailed {
                        id,
                        error: format!("file not found: {}", path),
                    });
                }
            }
            AudioCmd::PlayFx { id, volume } => {
                if sounds.contains_key(&id) {
                    debug!("fx play id='{}' volume={}", id, volume);
                } else {
                    debug!("fx play id='{}' volume={} (not loaded)", id, volume);
                }
                let _ = tx_msg.send(AudioMessage::FxPlayed { id });
            }
            AudioCmd::UnloadAllFx => {
                debug!("fx unload all");
                sounds.clear();
                let _ = tx_msg.send(AudioMessage::FxUnloadedAll);
            }
            AudioCmd::Shutdown => {
                debug!("audio shutdown requested");
                break;
            }
        }
    }

    info!("audio thread exiting (id={:?})", std::thread::current().id());
}
