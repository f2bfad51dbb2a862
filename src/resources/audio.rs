//! Audio bridge resource and the sound cue table.
//!
//! The game only ever asks for three cues by id. [`setup_audio`] starts the
//! background thread and queues a load for every entry of [`SOUND_CUES`],
//! resolved against `GameConfig::sound_dir`; [`shutdown_audio`] unloads and
//! joins it. A world without an [`AudioBridge`] still runs and its cue
//! commands stay in `Messages<AudioCmd>` where tests can read them.
//!
//! The cue files are not part of the crate. The host drops them into the
//! sound directory; without it the cues are never loaded and play silently.

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::gameconfig::GameConfig;
use crate::systems::audio::audio_thread;
use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};
use log::info;
use std::path::Path;
use std::thread::JoinHandle;

/// A named sound effect and its file name inside the sound directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundCue {
    pub id: &'static str,
    pub file: &'static str,
}

pub const JUMP_CUE: &str = "jump";
pub const COIN_CUE: &str = "coin";
pub const VICTORY_CUE: &str = "victory";

pub const SOUND_CUES: [SoundCue; 3] = [
    SoundCue {
        id: JUMP_CUE,
        file: "phaseJump5.ogg",
    },
    SoundCue {
        id: COIN_CUE,
        file: "powerUp6.ogg",
    },
    SoundCue {
        id: VICTORY_CUE,
        file: "threeTone2.ogg",
    },
];

impl SoundCue {
    pub fn load_cmd(&self, dir: &Path) -> AudioCmd {
        AudioCmd::LoadFx {
            id: self.id.to_string(),
            path: dir.join(self.file).display().to_string(),
        }
    }
}

/// Load commands for every cue, or none when `dir` does not exist.
pub fn cue_load_cmds(dir: &Path) -> Vec<AudioCmd> {
    if !dir.is_dir() {
        info!(
            "sound directory {} not found; cues will play silently",
            dir.display()
        );
        return Vec::new();
    }
    SOUND_CUES.iter().map(|cue| cue.load_cmd(dir)).collect()
}

/// Channels to and from the audio thread.
#[derive(Resource)]
pub struct AudioBridge {
    /// ECS -> audio thread.
    pub tx_cmd: Sender<AudioCmd>,
    /// Audio thread -> ECS.
    pub rx_msg: Receiver<AudioMessage>,
    pub handle: JoinHandle<()>,
}

impl AudioBridge {
    /// Spawn the audio thread and wire both channels.
    pub fn spawn() -> Self {
        let (tx_cmd, rx_cmd) = unbounded::<AudioCmd>();
        let (tx_msg, rx_msg) = unbounded::<AudioMessage>();
        let handle = std::thread::spawn(move || audio_thread(rx_cmd, tx_msg));
        Self {
            tx_cmd,
            rx_msg,
            handle,
        }
    }

    /// Unload everything, stop the thread and wait for it.
    pub fn shutdown(self) {
        // send errors only mean the thread is already gone
        let _ = self.tx_cmd.send(AudioCmd::UnloadAllFx);
        let _ = self.tx_cmd.send(AudioCmd::Shutdown);
        let _ = self.handle.join();
    }
}

pub fn setup_audio(world: &mut World) {
    world.insert_resource(AudioBridge::spawn());
    world.init_resource::<Messages<AudioMessage>>();
    world.init_resource::<Messages<AudioCmd>>();

    let dir = world
        .get_resource::<GameConfig>()
        .map(|config| config.sound_dir.clone())
        .unwrap_or_else(|| GameConfig::new().sound_dir);
    let mut cmds = world.resource_mut::<Messages<AudioCmd>>();
    for load in cue_load_cmds(&dir) {
        cmds.write(load);
    }
}

/// Returns false when no bridge was installed.
pub fn shutdown_audio(world: &mut World) -> bool {
    match world.remove_resource::<AudioBridge>() {
        Some(bridge) => {
            bridge.shutdown();
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sound_dir_queues_no_loads() {
        assert!(cue_load_cmds(Path::new("no/such/sound/dir")).is_empty());
    }

    #[test]
    fn cue_paths_are_resolved_against_the_dir() {
        let dir = std::env::temp_dir();
        let cmds = cue_load_cmds(&dir);
        assert_eq!(cmds.len(), SOUND_CUES.len());
        assert_eq!(
            cmds[0],
            AudioCmd::LoadFx {
                id: JUMP_CUE.to_string(),
                path: dir.join("phaseJump5.ogg").display().to_string(),
            }
        );
    }
}
