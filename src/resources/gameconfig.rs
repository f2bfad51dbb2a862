//! Game configuration resource.
//!
//! Holds the tuning constants of the character, the world, the dust effects
//! and the camera binding. Values come from an INI file; anything missing
//! keeps its default so a partial or absent file still yields a playable
//! setup.
//!
//! # Configuration File Format
//!
//! ```ini
//! [player]
//! acceleration = 559
//! drag = 158
//! jump_velocity = -600
//! max_speed_x = 300
//! max_speed_y = 1000
//! width = 24
//! height = 24
//!
//! [world]
//! gravity = 1500
//! fall_threshold = 700
//!
//! [vfx]
//! particle_velocity = 50
//! walk_trail_offset = 10
//! foot_offset = 7
//! jump_offset_x = 0
//! emissions_per_second = 60
//! lifespan = 0.35
//! jump_max_alive = 20
//!
//! [audio]
//! volume = 1.0
//! sound_dir = assets/sounds
//!
//! [camera]
//! zoom = 2.5
//! lerp = 0.25
//! deadzone = 50
//!
//! [sim]
//! target_fps = 60
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_ACCELERATION: f32 = 559.0;
const DEFAULT_DRAG: f32 = 158.0;
const DEFAULT_JUMP_VELOCITY: f32 = -600.0;
const DEFAULT_MAX_SPEED_X: f32 = 300.0;
const DEFAULT_MAX_SPEED_Y: f32 = 1000.0;
const DEFAULT_PLAYER_SIZE: f32 = 24.0;
const DEFAULT_GRAVITY: f32 = 1500.0;
const DEFAULT_FALL_THRESHOLD: f32 = 700.0;
const DEFAULT_PARTICLE_VELOCITY: f32 = 50.0;
const DEFAULT_WALK_TRAIL_OFFSET: f32 = 10.0;
const DEFAULT_FOOT_OFFSET: f32 = 7.0;
const DEFAULT_JUMP_OFFSET_X: f32 = 0.0;
const DEFAULT_EMISSIONS_PER_SECOND: f32 = 60.0;
const DEFAULT_PARTICLE_LIFESPAN: f32 = 0.35;
const DEFAULT_JUMP_MAX_ALIVE: u32 = 20;
const DEFAULT_VOLUME: f32 = 1.0;
const DEFAULT_CAMERA_ZOOM: f32 = 2.5;
const DEFAULT_CAMERA_LERP: f32 = 0.25;
const DEFAULT_CAMERA_DEADZONE: f32 = 50.0;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";
const DEFAULT_SOUND_DIR: &str = "assets/sounds";

/// Game configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Horizontal acceleration while a direction is held.
    pub acceleration: f32,
    /// Horizontal drag while no direction is held. Expected below `acceleration`.
    pub drag: f32,
    /// Vertical velocity of a jump. Negative is up.
    pub jump_velocity: f32,
    /// Horizontal speed clamp enforced by the physics step.
    pub max_speed_x: f32,
    /// Vertical speed clamp enforced by the physics step.
    pub max_speed_y: f32,
    /// Player collider width.
    pub player_width: f32,
    /// Player collider height.
    pub player_height: f32,
    /// Downward world gravity.
    pub gravity: f32,
    /// Vertical position past which the player has fallen out of the level.
    pub fall_threshold: f32,
    /// Particle speed for both dust emitters.
    pub particle_velocity: f32,
    /// Horizontal distance of the walking dust behind the player.
    pub walk_trail_offset: f32,
    /// Vertical distance from the player center to the feet.
    pub foot_offset: f32,
    /// Horizontal offset of the jumping puffs.
    pub jump_offset_x: f32,
    /// Emission rate of both emitters.
    pub emissions_per_second: f32,
    /// Particle lifespan in seconds.
    pub particle_lifespan: f32,
    /// Max jumping particles alive at once.
    pub jump_max_alive: u32,
    /// Volume of the sound cues, 0.0 to 1.0.
    pub volume: f32,
    /// Directory holding the cue files. Supplied by the host, not shipped.
    pub sound_dir: PathBuf,
    pub camera_zoom: f32,
    pub camera_lerp: f32,
    pub camera_deadzone: f32,
    /// Fixed simulation rate of the headless loop.
    pub target_fps: u32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            acceleration: DEFAULT_ACCELERATION,
            drag: DEFAULT_DRAG,
            jump_velocity: DEFAULT_JUMP_VELOCITY,
            max_speed_x: DEFAULT_MAX_SPEED_X,
            max_speed_y: DEFAULT_MAX_SPEED_Y,
            player_width: DEFAULT_PLAYER_SIZE,
            player_height: DEFAULT_PLAYER_SIZE,
            gravity: DEFAULT_GRAVITY,
            fall_threshold: DEFAULT_FALL_THRESHOLD,
            particle_velocity: DEFAULT_PARTICLE_VELOCITY,
            walk_trail_offset: DEFAULT_WALK_TRAIL_OFFSET,
            foot_offset: DEFAULT_FOOT_OFFSET,
            jump_offset_x: DEFAULT_JUMP_OFFSET_X,
            emissions_per_second: DEFAULT_EMISSIONS_PER_SECOND,
            particle_lifespan: DEFAULT_PARTICLE_LIFESPAN,
            jump_max_alive: DEFAULT_JUMP_MAX_ALIVE,
            volume: DEFAULT_VOLUME,
            sound_dir: PathBuf::from(DEFAULT_SOUND_DIR),
            camera_zoom: DEFAULT_CAMERA_ZOOM,
            camera_lerp: DEFAULT_CAMERA_LERP,
            camera_deadzone: DEFAULT_CAMERA_DEADZONE,
            target_fps: DEFAULT_TARGET_FPS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Fixed frame delta in seconds.
    pub fn frame_delta(&self) -> f32 {
        1.0 / self.target_fps.max(1) as f32
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let text = std::fs::read_to_string(&self.config_path).map_err(|e| {
            format!(
                "Failed to load config file {}: {}",
                self.config_path.display(),
                e
            )
        })?;
        self.load_from_str(&text)?;

        info!(
            "Loaded config: accel={}, drag={}, jump={}, gravity={}, fall_threshold={}, fps={}",
            self.acceleration,
            self.drag,
            self.jump_velocity,
            self.gravity,
            self.fall_threshold,
            self.target_fps
        );
        Ok(())
    }

    /// Load configuration from INI text instead of a file.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        self.check_tuning();
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        let float = |section: &str, key: &str, slot: &mut f32| {
            if let Some(value) = config.getfloat(section, key).ok().flatten() {
                *slot = value as f32;
            }
        };

        // [player] section
        float("player", "acceleration", &mut self.acceleration);
        float("player", "drag", &mut self.drag);
        float("player", "jump_velocity", &mut self.jump_velocity);
        float("player", "max_speed_x", &mut self.max_speed_x);
        float("player", "max_speed_y", &mut self.max_speed_y);
        float("player", "width", &mut self.player_width);
        float("player", "height", &mut self.player_height);

        // [world] section
        float("world", "gravity", &mut self.gravity);
        float("world", "fall_threshold", &mut self.fall_threshold);

        // [vfx] section
        float("vfx", "particle_velocity", &mut self.particle_velocity);
        float("vfx", "walk_trail_offset", &mut self.walk_trail_offset);
        float("vfx", "foot_offset", &mut self.foot_offset);
        float("vfx", "jump_offset_x", &mut self.jump_offset_x);
        float("vfx", "emissions_per_second", &mut self.emissions_per_second);
        float("vfx", "lifespan", &mut self.particle_lifespan);
        if let Some(max) = config.getuint("vfx", "jump_max_alive").ok().flatten() {
            self.jump_max_alive = max as u32;
        }

        // [audio] section
        float("audio", "volume", &mut self.volume);
        self.volume = self.volume.clamp(0.0, 1.0);
        if let Some(dir) = config.get("audio", "sound_dir") {
            self.sound_dir = PathBuf::from(dir);
        }

        // [camera] section
        float("camera", "zoom", &mut self.camera_zoom);
        float("camera", "lerp", &mut self.camera_lerp);
        float("camera", "deadzone", &mut self.camera_deadzone);

        // [sim] section
        if let Some(fps) = config.getuint("sim", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
    }

    /// Warn about tuning that loses the sliding stop.
    fn check_tuning(&self) {
        if self.drag >= self.acceleration {
            warn!(
                "drag ({}) is not below acceleration ({}); the character will stop abruptly",
                self.drag, self.acceleration
            );
        }
        if self.jump_velocity >= 0.0 {
            warn!(
                "jump_velocity ({}) is not negative; jumps will not go up",
                self.jump_velocity
            );
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();
        let mut set = |section: &str, key: &str, value: String| {
            config.set(section, key, Some(value));
        };

        // [player] section
        set("player", "acceleration", self.acceleration.to_string());
        set("player", "drag", self.drag.to_string());
        set("player", "jump_velocity", self.jump_velocity.to_string());
        set("player", "max_speed_x", self.max_speed_x.to_string());
        set("player", "max_speed_y", self.max_speed_y.to_string());
        set("player", "width", self.player_width.to_string());
        set("player", "height", self.player_height.to_string());

        // [world] section
        set("world", "gravity", self.gravity.to_string());
        set("world", "fall_threshold", self.fall_threshold.to_string());

        // [vfx] section
        set("vfx", "particle_velocity", self.particle_velocity.to_string());
        set("vfx", "walk_trail_offset", self.walk_trail_offset.to_string());
        set("vfx", "foot_offset", self.foot_offset.to_string());
        set("vfx", "jump_offset_x", self.jump_offset_x.to_string());
        set(
            "vfx",
            "emissions_per_second",
            self.emissions_per_second.to_string(),
        );
        set("vfx", "lifespan", self.particle_lifespan.to_string());
        set("vfx", "jump_max_alive", self.jump_max_alive.to_string());

        // [audio] section
        set("audio", "volume", self.volume.to_string());
        set("audio", "sound_dir", self.sound_dir.display().to_string());

        // [camera] section
        set("camera", "zoom", self.camera_zoom.to_string());
        set("camera", "lerp", self.camera_lerp.to_string());
        set("camera", "deadzone", self.camera_deadzone.to_string());

        // [sim] section
        set("sim", "target_fps", self.target_fps.to_string());

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}
