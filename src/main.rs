use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

use snowday::game::Game;
use snowday::resources::audio::{setup_audio, shutdown_audio};
use snowday::resources::gameconfig::GameConfig;
use snowday::resources::input::InputScript;
use snowday::resources::level::LevelDefinition;

/// Snow Day, headless platformer core.
#[derive(Parser)]
#[command(version, about = "Runs the Snow Day player-control core without a window.")]
struct Cli {
    /// INI file with tuning constants.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Level JSON. The built-in level is used when omitted.
    #[arg(long, value_name = "PATH")]
    level: Option<PathBuf>,

    /// Scripted input JSON played back instead of a keyboard.
    #[arg(long, value_name = "PATH")]
    script: Option<PathBuf>,

    /// Number of frames to simulate.
    #[arg(long, value_name = "N", default_value_t = 600)]
    frames: u32,

    /// Save the effective configuration to the config path and exit.
    #[arg(long)]
    write_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }

    // Early-exit: write the configuration and quit
    if cli.write_config {
        if let Err(e) = config.save_to_file() {
            error!("{}", e);
            std::process::exit(1);
        }
        println!("Config written to {}", cli.config.display());
        return;
    }

    let level = match &cli.level {
        Some(path) => LevelDefinition::load_from_file(path).unwrap_or_else(|e| {
            warn!("{}; using the built-in level", e);
            LevelDefinition::default()
        }),
        None => LevelDefinition::default(),
    };

    let script = match &cli.script {
        Some(path) => InputScript::load_from_file(path).unwrap_or_else(|e| {
            warn!("{}; running with no input", e);
            InputScript::default()
        }),
        None => InputScript::default(),
    };

    let dt = config.frame_delta();
    let mut game = Game::new(config, level);
    setup_audio(game.world_mut());

    info!(
        "running {} frames at dt={:.4} ({} scripted)",
        cli.frames,
        dt,
        script.len_frames()
    );
    for frame in 0..cli.frames {
        game.step(script.input_at(frame), dt);
    }

    let pos = game.player_position();
    println!("{}", game.status().render());
    println!(
        "outcome={:?} coins={} session={} position=({:.1}, {:.1})",
        game.outcome(),
        game.coins_collected(),
        game.session().generation,
        pos.x,
        pos.y
    );

    if !shutdown_audio(game.world_mut()) {
        warn!("audio bridge was not running at shutdown");
    }
}
