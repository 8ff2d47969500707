use anyhow::Context;
use env_logger::Env;

use introquest::GameConfig;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load(&path)
            .with_context(|| format!("failed to load config from {path}"))?,
        None => GameConfig::default(),
    };
    log::info!("starting {:?} at {}x{}", config.title, config.window_size().0, config.window_size().1);

    introquest::engine::run(config)
}
