use anyhow::Context;
use snake::{App, Settings};
use winit::event_loop::EventLoop;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("snake starting");

    let settings = Settings::load().context("failed to read settings")?;
    let event_loop = EventLoop::new();
    let app = App::init(&event_loop, settings).context("failed to initialize the game")?;

    app.run(event_loop)
}
