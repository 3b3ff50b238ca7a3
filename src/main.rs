use std::time::Duration;

use crate::{
    app::App, config::Config, event::Event, player::SimulatedPlayer, utils::spawn_input_emitter,
};

mod app;
mod components;
mod config;
mod event;
mod models;
mod observer;
mod player;
mod store;
mod utils;

fn main() -> color_eyre::Result<()> {
    env_logger::init();

    let mut terminal = ratatui::init();

    let (event_tx, event_rx) = crossbeam_channel::unbounded();

    spawn_input_emitter(event_tx.clone());

    let player = SimulatedPlayer::new();
    player.clone().run(Duration::from_secs(10));

    let config = Config::default();

    let mut app = App::new(player, event_tx, config);
    app.start();

    terminal.draw(|f| app.render(f.area(), f.buffer_mut()))?;
    loop {
        match event_rx.recv()? {
            Event::Input(key) => {
                if !app.event(key)?.is_consumed() && key == app.config.key_config.quit {
                    break;
                }
            }
            Event::Player(msg) => app.player_message(msg),
        }

        terminal.draw(|f| app.render(f.area(), f.buffer_mut()))?;
    }

    ratatui::restore();

    Ok(())
}
