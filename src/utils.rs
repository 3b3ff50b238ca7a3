use color_eyre::Result;
use crossbeam_channel::Sender;
use crossterm::event;

use crate::event::{Event, Key};

/// Forwards terminal key presses into the app event channel.
pub fn spawn_input_emitter(event_tx: Sender<Event>) {
    _ = std::thread::spawn(move || -> Result<()> {
        loop {
            if let event::Event::Key(key) = event::read()? {
                event_tx.send(Event::Input(Key::from(key)))?;
            }
        }
    });
}
