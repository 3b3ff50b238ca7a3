use crate::event::Key;

#[derive(Default)]
pub struct Config {
    pub key_config: KeyConfig,
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct KeyConfig {
    pub quit: Key,

    pub scroll_up: Key,
    pub scroll_down: Key,

    pub bookmark: Key,
    pub play_selected: Key,
}

impl Default for KeyConfig {
    fn default() -> Self {
        KeyConfig {
            quit: Key::Esc,
            scroll_up: Key::Char('k'),
            scroll_down: Key::Char('j'),
            bookmark: Key::Char('b'),
            play_selected: Key::Enter,
        }
    }
}
