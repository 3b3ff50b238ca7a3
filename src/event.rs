use crossterm::event::{self, KeyCode, KeyModifiers};

#[derive(PartialEq, Debug)]
pub enum EventState {
    Consumed,
    NotConsumed,
}

impl EventState {
    pub fn is_consumed(&self) -> bool {
        *self == EventState::Consumed
    }
}

#[derive(Clone, Debug)]
pub enum Event {
    Input(Key),
    Player(PlayerMessage),
}

/// Signals from the external player service. They carry no payload; handlers
/// re-query the service for current state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayerMessage {
    NowPlayingChanged,
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Key {
    Enter,
    Esc,

    Up,
    Down,

    Char(char),
    Ctrl(char),
    Unknown,
}

impl From<event::KeyEvent> for Key {
    fn from(value: event::KeyEvent) -> Self {
        let mods = value.modifiers;
        match value.code {
            KeyCode::Enter => Self::Enter,
            KeyCode::Esc => Self::Esc,

            KeyCode::Up => Self::Up,
            KeyCode::Down => Self::Down,

            KeyCode::Char(c) if mods == KeyModifiers::CONTROL => Self::Ctrl(c),
            KeyCode::Char(c) => Self::Char(c),
            _ => Self::Unknown,
        }
    }
}
