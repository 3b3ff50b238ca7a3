pub mod bookmarks;
pub mod now_playing;
pub mod utils;

pub use bookmarks::BookmarkListComponent;
pub use now_playing::NowPlayingComponent;

pub use ratatui::widgets::Widget;
pub use ratatui::widgets::WidgetRef;

use color_eyre::Result;

use crate::event::{EventState, Key};

/// Side effects a widget cannot perform itself are sent up to the app over
/// the command channel and executed there.
pub enum ComponentCommand {
    BookmarkList(bookmarks::Command),
}

pub trait Component {
    fn event(&mut self, key: Key) -> Result<EventState>;
}
