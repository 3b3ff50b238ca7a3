use color_eyre::Result;
use crossbeam_channel::Sender;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::{Block, Paragraph};

use super::{Component, ComponentCommand, Widget, WidgetRef};
use crate::components::utils::VerticalScroll;
use crate::config::KeyConfig;
use crate::event::{EventState, Key};
use crate::models::Track;
use crate::store::BookmarkListStore;

/// Pixel size row artwork is requested at from the player service.
const ROW_ARTWORK_SIZE: u32 = 40;

pub enum Command {
    /// Hand the bookmarked track's id back to the player as a one-item queue
    /// and start playback.
    PlayBookmark { id: String },
}

/// The bookmarked-tracks list. Owns the backing store; appending happens
/// here, replaying goes up to the app as a command.
pub struct BookmarkListComponent {
    store: BookmarkListStore,
    scroll: VerticalScroll,
    key_config: KeyConfig,
    app_cmd_tx: Sender<ComponentCommand>,
}

impl BookmarkListComponent {
    pub fn new(key_config: KeyConfig, app_cmd_tx: Sender<ComponentCommand>) -> Self {
        Self {
            store: BookmarkListStore::new(),
            scroll: VerticalScroll::new(),
            key_config,
            app_cmd_tx,
        }
    }

    /// Appends to the backing store. The caller redraws the whole frame
    /// afterwards, which is the list's full refresh.
    pub fn push(&mut self, track: Track) {
        self.store.append(track);
    }

    pub fn store(&self) -> &BookmarkListStore {
        &self.store
    }

    fn play_selected(&self) -> Result<()> {
        if self.store.is_empty() {
            return Ok(());
        }

        let track = self.store.at(self.scroll.pos());
        if !track.is_playable() {
            log::warn!("bookmark has no playback id, cannot re-queue");
            return Ok(());
        }

        self.send_command(Command::PlayBookmark {
            id: track.id.clone(),
        })
    }

    fn send_command(&self, cmd: Command) -> Result<()> {
        self.app_cmd_tx.send(ComponentCommand::BookmarkList(cmd))?;
        Ok(())
    }
}

fn row_line(track: &Track) -> String {
    let glyph = track
        .artwork
        .as_ref()
        .map(|a| a.image_at(ROW_ARTWORK_SIZE, ROW_ARTWORK_SIZE).glyph())
        .unwrap_or(' ');
    let title = track.title.as_deref().unwrap_or("");
    let artist = track.artist.as_deref().unwrap_or("");

    format!("{glyph} {title}  {artist}")
}

impl WidgetRef for BookmarkListComponent {
    fn render_ref(&self, area: Rect, buf: &mut Buffer) {
        let area = {
            let border = Block::bordered().title("Bookmarks");
            let a = border.inner(area);
            border.render(area, buf);
            a
        };

        self.scroll.update(area.height as usize, self.store.count());

        let rows = self
            .store
            .iter()
            .skip(self.scroll.y_offset())
            .take(area.height as usize)
            .map(row_line)
            .collect::<Vec<String>>();

        Paragraph::new(rows.join("\n")).render(area, buf);

        if !self.store.is_empty() && area.height > 0 {
            let selected = (self.scroll.pos() - self.scroll.y_offset()) as u16;
            for x in area.left()..area.right() {
                if let Some(cell) = buf.cell_mut((x, area.y + selected)) {
                    cell.set_bg(Color::Blue);
                }
            }
        }
    }
}

impl Component for BookmarkListComponent {
    fn event(&mut self, key: Key) -> Result<EventState> {
        if key == self.key_config.scroll_up {
            self.scroll.move_up();
            Ok(EventState::Consumed)
        } else if key == self.key_config.scroll_down {
            self.scroll.move_down(self.store.count());
            Ok(EventState::Consumed)
        } else if key == self.key_config.play_selected {
            self.play_selected()?;
            Ok(EventState::Consumed)
        } else {
            Ok(EventState::NotConsumed)
        }
    }
}
