use std::sync::Arc;

use color_eyre::Result;
use crossbeam_channel::{Receiver, Sender};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::components::{
    BookmarkListComponent, Component, ComponentCommand, NowPlayingComponent, WidgetRef,
};
use crate::config::Config;
use crate::event::{Event, EventState, Key, PlayerMessage};
use crate::models::Track;
use crate::observer::NowPlayingObserver;
use crate::player::PlayerService;

pub struct App {
    now_playing: NowPlayingComponent,
    bookmarks: BookmarkListComponent,

    current_track: Option<Track>,

    observer: NowPlayingObserver,
    player: Arc<dyn PlayerService>,

    widget_cmd_rx: Receiver<ComponentCommand>,

    pub config: Config,
}

impl App {
    pub fn new(player: Arc<dyn PlayerService>, event_tx: Sender<Event>, config: Config) -> Self {
        let (app_cmd_tx, app_cmd_rx) = crossbeam_channel::bounded(256);

        App {
            now_playing: NowPlayingComponent::new(),
            bookmarks: BookmarkListComponent::new(config.key_config.clone(), app_cmd_tx),
            current_track: None,
            observer: NowPlayingObserver::new(Arc::clone(&player), event_tx),
            player,
            widget_cmd_rx: app_cmd_rx,
            config,
        }
    }

    /// Subscribes to the player's change signal. Once per session.
    pub fn start(&self) {
        self.observer.start();
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let [detail_area, list_area] = Layout::new(
            Direction::Vertical,
            [Constraint::Length(8), Constraint::Fill(1)],
        )
        .areas(area);

        self.now_playing.render_ref(detail_area, buf);
        self.bookmarks.render_ref(list_area, buf);
    }

    pub fn event(&mut self, key: Key) -> Result<EventState> {
        let res = if key == self.config.key_config.bookmark {
            self.bookmark_current();
            Ok(EventState::Consumed)
        } else {
            self.bookmarks.event(key)
        };

        self.drain_commands();
        res
    }

    /// Handles a player signal on the main loop, which is the only place
    /// `current_track` is ever written. The signal has no payload, so the
    /// observer re-queries the service.
    pub fn player_message(&mut self, msg: PlayerMessage) {
        match msg {
            PlayerMessage::NowPlayingChanged => {
                self.current_track = self.observer.snapshot();
                self.now_playing.set_track(self.current_track.clone());
            }
        }
    }

    /// Only reachable with a track present; without one the list stays
    /// untouched.
    fn bookmark_current(&mut self) {
        if let Some(track) = self.current_track.as_ref() {
            self.bookmarks.push(track.clone());
        }
    }

    fn drain_commands(&mut self) {
        while let Ok(cmd) = self.widget_cmd_rx.try_recv() {
            match cmd {
                ComponentCommand::BookmarkList(cmd) => {
                    use crate::components::bookmarks::Command;
                    match cmd {
                        Command::PlayBookmark { id } => {
                            log::debug!("re-queueing bookmark {id}");
                            self.player.set_queue(std::slice::from_ref(&id));
                            self.player.play();
                        }
                    }
                }
            }
        }
    }
}
