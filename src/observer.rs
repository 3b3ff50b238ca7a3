use std::sync::Arc;

use crossbeam_channel::Sender;

use crate::event::{Event, PlayerMessage};
use crate::models::Track;
use crate::player::PlayerService;

/// Follows the external player's playback head. The change signal may arrive
/// on any thread; the registered handler only forwards it into the app event
/// channel, so reading player state and touching UI always happens on the
/// main loop. The hop is taken unconditionally, even for signals raised on
/// the loop thread itself.
pub struct NowPlayingObserver {
    player: Arc<dyn PlayerService>,
    event_tx: Sender<Event>,
}

impl NowPlayingObserver {
    pub fn new(player: Arc<dyn PlayerService>, event_tx: Sender<Event>) -> Self {
        NowPlayingObserver { player, event_tx }
    }

    /// Registers the change handler, then primes state with one synthetic
    /// change event. The service does not promise idempotent registration;
    /// call once per session. The subscription lives until the process exits.
    pub fn start(&self) {
        let tx = self.event_tx.clone();
        self.player.subscribe(Box::new(move || {
            if tx
                .send(Event::Player(PlayerMessage::NowPlayingChanged))
                .is_err()
            {
                log::warn!("now-playing signal dropped, event loop is gone");
            }
        }));

        _ = self
            .event_tx
            .send(Event::Player(PlayerMessage::NowPlayingChanged));
    }

    /// Re-queries the playback head. The change signal carries no payload, so
    /// this is the only way to learn what is playing; nothing loaded means
    /// `None`, not an error.
    pub fn snapshot(&self) -> Option<Track> {
        self.player.current_item().map(Track::from_item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::PlayerItem;
    use crate::player::fake::FakePlayer;

    fn item(id: &str, title: Option<&str>) -> PlayerItem {
        PlayerItem {
            playback_id: id.to_string(),
            title: title.map(str::to_string),
            artwork: None,
            album_title: None,
            artist: None,
        }
    }

    #[test]
    fn start_subscribes_and_primes_one_event() {
        let player = FakePlayer::new();
        let (tx, rx) = crossbeam_channel::unbounded();
        let observer = NowPlayingObserver::new(player.clone(), tx);

        observer.start();

        assert!(player.has_subscriber());
        assert!(matches!(
            rx.try_recv(),
            Ok(Event::Player(PlayerMessage::NowPlayingChanged))
        ));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn signal_is_redispatched_through_the_channel() {
        let player = FakePlayer::new();
        let (tx, rx) = crossbeam_channel::unbounded();
        let observer = NowPlayingObserver::new(player.clone(), tx);

        observer.start();
        while rx.try_recv().is_ok() {}

        player.notify();
        assert!(matches!(
            rx.try_recv(),
            Ok(Event::Player(PlayerMessage::NowPlayingChanged))
        ));
    }

    #[test]
    fn snapshot_is_absent_while_nothing_is_loaded() {
        let player = FakePlayer::new();
        let (tx, _rx) = crossbeam_channel::unbounded();
        let observer = NowPlayingObserver::new(player.clone(), tx);

        assert!(observer.snapshot().is_none());

        player.load(Some(item("123", Some("Song A"))));
        player.load(None);
        assert!(observer.snapshot().is_none());
    }

    #[test]
    fn snapshot_mirrors_the_loaded_item() {
        let player = FakePlayer::new();
        let (tx, _rx) = crossbeam_channel::unbounded();
        let observer = NowPlayingObserver::new(player.clone(), tx);

        player.load(Some(item("123", Some("Song A"))));

        let track = observer.snapshot().expect("item is loaded");
        assert_eq!(track.id, "123");
        assert_eq!(track.title.as_deref(), Some("Song A"));
        assert_eq!(track.album, None);
    }
}
