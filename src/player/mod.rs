mod simulated;

pub use simulated::SimulatedPlayer;

use crate::models::Artwork;

/// Seam to the platform media-player service. Outbound commands are
/// fire-and-forget, no result comes back; the only inbound data path is
/// `current_item`.
pub trait PlayerService: Send + Sync {
    /// The item at the playback head, if any is loaded.
    fn current_item(&self) -> Option<PlayerItem>;

    /// Replaces the play queue with the given playback identifiers.
    fn set_queue(&self, ids: &[String]);

    /// Starts playback of the current queue.
    fn play(&self);

    /// Registers the "now playing changed" handler. The signal is
    /// zero-argument and may fire on any thread. The service does not promise
    /// idempotent re-registration, so subscribe once per session.
    fn subscribe(&self, notify: Box<dyn Fn() + Send + Sync>);
}

/// What the service exposes about the currently loaded item.
#[derive(Debug, Clone)]
pub struct PlayerItem {
    pub playback_id: String,
    pub title: Option<String>,
    pub artwork: Option<Artwork>,
    pub album_title: Option<String>,
    pub artist: Option<String>,
}
