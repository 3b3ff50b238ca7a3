use crate::models::Track;

/// Session-lifetime bookmark sequence. Append-only, insertion order kept,
/// duplicates allowed; nothing is ever persisted.
#[derive(Default)]
pub struct BookmarkListStore {
    tracks: Vec<Track>,
}

impl BookmarkListStore {
    pub fn new() -> Self {
        BookmarkListStore::default()
    }

    pub fn append(&mut self, track: Track) {
        self.tracks.push(track);
    }

    pub fn count(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Indices come from the list's own render state, so an out-of-range
    /// index means the UI and the store desynchronized. That is a bug, and it
    /// panics rather than misbehaving quietly.
    pub fn at(&self, index: usize) -> &Track {
        &self.tracks[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }
}
