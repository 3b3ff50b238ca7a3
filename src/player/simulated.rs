use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use std::time::Duration;

use rand::Rng;

use super::{PlayerItem, PlayerService};
use crate::models::{Artwork, ArtworkImage};

/// Stand-in for the platform music player so the binary has something to
/// mirror. Rotates the now-playing item through a built-in catalog on a
/// background thread, and loops `set_queue` + `play` back into a now-playing
/// change the way the real service does.
pub struct SimulatedPlayer {
    inner: Mutex<Inner>,
}

struct Inner {
    catalog: Vec<PlayerItem>,
    current: Option<usize>,
    queue: Vec<String>,
    subscriber: Option<Box<dyn Fn() + Send + Sync>>,
}

impl SimulatedPlayer {
    pub fn new() -> Arc<Self> {
        Arc::new(SimulatedPlayer {
            inner: Mutex::new(Inner {
                catalog: catalog(),
                current: None,
                queue: Vec::new(),
                subscriber: None,
            }),
        })
    }

    /// Spawns the rotation thread. The change signal fires from that thread;
    /// subscribers are expected to hop back onto their own context.
    pub fn run(self: Arc<Self>, interval: Duration) {
        _ = thread::spawn(move || {
            let mut rng = rand::rng();
            loop {
                thread::sleep(interval);

                let mut guard = self.inner();
                let inner = &mut *guard;
                let next = rng.random_range(0..inner.catalog.len());
                inner.current = Some(next);
                log::debug!(
                    "rotating now-playing to {}",
                    inner.catalog[next].playback_id
                );
                if let Some(notify) = inner.subscriber.as_ref() {
                    notify();
                }
            }
        });
    }

    fn inner(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("player state poisoned")
    }
}

impl PlayerService for SimulatedPlayer {
    fn current_item(&self) -> Option<PlayerItem> {
        let inner = self.inner();
        inner.current.map(|i| inner.catalog[i].clone())
    }

    fn set_queue(&self, ids: &[String]) {
        log::info!("set queue: {ids:?}");
        self.inner().queue = ids.to_vec();
    }

    fn play(&self) {
        log::info!("play");

        let mut guard = self.inner();
        let inner = &mut *guard;
        let Some(id) = inner.queue.first() else {
            return;
        };
        let Some(index) = inner
            .catalog
            .iter()
            .position(|item| item.playback_id == *id)
        else {
            return;
        };

        inner.current = Some(index);
        if let Some(notify) = inner.subscriber.as_ref() {
            notify();
        }
    }

    fn subscribe(&self, notify: Box<dyn Fn() + Send + Sync>) {
        self.inner().subscriber = Some(notify);
    }
}

fn catalog() -> Vec<PlayerItem> {
    vec![
        item(
            "1001",
            Some("Slow Fade"),
            Some("Night Drive"),
            Some("The Meridian"),
            Some(0x35),
        ),
        item(
            "1002",
            Some("Paper Planes Over Glass"),
            None,
            Some("Iva Lune"),
            Some(0x7c),
        ),
        item(
            "1003",
            Some("Cold Harbour"),
            Some("Night Drive"),
            Some("The Meridian"),
            None,
        ),
        // Metadata-poor entry, keeps the blank-field rendering honest.
        item("1004", None, Some("Untitled Sessions"), None, Some(0xe1)),
    ]
}

fn item(
    id: &str,
    title: Option<&str>,
    album: Option<&str>,
    artist: Option<&str>,
    artwork_seed: Option<u8>,
) -> PlayerItem {
    PlayerItem {
        playback_id: id.to_string(),
        title: title.map(str::to_string),
        artwork: artwork_seed.map(artwork),
        album_title: album.map(str::to_string),
        artist: artist.map(str::to_string),
    }
}

/// Procedural cover art, one deterministic pattern per seed.
fn artwork(seed: u8) -> Artwork {
    Artwork::new(move |width, height| {
        let mut pixels = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                let v = x
                    .wrapping_mul(u32::from(seed))
                    .wrapping_add(y.wrapping_mul(31));
                pixels.push((v ^ (x & y)) as u8);
            }
        }
        ArtworkImage {
            width,
            height,
            pixels,
        }
    })
}
