use std::fmt;
use std::sync::Arc;

use crate::player::PlayerItem;

/// Snapshot of the external player's now-playing item. Only the playback id
/// is guaranteed by the service; every other field may be absent and stays
/// absent, consumers render missing fields as blank.
#[derive(Debug, Clone)]
pub struct Track {
    pub id: String,
    pub title: Option<String>,
    pub artwork: Option<Artwork>,
    pub album: Option<String>,
    pub artist: Option<String>,
}

impl Track {
    pub fn from_item(item: PlayerItem) -> Self {
        Track {
            id: item.playback_id,
            title: item.title,
            artwork: item.artwork,
            album: item.album_title,
            artist: item.artist,
        }
    }

    /// The service only re-queues tracks it minted an id for. A track without
    /// one can still be displayed and bookmarked.
    pub fn is_playable(&self) -> bool {
        !self.id.is_empty()
    }
}

/// Handle to a track's cover image. The underlying resource belongs to the
/// player service; `image_at` resamples it to the requested pixel size.
#[derive(Clone)]
pub struct Artwork {
    render: Arc<dyn Fn(u32, u32) -> ArtworkImage + Send + Sync>,
}

impl Artwork {
    pub fn new(render: impl Fn(u32, u32) -> ArtworkImage + Send + Sync + 'static) -> Self {
        Artwork {
            render: Arc::new(render),
        }
    }

    pub fn image_at(&self, width: u32, height: u32) -> ArtworkImage {
        (self.render)(width, height)
    }
}

impl fmt::Debug for Artwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Artwork")
    }
}

/// 8-bit luminance image, row-major, `width * height` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

const SHADES: [char; 5] = [' ', '░', '▒', '▓', '█'];

impl ArtworkImage {
    /// Downsamples to a `cols` x `rows` glyph block for terminal display.
    pub fn shade_rows(&self, cols: u16, rows: u16) -> Vec<String> {
        (0..rows)
            .map(|row| {
                (0..cols)
                    .map(|col| {
                        let x = u32::from(col) * self.width / u32::from(cols.max(1));
                        let y = u32::from(row) * self.height / u32::from(rows.max(1));
                        shade(self.luma(x, y))
                    })
                    .collect()
            })
            .collect()
    }

    /// Single glyph summarizing the whole image, for one-cell row markers.
    pub fn glyph(&self) -> char {
        shade(self.mean_luma())
    }

    fn luma(&self, x: u32, y: u32) -> u8 {
        self.pixels
            .get((y * self.width + x) as usize)
            .copied()
            .unwrap_or(0)
    }

    fn mean_luma(&self) -> u8 {
        if self.pixels.is_empty() {
            return 0;
        }
        let sum: u64 = self.pixels.iter().map(|p| u64::from(*p)).sum();
        (sum / self.pixels.len() as u64) as u8
    }
}

fn shade(luma: u8) -> char {
    SHADES[luma as usize * (SHADES.len() - 1) / 255]
}
