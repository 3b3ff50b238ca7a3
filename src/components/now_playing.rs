use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::Block;

use super::{Widget, WidgetRef};
use crate::models::Track;

/// Pixel size the detail artwork is requested at from the player service.
const DETAIL_ARTWORK_SIZE: u32 = 200;

const ARTWORK_COLS: u16 = 12;

/// Mirrors the now-playing track. Each metadata field binds independently; a
/// missing field blanks only its own line, and no track at all blanks
/// everything.
pub struct NowPlayingComponent {
    track: Option<Track>,
}

impl NowPlayingComponent {
    pub fn new() -> Self {
        NowPlayingComponent { track: None }
    }

    pub fn set_track(&mut self, track: Option<Track>) {
        self.track = track;
    }
}

impl WidgetRef for NowPlayingComponent {
    fn render_ref(&self, area: Rect, buf: &mut Buffer) {
        let area = {
            let border = Block::bordered().title("Now Playing");
            let a = border.inner(area);
            border.render(area, buf);
            a
        };

        let [art_area, text_area] = Layout::new(
            Direction::Horizontal,
            [Constraint::Length(ARTWORK_COLS), Constraint::Fill(1)],
        )
        .areas(area);

        let [title_area, album_area, artist_area] = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ],
        )
        .areas(text_area);

        let track = self.track.as_ref();

        let title = track.and_then(|t| t.title.as_deref()).unwrap_or("");
        let album = track.and_then(|t| t.album.as_deref()).unwrap_or("");
        let artist = track.and_then(|t| t.artist.as_deref()).unwrap_or("");

        Line::raw(title).render(title_area, buf);
        Line::raw(album).render(album_area, buf);
        Line::raw(artist).render(artist_area, buf);

        if let Some(artwork) = track.and_then(|t| t.artwork.as_ref()) {
            let image = artwork.image_at(DETAIL_ARTWORK_SIZE, DETAIL_ARTWORK_SIZE);
            for (i, row) in image
                .shade_rows(art_area.width, art_area.height)
                .into_iter()
                .enumerate()
            {
                let row_area = Rect::new(art_area.x, art_area.y + i as u16, art_area.width, 1);
                Line::raw(row).render(row_area, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::models::{Artwork, ArtworkImage};

    fn render(component: &NowPlayingComponent) -> String {
        let area = Rect::new(0, 0, 40, 6);
        let mut buf = Buffer::empty(area);
        component.render_ref(area, &mut buf);

        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buf.cell((x, y)).unwrap().symbol());
            }
            text.push('\n');
        }
        text
    }

    fn track() -> Track {
        Track {
            id: "123".to_string(),
            title: Some("Song A".to_string()),
            artwork: None,
            album: Some("Album A".to_string()),
            artist: Some("Artist A".to_string()),
        }
    }

    #[test]
    fn absent_track_renders_all_fields_blank() {
        let component = NowPlayingComponent::new();
        let text = render(&component);

        assert!(!text.contains("Song A"));
        assert!(!text.contains("Album A"));
        assert!(!text.contains("Artist A"));
    }

    #[test]
    fn full_track_renders_every_field_on_its_own_line() {
        let mut component = NowPlayingComponent::new();
        component.set_track(Some(track()));
        let text = render(&component);

        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[1].contains("Song A"));
        assert!(lines[2].contains("Album A"));
        assert!(lines[3].contains("Artist A"));
    }

    #[test]
    fn absent_field_blanks_only_its_own_line() {
        let mut partial = track();
        partial.title = None;

        let mut component = NowPlayingComponent::new();
        component.set_track(Some(partial));
        let text = render(&component);

        assert!(!text.contains("Song A"));
        assert!(text.contains("Album A"));
        assert!(text.contains("Artist A"));
    }

    #[test]
    fn rebinding_clears_previous_fields() {
        let mut component = NowPlayingComponent::new();
        component.set_track(Some(track()));

        let mut next = track();
        next.album = None;
        component.set_track(Some(next));
        let text = render(&component);

        assert!(text.contains("Song A"));
        assert!(!text.contains("Album A"));
    }

    #[test]
    fn artwork_is_requested_at_detail_size() {
        let sizes = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&sizes);

        let mut with_art = track();
        with_art.artwork = Some(Artwork::new(move |w, h| {
            recorded.lock().unwrap().push((w, h));
            ArtworkImage {
                width: w,
                height: h,
                pixels: vec![128; (w * h) as usize],
            }
        }));

        let mut component = NowPlayingComponent::new();
        component.set_track(Some(with_art));
        render(&component);

        assert_eq!(sizes.lock().unwrap().as_slice(), &[(200, 200)]);
    }
}
