mod track;

pub use track::{Artwork, ArtworkImage, Track};
