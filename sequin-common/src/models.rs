//! Playlist models

use serde::{Deserialize, Serialize};

/// A playable item
///
/// Tracks carry no identity beyond their contents; two tracks with the same
/// title, artist and path are the same track. `path` is an opaque locator
/// (usually a URL path under `/static`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub path: String,
}

impl Track {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            path: path.into(),
        }
    }
}

/// Built-in demo playlist loaded when no tracks are configured
pub fn demo_playlist() -> Vec<Track> {
    vec![
        Track::new("Song 1", "Artist A", "/static/music/song1.mp3"),
        Track::new("Song 2", "Artist B", "/static/music/song2.mp3"),
        Track::new("Song 3", "Artist C", "/static/music/song3.mp3"),
        Track::new("Song 4", "Artist D", "/static/music/song4.mp3"),
    ]
}
