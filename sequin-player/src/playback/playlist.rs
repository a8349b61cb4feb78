//! Playlist store
//!
//! Holds the loaded tracks in canonical order plus the current position.
//! Not synchronized by itself: the controller owns it behind its lock.

use sequin_common::Track;

/// Ordered set of loaded tracks and the index of the current one
#[derive(Debug, Default)]
pub struct PlaylistStore {
    tracks: Vec<Track>,
    /// Always `< tracks.len()` when the playlist is non-empty, 0 otherwise
    current_index: usize,
}

impl PlaylistStore {
    /// Create an empty playlist
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole playlist and rewind to the first track
    pub fn replace(&mut self, tracks: Vec<Track>) {
        self.tracks = tracks;
        self.current_index = 0;
    }

    /// Read-only view of the playlist in canonical order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Track at the current index, `None` when the playlist is empty
    pub fn current(&self) -> Option<&Track> {
        self.tracks.get(self.current_index)
    }

    /// Move to `index` and return the track there.
    ///
    /// Out-of-range indices leave the position unchanged and return `None`.
    pub fn select(&mut self, index: usize) -> Option<&Track> {
        if index >= self.tracks.len() {
            return None;
        }
        self.current_index = index;
        self.tracks.get(index)
    }
}
