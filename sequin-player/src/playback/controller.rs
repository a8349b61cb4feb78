//! Playback controller
//!
//! The single synchronization point for player state. Playlist, current
//! index, mode, shuffle bag and play/pause flag all live behind one exclusive
//! lock, so every operation is atomic with respect to every other one and no
//! caller ever sees a new index paired with a stale shuffle bag.
//!
//! Critical sections are in-memory only (at worst O(playlist length) when a
//! shuffle bag is drawn); nothing awaits while the lock is held.

use sequin_common::api::PlayerSnapshot;
use sequin_common::{PlayState, PlaybackMode, Track};
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::playlist::PlaylistStore;
use super::sequencer::SequencingEngine;
use super::shuffle::{ClockShuffle, ShuffleSource};

/// Everything guarded by the controller lock
#[derive(Debug)]
struct PlayerState {
    playlist: PlaylistStore,
    sequencer: SequencingEngine,
    play_state: PlayState,
}

/// Shared playback state and the operations on it
///
/// Construct once at startup and share as `Arc<PlaybackController>`.
#[derive(Debug)]
pub struct PlaybackController {
    state: Mutex<PlayerState>,
}

impl PlaybackController {
    /// Empty playlist, sequential mode, paused, clock-seeded shuffling
    pub fn new() -> Self {
        Self::with_shuffle_source(ClockShuffle)
    }

    /// Same as [`PlaybackController::new`] with a caller-supplied shuffle source
    pub fn with_shuffle_source(source: impl ShuffleSource + 'static) -> Self {
        Self {
            state: Mutex::new(PlayerState {
                playlist: PlaylistStore::new(),
                sequencer: SequencingEngine::new(Box::new(source)),
                play_state: PlayState::Paused,
            }),
        }
    }

    /// Move to the next track per the active mode.
    ///
    /// Returns `None` when the playlist is empty.
    pub async fn advance(&self) -> Option<Track> {
        let mut state = self.state.lock().await;
        let PlayerState { playlist, sequencer, .. } = &mut *state;

        let track = sequencer.advance(playlist);
        if let Some(track) = &track {
            debug!(
                "Advanced to #{} '{}' by {} (mode: {})",
                playlist.current_index(),
                track.title,
                track.artist,
                sequencer.mode()
            );
        }
        track
    }

    /// Flip between playing and paused; returns `true` if now playing
    pub async fn toggle_playing(&self) -> bool {
        let mut state = self.state.lock().await;
        state.play_state = state.play_state.toggled();
        debug!("Play state toggled to {}", state.play_state);
        state.play_state.is_playing()
    }

    /// Store a mode exactly as given and return it.
    ///
    /// Unknown strings are kept and behave like repeat-one. The shuffle bag is
    /// not touched.
    pub async fn set_mode(&self, mode: &str) -> PlaybackMode {
        let mode = PlaybackMode::from(mode);
        let mut state = self.state.lock().await;
        if !mode.is_recognized() {
            debug!("Unrecognized mode '{}' stored; tracks will repeat", mode);
        }
        state.sequencer.set_mode(mode.clone());
        debug!("Playback mode set to '{}'", mode);
        mode
    }

    /// Load a new playlist.
    ///
    /// Rewinds to the first track, returns to sequential mode and discards
    /// any shuffle bag. The play/pause flag is kept.
    pub async fn replace_playlist(&self, tracks: Vec<Track>) {
        let count = tracks.len();
        let mut state = self.state.lock().await;
        state.playlist.replace(tracks);
        state.sequencer.reset();
        info!("Playlist replaced with {} tracks", count);
    }

    /// Copy of the loaded playlist in canonical order
    pub async fn playlist(&self) -> Vec<Track> {
        self.state.lock().await.playlist.tracks().to_vec()
    }

    pub async fn mode(&self) -> PlaybackMode {
        self.state.lock().await.sequencer.mode().clone()
    }

    pub async fn is_playing(&self) -> bool {
        self.state.lock().await.play_state.is_playing()
    }

    /// All observable state, read under a single lock acquisition
    pub async fn snapshot(&self) -> PlayerSnapshot {
        let state = self.state.lock().await;
        PlayerSnapshot {
            current_index: state.playlist.current_index(),
            current: state.playlist.current().cloned(),
            mode: state.sequencer.mode().clone(),
            state: state.play_state,
            track_count: state.playlist.len(),
            shuffle_remaining: state.sequencer.shuffle_remaining(),
        }
    }
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new()
    }
}
