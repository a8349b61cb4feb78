//! Next-track selection
//!
//! The sequencer owns the active [`PlaybackMode`] and, for random mode, the
//! shuffle bag. It moves the playlist's current index and returns the track
//! that should play next.
//!
//! Random mode semantics:
//! - The bag holds a permutation of all playlist indices; each advance pops
//!   the front.
//! - When a pop empties the bag a new full permutation is drawn right away,
//!   so any run of `len` advances starting at a bag boundary plays every track
//!   exactly once. The last track of one batch may repeat as the first of the
//!   next batch.
//! - The bag survives mode switches; only a playlist replacement discards it.

use std::collections::VecDeque;

use sequin_common::{PlaybackMode, Track};
use tracing::{debug, trace, warn};

use super::playlist::PlaylistStore;
use super::shuffle::{ClockShuffle, ShuffleSource};

/// Computes the next playlist index according to the active mode
pub struct SequencingEngine {
    mode: PlaybackMode,
    /// Not-yet-dispensed indices, `None` until random mode first advances
    shuffle_bag: Option<VecDeque<usize>>,
    shuffle: Box<dyn ShuffleSource>,
}

impl SequencingEngine {
    pub fn new(shuffle: Box<dyn ShuffleSource>) -> Self {
        Self {
            mode: PlaybackMode::Sequential,
            shuffle_bag: None,
            shuffle,
        }
    }

    pub fn mode(&self) -> &PlaybackMode {
        &self.mode
    }

    /// Store a new mode. The shuffle bag is left untouched.
    pub fn set_mode(&mut self, mode: PlaybackMode) {
        self.mode = mode;
    }

    /// Back to sequential mode with no shuffle bag
    pub fn reset(&mut self) {
        self.mode = PlaybackMode::Sequential;
        self.shuffle_bag = None;
    }

    /// Number of indices left in the bag, `None` if no bag exists
    pub fn shuffle_remaining(&self) -> Option<usize> {
        self.shuffle_bag.as_ref().map(VecDeque::len)
    }

    /// Advance the playlist and return the track to play.
    ///
    /// Returns `None` without touching any state when the playlist is empty.
    pub fn advance(&mut self, playlist: &mut PlaylistStore) -> Option<Track> {
        if playlist.is_empty() {
            debug!("Advance requested on empty playlist");
            return None;
        }

        let len = playlist.len();
        let next = match self.mode {
            PlaybackMode::Sequential => (playlist.current_index() + 1) % len,
            PlaybackMode::Random => self.draw(len),
            // Unrecognized modes have no policy of their own and stay put
            PlaybackMode::RepeatOne | PlaybackMode::Unrecognized(_) => playlist.current_index(),
        };

        trace!("Advancing ({}) to index {} of {}", self.mode, next, len);
        playlist.select(next).cloned()
    }

    /// Pop the next index from the shuffle bag, refilling it once exhausted
    fn draw(&mut self, len: usize) -> usize {
        let mut bag = match self.shuffle_bag.take() {
            Some(bag) => bag,
            None => self.fill_bag(len),
        };

        // A freshly filled bag holds len >= 1 entries
        let next = bag.pop_front().unwrap_or(0);
        if bag.is_empty() {
            bag = self.fill_bag(len);
        }

        self.shuffle_bag = Some(bag);
        next
    }

    /// A source that returns anything but a permutation of `0..len` is
    /// replaced by a clock-seeded shuffle for this bag.
    fn fill_bag(&mut self, len: usize) -> VecDeque<usize> {
        let mut order = self.shuffle.permutation(len);
        if !is_permutation(&order, len) {
            warn!(
                "Shuffle source returned {:?} for {} tracks, using clock shuffle",
                order, len
            );
            order = ClockShuffle.permutation(len);
        }
        debug!("Drew new shuffle bag of {} tracks", len);
        order.into()
    }
}

fn is_permutation(order: &[usize], len: usize) -> bool {
    let mut seen = vec![false; len];
    order.len() == len
        && order.iter().all(|&i| i < len && !std::mem::replace(&mut seen[i], true))
}

impl std::fmt::Debug for SequencingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SequencingEngine")
            .field("mode", &self.mode)
            .field("shuffle_bag", &self.shuffle_bag)
            .finish_non_exhaustive()
    }
}
