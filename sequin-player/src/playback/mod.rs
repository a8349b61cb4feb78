//! Playback sequencing
//!
//! - `playlist`: loaded tracks and current position
//! - `sequencer`: next-track selection per mode, shuffle bag
//! - `shuffle`: permutation sources for the shuffle bag
//! - `controller`: lock-guarded public surface

pub mod controller;
pub mod playlist;
pub mod sequencer;
pub mod shuffle;

pub use controller::PlaybackController;
pub use playlist::PlaylistStore;
pub use sequencer::SequencingEngine;
pub use shuffle::{ClockShuffle, SeededShuffle, ShuffleSource};
