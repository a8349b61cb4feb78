//! Playback mode and play/pause state

use serde::{Deserialize, Serialize};

/// Selection policy for the next track
///
/// Wire names are `"sequence"`, `"random"` and `"repeat"`. Any other string is
/// accepted and kept verbatim as [`PlaybackMode::Unrecognized`]; the sequencer
/// treats it like [`PlaybackMode::RepeatOne`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlaybackMode {
    /// Advance through the playlist in order, wrapping at the end
    #[default]
    Sequential,
    /// Draw from a shuffle bag: each track once per batch
    Random,
    /// Keep returning the current track
    RepeatOne,
    /// Caller-supplied mode with no defined policy
    Unrecognized(String),
}

impl PlaybackMode {
    pub fn as_str(&self) -> &str {
        match self {
            PlaybackMode::Sequential => "sequence",
            PlaybackMode::Random => "random",
            PlaybackMode::RepeatOne => "repeat",
            PlaybackMode::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, PlaybackMode::Unrecognized(_))
    }
}

impl From<&str> for PlaybackMode {
    fn from(raw: &str) -> Self {
        match raw {
            "sequence" => PlaybackMode::Sequential,
            "random" => PlaybackMode::Random,
            "repeat" => PlaybackMode::RepeatOne,
            other => PlaybackMode::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for PlaybackMode {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "sequence" | "random" | "repeat" => PlaybackMode::from(raw.as_str()),
            _ => PlaybackMode::Unrecognized(raw),
        }
    }
}

impl From<PlaybackMode> for String {
    fn from(mode: PlaybackMode) -> Self {
        match mode {
            PlaybackMode::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for PlaybackMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Play/pause flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayState {
    Playing,
    #[default]
    Paused,
}

impl PlayState {
    pub fn is_playing(self) -> bool {
        self == PlayState::Playing
    }

    /// The other state
    pub fn toggled(self) -> Self {
        match self {
            PlayState::Playing => PlayState::Paused,
            PlayState::Paused => PlayState::Playing,
        }
    }
}

impl From<bool> for PlayState {
    fn from(playing: bool) -> Self {
        if playing {
            PlayState::Playing
        } else {
            PlayState::Paused
        }
    }
}

impl std::fmt::Display for PlayState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayState::Playing => write!(f, "playing"),
            PlayState::Paused => write!(f, "paused"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parses_wire_names() {
        assert_eq!(PlaybackMode::from("sequence"), PlaybackMode::Sequential);
        assert_eq!(PlaybackMode::from("random"), PlaybackMode::Random);
        assert_eq!(PlaybackMode::from("repeat"), PlaybackMode::RepeatOne);
    }

    #[test]
    fn test_unknown_mode_kept_verbatim() {
        let mode = PlaybackMode::from("loop-all");
        assert_eq!(mode, PlaybackMode::Unrecognized("loop-all".to_string()));
        assert_eq!(mode.as_str(), "loop-all");
        assert!(!mode.is_recognized());

        // Empty and case variants are not normalized
        assert_eq!(PlaybackMode::from(""), PlaybackMode::Unrecognized(String::new()));
        assert!(!PlaybackMode::from("Random").is_recognized());
    }

    #[test]
    fn test_mode_serde_uses_wire_strings() {
        let json = serde_json::to_string(&PlaybackMode::RepeatOne).unwrap();
        assert_eq!(json, "\"repeat\"");

        let mode: PlaybackMode = serde_json::from_str("\"shuffle\"").unwrap();
        assert_eq!(mode, PlaybackMode::Unrecognized("shuffle".to_string()));
    }

    #[test]
    fn test_play_state_toggle() {
        assert_eq!(PlayState::default(), PlayState::Paused);
        assert_eq!(PlayState::Paused.toggled(), PlayState::Playing);
        assert_eq!(PlayState::Playing.toggled(), PlayState::Paused);
        assert_eq!(PlayState::Playing.to_string(), "playing");
    }
}
