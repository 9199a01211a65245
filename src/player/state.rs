pub const DEFAULT_VOLUME: f64 = 1.0;

/// UI-facing mirror of the backend's playback state.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub is_playing: bool,
    pub position: f64,
    pub duration: f64,
    pub volume: f64,
    pub is_muted: bool,

    pub notice: Option<String>,
}

impl Default for PlaybackState {
    fn default() -> Self {
        PlaybackState {
            is_playing: false,
            position: 0.0,
            duration: 0.0,
            volume: DEFAULT_VOLUME,
            is_muted: false,

            notice: None,
        }
    }
}

impl PlaybackState {
    pub fn with_preferences(prefs: Preferences) -> Self {
        PlaybackState {
            volume: prefs.volume,
            is_muted: prefs.is_muted,
            ..Default::default()
        }
    }

    pub fn preferences(&self) -> Preferences {
        Preferences {
            volume: self.volume,
            is_muted: self.is_muted,
        }
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            is_playing: self.is_playing,
            position: self.position,
            duration: self.duration,
            volume: self.volume,
            is_muted: self.is_muted,
        }
    }
}

/// Session-level settings that survive a track change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preferences {
    pub volume: f64,
    pub is_muted: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            volume: DEFAULT_VOLUME,
            is_muted: false,
        }
    }
}

/// Read-only copy handed to the renderer each frame.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PlaybackSnapshot {
    pub is_playing: bool,
    pub position: f64,
    pub duration: f64,
    pub volume: f64,
    pub is_muted: bool,
}

impl PlaybackSnapshot {
    /// What the volume slider shows: zero while muted.
    pub fn effective_volume(&self) -> f64 {
        match self.is_muted {
            true => 0.0,
            false => self.volume,
        }
    }

    /// Position as a fraction of duration, `0.0` while duration is unknown.
    pub fn progress(&self) -> f64 {
        match self.duration > 0.0 {
            true => (self.position / self.duration).clamp(0.0, 1.0),
            false => 0.0,
        }
    }
}
