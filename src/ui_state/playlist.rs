use crate::domain::TrackDescriptor;
use anyhow::{Result, bail};
use std::collections::HashSet;

/// Ordered, fixed list of tracks with exactly one active entry.
pub struct TrackSelector {
    tracks: Vec<TrackDescriptor>,
    active: usize,
}

impl TrackSelector {
    /// Fails on an empty list or a repeated track id.
    pub fn new(tracks: Vec<TrackDescriptor>) -> Result<Self> {
        if tracks.is_empty() {
            bail!("A playlist needs at least one track");
        }

        let mut seen = HashSet::with_capacity(tracks.len());
        if let Some(dupe) = tracks.iter().find(|t| !seen.insert(t.id())) {
            bail!("Track id {} is used more than once", dupe.id());
        }
        Ok(TrackSelector { tracks, active: 0 })
    }

    pub fn tracks(&self) -> &[TrackDescriptor] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> &TrackDescriptor {
        &self.tracks[self.active]
    }

    /// Out-of-range indices are ignored. Returns whether the active track changed.
    pub fn select_index(&mut self, idx: usize) -> bool {
        if idx >= self.tracks.len() || idx == self.active {
            return false;
        }
        self.active = idx;
        true
    }

    pub fn next(&mut self) -> usize {
        self.active = (self.active + 1) % self.len();
        self.active
    }

    pub fn previous(&mut self) -> usize {
        let len = self.len();
        self.active = (self.active + len - 1) % len;
        self.active
    }
}
