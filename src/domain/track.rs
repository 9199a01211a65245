use serde::Deserialize;

/// One playable entry: a stable id, a display title, and where to load it from.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackDescriptor {
    id: u64,
    title: String,
    source: String,
}

impl PartialEq for TrackDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl TrackDescriptor {
    pub fn new(id: u64, title: impl Into<String>, source: impl Into<String>) -> Self {
        TrackDescriptor {
            id,
            title: title.into(),
            source: source.into(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}
