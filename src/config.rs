/// Construction-time settings for a [`Space`](crate::space::Space):
/// which rooms exist up front, plus a greeting for interactive front
/// ends.
#[derive(Debug, Default)]
pub struct SpaceConfig {
    pub rooms: Vec<String>,
    pub motd: Option<String>,
}

/// The builder accumulates optional values; chain the setters and
/// `build()` at the end.
pub struct SpaceConfigBuilder {
    rooms: Vec<String>,
    motd: Option<String>,
}

impl SpaceConfig {
    pub fn builder() -> SpaceConfigBuilder {
        SpaceConfigBuilder {
            rooms: Vec::new(),
            motd: None,
        }
    }
}

impl SpaceConfigBuilder {
    /// Add a room to pre-create. May be called repeatedly.
    pub fn room(mut self, label: impl Into<String>) -> Self {
        self.rooms.push(label.into());
        self
    }

    pub fn motd(mut self, motd: impl Into<String>) -> Self {
        self.motd = Some(motd.into());
        self
    }

    pub fn build(self) -> SpaceConfig {
        SpaceConfig {
            rooms: self.rooms,
            motd: self.motd,
        }
    }
}
