use crate::types::{ParticipantId, RoomId};

/// One room: a display label, a roster of member handles, and an
/// append-only message history.
///
/// The roster holds IDs, never participants — a room does not manage
/// any participant's lifetime. Insertion order is preserved and is the
/// order broadcasts dispatch in.
#[derive(Debug)]
pub struct Room {
    id: RoomId,
    label: String,
    roster: Vec<ParticipantId>,
    history: Vec<String>,
}

impl Room {
    pub(crate) fn new(id: RoomId, label: String) -> Self {
        Self {
            id,
            label,
            roster: Vec::new(),
            history: Vec::new(),
        }
    }

    pub fn id(&self) -> RoomId {
        self.id
    }

    /// The display label. Unvalidated — may be empty or arbitrary.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Add a member. Returns false when already present.
    pub(crate) fn add_member(&mut self, id: ParticipantId) -> bool {
        if self.roster.contains(&id) {
            return false;
        }
        self.roster.push(id);
        true
    }

    /// Remove a member. Returns false when absent.
    pub(crate) fn remove_member(&mut self, id: ParticipantId) -> bool {
        let before = self.roster.len();
        self.roster.retain(|&member| member != id);
        self.roster.len() != before
    }

    /// Current members, in insertion order.
    pub fn roster(&self) -> &[ParticipantId] {
        &self.roster
    }

    pub(crate) fn save(&mut self, entry: String) {
        self.history.push(entry);
    }

    /// Every saved entry, in arrival order. Never truncated.
    pub fn history(&self) -> &[String] {
        &self.history
    }
}
