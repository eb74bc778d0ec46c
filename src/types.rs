use std::fmt;

/// Handle for a participant slot.
///
/// Handles are never dereferenced directly: every operation resolves
/// them through the space's tables, and a handle that fails to resolve
/// reads as an absent participant. The newtype keeps raw integers from
/// being passed where a handle is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParticipantId(u64);

impl ParticipantId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Return the raw index for slot-table lookup.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "participant#{}", self.0)
    }
}

/// Handle for a room. Same resolution rules as [`ParticipantId`],
/// though rooms are never removed, so a room handle only fails to
/// resolve when it came from a different space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomId(u64);

impl RoomId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Return the raw index for table lookup.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "room#{}", self.0)
    }
}
