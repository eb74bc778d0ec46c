use crate::space::Space;
use crate::types::RoomId;

/// A restartable cursor over a room's history.
///
/// Holds a room handle and a position, nothing else. Each call reads the
/// history through the space, so the length is live: entries appended
/// after the cursor was created are still observed. Cursors over the
/// same room are independent.
#[derive(Debug, Clone)]
pub struct HistoryCursor {
    room: RoomId,
    pos: usize,
}

impl HistoryCursor {
    pub(crate) fn new(room: RoomId) -> Self {
        Self { room, pos: 0 }
    }

    /// True while an unread entry remains.
    pub fn has_next(&self, space: &Space) -> bool {
        space
            .room(self.room)
            .is_some_and(|room| self.pos < room.history().len())
    }

    /// The entry under the cursor, advancing past it. When exhausted (or
    /// when the room handle no longer resolves) yields `""` and does not
    /// advance.
    pub fn next(&mut self, space: &Space) -> String {
        let Some(room) = space.room(self.room) else {
            return String::new();
        };
        match room.history().get(self.pos) {
            Some(entry) => {
                self.pos += 1;
                entry.clone()
            }
            None => String::new(),
        }
    }

    /// Rewind to the first entry. Always legal, including at position 0
    /// or over an empty history.
    pub fn reset(&mut self) {
        self.pos = 0;
    }
}
