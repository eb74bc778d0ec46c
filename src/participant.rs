use crate::action::ActionQueue;
use crate::state::DeliveryState;
use crate::types::RoomId;

/// A named participant: the rooms it has joined, its pending-action
/// queue, and the delivery state that decides what happens to incoming
/// messages.
///
/// Participants live in the space's slot table and are addressed by
/// [`ParticipantId`](crate::types::ParticipantId); nothing else holds
/// one.
#[derive(Debug)]
pub struct Participant {
    name: String,
    elevated: bool,
    rooms: Vec<RoomId>,
    pub(crate) queue: ActionQueue,
    state: Option<DeliveryState>,
}

impl Participant {
    pub(crate) fn new(name: String, elevated: bool) -> Self {
        Self {
            name,
            elevated,
            rooms: Vec::new(),
            queue: ActionQueue::new(),
            state: Some(DeliveryState::default()),
        }
    }

    /// Immutable identity.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this participant may create rooms.
    pub fn is_elevated(&self) -> bool {
        self.elevated
    }

    pub(crate) fn set_elevated(&mut self, elevated: bool) {
        self.elevated = elevated;
    }

    /// Rooms joined so far, in join order.
    pub fn rooms(&self) -> &[RoomId] {
        &self.rooms
    }

    /// Track a joined room. Returns false when already tracked.
    pub(crate) fn track_room(&mut self, room: RoomId) -> bool {
        if self.rooms.contains(&room) {
            return false;
        }
        self.rooms.push(room);
        true
    }

    /// Forget a room. Returns false when it was never tracked.
    pub(crate) fn untrack_room(&mut self, room: RoomId) -> bool {
        let before = self.rooms.len();
        self.rooms.retain(|&r| r != room);
        self.rooms.len() != before
    }

    /// Current delivery state. `None` means reception is disabled and
    /// incoming messages are ignored.
    pub fn state(&self) -> Option<DeliveryState> {
        self.state
    }

    /// Wholesale replacement — the previous state is discarded.
    pub(crate) fn set_state(&mut self, state: Option<DeliveryState>) {
        self.state = state;
    }

    /// Number of queued, not-yet-executed actions.
    pub fn pending_actions(&self) -> usize {
        self.queue.len()
    }
}
