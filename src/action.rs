use crate::types::{ParticipantId, RoomId};

/// The two effects a send decomposes into.
///
/// A closed set, like [`DeliveryState`](crate::state::DeliveryState):
/// enum dispatch, exhaustive match, no trait objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Broadcast the text to the room's roster.
    Deliver,
    /// Append the text to the room's history.
    Record,
}

/// One pending effect. Room, sender, and text are captured at creation
/// time and immutable afterwards; the handles are resolved only at
/// execution, so an action can outlive what it points at and still
/// execute as a harmless no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    kind: ActionKind,
    room: RoomId,
    sender: ParticipantId,
    text: String,
}

impl Action {
    pub fn deliver(room: RoomId, sender: ParticipantId, text: impl Into<String>) -> Self {
        Self {
            kind: ActionKind::Deliver,
            room,
            sender,
            text: text.into(),
        }
    }

    pub fn record(room: RoomId, sender: ParticipantId, text: impl Into<String>) -> Self {
        Self {
            kind: ActionKind::Record,
            room,
            sender,
            text: text.into(),
        }
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    pub fn room(&self) -> RoomId {
        self.room
    }

    pub fn sender(&self) -> ParticipantId {
        self.sender
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// FIFO queue of pending actions, owned exclusively by one participant.
///
/// Execution lives in the space (actions hold handles, not references);
/// the queue only preserves order and hands everything over at once.
#[derive(Debug, Default)]
pub struct ActionQueue {
    pending: Vec<Action>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an action. `None` is accepted and ignored.
    pub fn enqueue(&mut self, action: impl Into<Option<Action>>) {
        if let Some(action) = action.into() {
            self.pending.push(action);
        }
    }

    /// Take every pending action in FIFO order, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<Action> {
        std::mem::take(&mut self.pending)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room() -> RoomId {
        RoomId::new(0)
    }

    fn sender() -> ParticipantId {
        ParticipantId::new(0)
    }

    #[test]
    fn drains_in_fifo_order() {
        let mut queue = ActionQueue::new();
        queue.enqueue(Action::deliver(room(), sender(), "first"));
        queue.enqueue(Action::record(room(), sender(), "second"));
        queue.enqueue(Action::deliver(room(), sender(), "third"));

        let drained = queue.drain();
        let texts: Vec<&str> = drained.iter().map(|a| a.text()).collect();
        assert_eq!(texts, ["first", "second", "third"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn enqueue_none_is_a_noop() {
        let mut queue = ActionQueue::new();
        queue.enqueue(None);
        assert!(queue.is_empty());

        queue.enqueue(Action::deliver(room(), sender(), "real"));
        queue.enqueue(None);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn drain_on_empty_queue_yields_nothing() {
        let mut queue = ActionQueue::new();
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn actions_capture_their_arguments() {
        let action = Action::record(RoomId::new(3), ParticipantId::new(7), "text");
        assert_eq!(action.kind(), ActionKind::Record);
        assert_eq!(action.room(), RoomId::new(3));
        assert_eq!(action.sender(), ParticipantId::new(7));
        assert_eq!(action.text(), "text");
    }
}
