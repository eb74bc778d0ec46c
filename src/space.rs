use tracing::{debug, info};

use crate::action::{Action, ActionKind};
use crate::config::SpaceConfig;
use crate::error::ParleyError;
use crate::event::Event;
use crate::history::HistoryCursor;
use crate::participant::Participant;
use crate::room::Room;
use crate::state::{DeliveryState, Reception};
use crate::types::{ParticipantId, RoomId};

/// The hub: owns every room and participant and routes between them, so
/// participants never hold references to each other.
///
/// All cross-references are handles into the two tables below. A handle
/// that no longer resolves is an absent reference, and every operation
/// involving one degrades to a no-op instead of panicking. A `Space` is
/// single-threaded and synchronous; if it ever needs sharing, one lock
/// (or one owning task) per space is the unit of serialization.
pub struct Space {
    rooms: Vec<Room>,
    participants: Vec<Option<Participant>>,
    events: Vec<Event>,
}

impl Space {
    /// Build a space, pre-creating the rooms named in the config.
    pub fn new(config: SpaceConfig) -> Self {
        let mut space = Self {
            rooms: Vec::new(),
            participants: Vec::new(),
            events: Vec::new(),
        };
        for label in config.rooms {
            space.create_room(label);
        }
        space
    }

    // ── participants ─────────────────────────────────────────────────

    /// Register a participant. Starts Available and non-elevated.
    pub fn add_participant(&mut self, name: impl Into<String>) -> ParticipantId {
        let id = ParticipantId::new(self.participants.len() as u64);
        self.participants
            .push(Some(Participant::new(name.into(), false)));
        id
    }

    /// Clear a participant's slot. Rooms are not auto-left: stale roster
    /// entries are skipped at dispatch time, and removing the member
    /// from its rooms first is the caller's job.
    pub fn remove_participant(&mut self, id: ParticipantId) {
        if let Some(slot) = self.participants.get_mut(id.index()) {
            *slot = None;
        }
    }

    /// Grant the elevated (room-creation) capability.
    pub fn promote(&mut self, id: ParticipantId) {
        let Some(participant) = self.participant_mut(id) else {
            return;
        };
        participant.set_elevated(true);
        let name = participant.name().to_string();
        self.emit(Event::Promoted { name });
    }

    pub fn participant(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.get(id.index()).and_then(|p| p.as_ref())
    }

    fn participant_mut(&mut self, id: ParticipantId) -> Option<&mut Participant> {
        self.participants.get_mut(id.index()).and_then(|p| p.as_mut())
    }

    // ── rooms ────────────────────────────────────────────────────────

    /// Construct a room directly. Application glue — no permission
    /// check; see [`Space::create_room_by`] for the gated path.
    pub fn create_room(&mut self, label: impl Into<String>) -> RoomId {
        let id = RoomId::new(self.rooms.len() as u64);
        self.rooms.push(Room::new(id, label.into()));
        id
    }

    /// Elevated-only room construction. The label is taken as-is: empty
    /// or arbitrary labels are accepted. A non-elevated creator gets the
    /// denial journaled and an error back; that denial is the one
    /// user-facing failure in the whole core.
    pub fn create_room_by(
        &mut self,
        creator: ParticipantId,
        label: impl Into<String>,
    ) -> Result<RoomId, ParleyError> {
        let Some(participant) = self.participant(creator) else {
            return Err(ParleyError::UnknownParticipant(creator));
        };
        let name = participant.name().to_string();
        if !participant.is_elevated() {
            self.emit(Event::CreateDenied { name: name.clone() });
            return Err(ParleyError::PermissionDenied { name });
        }
        let label = label.into();
        let id = self.create_room(label.clone());
        self.emit(Event::RoomCreated {
            by: name,
            room: label,
        });
        Ok(id)
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.index())
    }

    /// Look a room up by its label. First match wins; labels are not
    /// required to be unique.
    pub fn find_room(&self, label: &str) -> Option<RoomId> {
        self.rooms
            .iter()
            .find(|room| room.label() == label)
            .map(|room| room.id())
    }

    /// A room's history so far. An unknown room reads as empty.
    pub fn history(&self, room: RoomId) -> &[String] {
        self.room(room).map(|r| r.history()).unwrap_or(&[])
    }

    /// A fresh cursor over a room's history, positioned at the start.
    pub fn create_iterator(&self, room: RoomId) -> HistoryCursor {
        HistoryCursor::new(room)
    }

    // ── membership ───────────────────────────────────────────────────

    /// Join a room: tracked on the participant and registered on the
    /// roster, both idempotent. The join event fires only when the
    /// roster actually changes. Either handle failing to resolve is a
    /// no-op.
    pub fn join_room(&mut self, id: ParticipantId, room: RoomId) {
        if self.room(room).is_none() {
            return;
        }
        let Some(participant) = self.participant_mut(id) else {
            return;
        };
        participant.track_room(room);
        let name = participant.name().to_string();

        let r = &mut self.rooms[room.index()];
        if r.add_member(id) {
            let label = r.label().to_string();
            self.emit(Event::Joined { name, room: label });
        }
    }

    /// Leave a room. A member that never joined, or an unresolvable
    /// handle, is a no-op.
    pub fn leave_room(&mut self, id: ParticipantId, room: RoomId) {
        if self.room(room).is_none() {
            return;
        }
        let Some(participant) = self.participant_mut(id) else {
            return;
        };
        participant.untrack_room(room);
        let name = participant.name().to_string();

        let r = &mut self.rooms[room.index()];
        if r.remove_member(id) {
            let label = r.label().to_string();
            self.emit(Event::Left { name, room: label });
        }
    }

    // ── messaging ────────────────────────────────────────────────────

    /// Send: queue one deliver and one record action, then run the
    /// queue. Synchronous from the caller's view; the two-command shape
    /// is what a deferred or batched version would reuse. An absent room
    /// or sender queues nothing.
    pub fn send(&mut self, id: ParticipantId, text: &str, room: RoomId) {
        if self.room(room).is_none() {
            return;
        }
        let Some(participant) = self.participant_mut(id) else {
            return;
        };
        participant.queue.enqueue(Action::deliver(room, id, text));
        participant.queue.enqueue(Action::record(room, id, text));
        self.execute_all(id);
    }

    /// Run every queued action in FIFO order, then leave the queue empty
    /// — including when individual actions no longer resolve.
    pub fn execute_all(&mut self, id: ParticipantId) {
        let Some(participant) = self.participant_mut(id) else {
            return;
        };
        for action in participant.queue.drain() {
            match action.kind() {
                ActionKind::Deliver => {
                    self.send_message(action.room(), action.text(), action.sender());
                }
                ActionKind::Record => {
                    self.save_message(action.room(), action.text(), action.sender());
                }
            }
        }
    }

    /// Broadcast to every roster member except the sender, in roster
    /// insertion order. The sender must resolve — an absent sender
    /// dispatches nothing.
    pub fn send_message(&mut self, room: RoomId, text: &str, sender: ParticipantId) {
        let Some(from) = self.participant(sender).map(|p| p.name().to_string()) else {
            return;
        };
        let Some(r) = self.room(room) else {
            return;
        };
        let label = r.label().to_string();
        // Snapshot the roster: receive() needs the space mutably.
        let roster = r.roster().to_vec();

        self.emit(Event::Broadcast {
            room: label,
            from,
            text: text.to_string(),
        });
        for member in roster {
            if member != sender {
                self.receive(member, text, sender, room);
            }
        }
    }

    /// Append `"{sender}: {text}"` to the room's history. The sender
    /// must resolve, same as [`Space::send_message`].
    pub fn save_message(&mut self, room: RoomId, text: &str, sender: ParticipantId) {
        let Some(from) = self.participant(sender).map(|p| p.name().to_string()) else {
            return;
        };
        let Some(r) = self.rooms.get_mut(room.index()) else {
            return;
        };
        let entry = format!("{from}: {text}");
        r.save(entry.clone());
        let label = r.label().to_string();
        self.emit(Event::HistorySaved { room: label, entry });
    }

    /// Hand an incoming message to the receiver's delivery state. An
    /// absent sender, an absent receiver, or a receiver with no state
    /// is a no-op.
    pub fn receive(&mut self, id: ParticipantId, text: &str, from: ParticipantId, room: RoomId) {
        if self.participant(from).is_none() {
            return;
        }
        let Some(participant) = self.participant(id) else {
            return;
        };
        let Some(state) = participant.state() else {
            debug!(%id, %room, "no delivery state, message ignored");
            return;
        };
        let name = participant.name().to_string();

        match state.handle() {
            Reception::Processed => self.emit(Event::Received {
                name,
                text: text.to_string(),
            }),
            Reception::Stored => self.emit(Event::Stored {
                name,
                text: text.to_string(),
            }),
            Reception::Dropped => {
                debug!(%id, %room, "unavailable, message dropped");
            }
        }
    }

    // ── delivery state ───────────────────────────────────────────────

    /// Silent wholesale replacement of the delivery state; the old one
    /// is discarded. `None` disables reception until a state is set
    /// again.
    pub fn set_state(&mut self, id: ParticipantId, state: Option<DeliveryState>) {
        if let Some(participant) = self.participant_mut(id) {
            participant.set_state(state);
        }
    }

    /// Transition with the state-change event. The event fires even
    /// when the new state equals the old one — no no-op short-circuit.
    pub fn change_state(&mut self, id: ParticipantId, state: DeliveryState) {
        let Some(participant) = self.participant_mut(id) else {
            return;
        };
        participant.set_state(Some(state));
        let name = participant.name().to_string();
        self.emit(Event::StateChanged {
            name,
            state: state.name(),
        });
    }

    // ── journal ──────────────────────────────────────────────────────

    fn emit(&mut self, event: Event) {
        info!("{event}");
        self.events.push(event);
    }

    /// Everything observable so far, in emission order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Drain the journal, leaving it empty.
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}

impl Default for Space {
    fn default() -> Self {
        Self::new(SpaceConfig::default())
    }
}
