use std::fmt;

/// Everything observable a space does, in emission order.
///
/// The rendered strings are the contract the embedding application and
/// the tests rely on — the journal keeps the structured values so
/// assertions don't have to scrape log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A participant was added to a room's roster.
    Joined { name: String, room: String },
    /// A participant was removed from a room's roster.
    Left { name: String, room: String },
    /// A message went out to a room.
    Broadcast {
        room: String,
        from: String,
        text: String,
    },
    /// A message was appended to a room's history.
    HistorySaved { room: String, entry: String },
    /// A participant's delivery state was replaced via a transition.
    StateChanged { name: String, state: &'static str },
    /// An available participant processed an incoming message.
    Received { name: String, text: String },
    /// A deferred participant kept an incoming message for later.
    Stored { name: String, text: String },
    /// A non-elevated participant tried to create a room.
    CreateDenied { name: String },
    /// An elevated participant created a room.
    RoomCreated { by: String, room: String },
    /// A participant was granted the elevated capability.
    Promoted { name: String },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Joined { name, room } => write!(f, "{name} joined {room} room!"),
            Event::Left { name, room } => write!(f, "{name} left {room} room!"),
            Event::Broadcast { room, from, text } => write!(f, "[{room}] {from}: {text}"),
            Event::HistorySaved { room, entry } => {
                write!(f, "[{room}] Message saved to history: {entry}")
            }
            Event::StateChanged { name, state } => {
                write!(f, "{name}'s state changed to {state}")
            }
            Event::Received { name, text } => write!(f, "{name} [Available] received: {text}"),
            Event::Stored { name, text } => {
                write!(f, "{name} [Deferred] message stored: {text}")
            }
            Event::CreateDenied { name } => {
                write!(f, "{name} does not have permission to create chat rooms!")
            }
            Event::RoomCreated { by, room } => write!(f, "Chat room created by {by}: {room}"),
            Event::Promoted { name } => {
                write!(f, "{name} has been granted admin privileges!")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_the_observable_strings() {
        let cases = [
            (
                Event::Joined {
                    name: "Alice".into(),
                    room: "general".into(),
                },
                "Alice joined general room!",
            ),
            (
                Event::Left {
                    name: "Alice".into(),
                    room: "general".into(),
                },
                "Alice left general room!",
            ),
            (
                Event::Broadcast {
                    room: "general".into(),
                    from: "Alice".into(),
                    text: "hi".into(),
                },
                "[general] Alice: hi",
            ),
            (
                Event::HistorySaved {
                    room: "general".into(),
                    entry: "Alice: hi".into(),
                },
                "[general] Message saved to history: Alice: hi",
            ),
            (
                Event::StateChanged {
                    name: "Bob".into(),
                    state: "Deferred",
                },
                "Bob's state changed to Deferred",
            ),
            (
                Event::CreateDenied {
                    name: "Bob".into(),
                },
                "Bob does not have permission to create chat rooms!",
            ),
        ];

        for (event, expected) in cases {
            assert_eq!(event.to_string(), expected);
        }
    }

    #[test]
    fn delivery_lines_distinguish_processed_from_stored() {
        let processed = Event::Received {
            name: "Bob".into(),
            text: "hi".into(),
        };
        let stored = Event::Stored {
            name: "Bob".into(),
            text: "hi".into(),
        };
        assert_eq!(processed.to_string(), "Bob [Available] received: hi");
        assert_eq!(stored.to_string(), "Bob [Deferred] message stored: hi");
    }
}
